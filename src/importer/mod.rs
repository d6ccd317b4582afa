// ==========================================
// 商品调货建议系统 - 导入层
// ==========================================
// 职责: 外部文件读取 + 记录标准化,生成内部数据
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod normalizer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, RawRow, RawTable, UniversalFileParser};
pub use normalizer::{NormalizedStock, RecordNormalizer, ARTICLE_WIDTH, QTY_MAX, REQUIRED_COLUMNS};
