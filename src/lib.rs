// ==========================================
// 商品调货建议系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine/csv + rust_xlsxwriter
// 系统定位: 决策支持系统 (调货建议,人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与派生口径
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 匹配规则
pub mod engine;

// 报表层 - 结果输出
pub mod report;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{GroupKey, RpType, StockRecord, SummaryStats, TransferSuggestion};

// 导入层
pub use importer::{ImportError, NormalizedStock, RecordNormalizer, UniversalFileParser};

// 引擎
pub use engine::{TransferAllocator, TransferOrchestrator, TransferReport};

// 报表
pub use report::{ExcelReportWriter, ReportError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "商品调货建议系统";
