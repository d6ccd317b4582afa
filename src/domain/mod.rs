// ==========================================
// 商品调货建议系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与派生口径
// 红线: 不含文件解析逻辑,不含引擎逻辑
// ==========================================

pub mod stock;
pub mod transfer;

// 重导出核心类型
pub use stock::{RpType, StockRecord};
pub use transfer::{GroupKey, SummaryStats, TransferSuggestion};
