// ==========================================
// 商品调货建议系统 - 引擎层
// ==========================================
// 职责: 实现调货匹配业务规则
// 红线: 引擎不做 I/O; 所有建议必须携带可解释的 Notes
// ==========================================

pub mod aggregator;
pub mod allocator;
pub mod grouping;
pub mod orchestrator;

// 重导出核心引擎
pub use aggregator::{aggregate, TransferReport};
pub use allocator::{GroupAllocation, TransferAllocator};
pub use grouping::group_records;
pub use orchestrator::TransferOrchestrator;
