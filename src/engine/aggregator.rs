// ==========================================
// 商品调货建议系统 - 结果汇聚器
// ==========================================
// 职责: 各组结果折叠为全局建议列表与汇总统计
// 红线: 纯折叠,不做任何业务判断
// ==========================================

use crate::domain::transfer::{SummaryStats, TransferSuggestion};
use crate::engine::allocator::GroupAllocation;

/// 全局汇聚结果
#[derive(Debug, Clone, Default)]
pub struct TransferReport {
    pub suggestions: Vec<TransferSuggestion>,
    pub stats: SummaryStats,
}

/// 折叠各组结果
///
/// 建议按组迭代顺序拼接（组内顺序由匹配算法唯一确定）;
/// 统计计数相加,去重集合取并。
pub fn aggregate(group_results: impl IntoIterator<Item = GroupAllocation>) -> TransferReport {
    let mut report = TransferReport::default();

    for group in group_results {
        report.suggestions.extend(group.suggestions);
        report.stats.merge(group.stats);
    }

    report
}
