// ==========================================
// 商品调货建议系统 - 引擎编排器
// ==========================================
// 用途: 协调 分组 → 单组匹配 → 汇聚 的执行顺序
// 说明: 组间完全独立(不共享模拟库存),当前实现串行迭代,
//       输出确定; 组间建议顺序按 (Article, OM) 键序
// ==========================================

use crate::domain::stock::StockRecord;
use crate::engine::aggregator::{aggregate, TransferReport};
use crate::engine::allocator::TransferAllocator;
use crate::engine::grouping::group_records;
use tracing::{debug, info, instrument};

// ==========================================
// TransferOrchestrator - 引擎编排器
// ==========================================
pub struct TransferOrchestrator {
    allocator: TransferAllocator,
}

impl TransferOrchestrator {
    pub fn new() -> Self {
        Self {
            allocator: TransferAllocator::new(),
        }
    }

    /// 对整份标准化数据执行调货分析
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub fn run(&self, records: Vec<StockRecord>) -> TransferReport {
        let groups = group_records(records);
        info!(groups = groups.len(), "分组完成,开始匹配");

        let report = aggregate(
            groups
                .iter()
                .map(|(key, group)| self.allocator.allocate_group(key, group)),
        );

        debug!(
            suggestions = report.suggestions.len(),
            total_qty = report.stats.total_qty,
            articles = report.stats.distinct_articles(),
            oms = report.stats.distinct_oms(),
            "调货分析完成"
        );

        report
    }
}

impl Default for TransferOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
