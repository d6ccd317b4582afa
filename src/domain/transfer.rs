// ==========================================
// 商品调货建议系统 - 调货输出模型
// ==========================================
// 依据: 调货规则说明 - 输出口径
// 用途: 引擎层写入,报表层只读
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// GroupKey - 分组键 (Article, OM)
// ==========================================
// 组间完全独立,组内共享模拟库存状态
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub article: String,
    pub om: String,
}

impl GroupKey {
    pub fn new(article: impl Into<String>, om: impl Into<String>) -> Self {
        Self {
            article: article.into(),
            om: om.into(),
        }
    }
}

// ==========================================
// TransferSuggestion - 调货建议
// ==========================================
// 不变式: transfer_site != receive_site, transfer_qty > 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferSuggestion {
    pub article: String,       // 商品编码
    pub product_desc: String,  // 商品描述
    pub om: String,            // 区域键
    pub transfer_site: String, // 转出店铺
    pub receive_site: String,  // 接收店铺
    pub transfer_qty: i64,     // 调货数量（> 0）
    pub notes: String,         // 转出类型 + 接收优先级
}

// ==========================================
// SummaryStats - 汇总统计
// ==========================================
// 生命周期: 运行前置空,每次成交更新一次,运行后只读
// 去重口径: 集合语义（BTreeSet,迭代有序）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_transfers: u64,       // 总调货建议数量
    pub total_qty: i64,             // 总调货件数
    pub articles: BTreeSet<String>, // 涉及商品集合
    pub oms: BTreeSet<String>,      // 涉及 OM 集合
}

impl SummaryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条成交的调货建议
    pub fn record(&mut self, suggestion: &TransferSuggestion) {
        self.total_transfers += 1;
        self.total_qty += suggestion.transfer_qty;
        self.articles.insert(suggestion.article.clone());
        self.oms.insert(suggestion.om.clone());
    }

    /// 合并另一份部分统计（计数相加,去重集合取并）
    pub fn merge(&mut self, other: SummaryStats) {
        self.total_transfers += other.total_transfers;
        self.total_qty += other.total_qty;
        self.articles.extend(other.articles);
        self.oms.extend(other.oms);
    }

    /// 涉及商品数量
    pub fn distinct_articles(&self) -> usize {
        self.articles.len()
    }

    /// 涉及 OM 数量
    pub fn distinct_oms(&self) -> usize {
        self.oms.len()
    }
}
