// ==========================================
// 商品调货建议系统 - 调货匹配引擎
// ==========================================
// 职责: 单组内的转出/接收分类与迭代匹配
// 红线: 每轮只成交一笔,成交后全量重算组状态
//       （成交会改变销量最高店铺与过剩格局,不可批量成交）
// ==========================================

use crate::domain::stock::{RpType, StockRecord};
use crate::domain::transfer::{GroupKey, SummaryStats, TransferSuggestion};
use tracing::{instrument, trace};

// ==========================================
// SourceClass - 转出分类
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceClass {
    /// 优先级1: ND 清仓（转出全部净库存,在途不计）
    NdClearance,
    /// 优先级2: RF 过剩（转出过剩部分）
    RfSurplus,
}

impl SourceClass {
    fn priority(self) -> u8 {
        match self {
            SourceClass::NdClearance => 1,
            SourceClass::RfSurplus => 2,
        }
    }

    fn label(self) -> &'static str {
        match self {
            SourceClass::NdClearance => "ND",
            SourceClass::RfSurplus => "RF",
        }
    }
}

/// 转出候选（qty 恒为正,由分类规则保证）
#[derive(Debug, Clone)]
struct SourceCandidate {
    record_idx: usize,
    class: SourceClass,
    qty: i64,
}

/// 接收候选
///
/// 优先级1 = 紧急缺货（零库存有销量,需求为全额安全库存）
/// 优先级2 = 潜在缺货（销量最高店铺的缺口）
#[derive(Debug, Clone)]
struct DestCandidate {
    record_idx: usize,
    priority: u8,
    qty: i64,
}

// ==========================================
// GroupAllocation - 单组匹配结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct GroupAllocation {
    pub suggestions: Vec<TransferSuggestion>,
    pub stats: SummaryStats,
}

// ==========================================
// TransferAllocator - 调货匹配引擎
// ==========================================
pub struct TransferAllocator {
    // 无状态引擎,模拟库存归属于单次调用
}

impl TransferAllocator {
    pub fn new() -> Self {
        Self {}
    }

    /// 对单组执行迭代匹配直至不动点
    ///
    /// 模拟净库存由本次调用独占,调用结束即丢弃;
    /// 在途/安全库存/销量为静态输入,匹配过程不修改。
    ///
    /// # 返回
    /// 本组的调货建议列表与部分统计
    #[instrument(skip(self, records), fields(
        article = %key.article,
        om = %key.om,
        sites = records.len()
    ))]
    pub fn allocate_group(&self, key: &GroupKey, records: &[StockRecord]) -> GroupAllocation {
        let mut result = GroupAllocation::default();

        // 模拟净库存: 与 records 同下标
        let mut sim_net: Vec<i64> = records.iter().map(|r| r.net_stock).collect();

        // 持续匹配直至无法再成交
        loop {
            let sources = classify_sources(records, &sim_net);
            let destinations = classify_destinations(records, &sim_net);

            // 无源或无目标,达到不动点
            if sources.is_empty() || destinations.is_empty() {
                break;
            }

            if !self.commit_one_match(key, records, &mut sim_net, sources, destinations, &mut result) {
                // 完整扫描未成交,不存在可行配对
                break;
            }
        }

        trace!(
            suggestions = result.suggestions.len(),
            total_qty = result.stats.total_qty,
            "单组匹配完成"
        );

        result
    }

    /// 按排序后的源×目标顺序扫描,最多成交一笔
    ///
    /// # 返回
    /// 是否成交（成交后调用方必须全量重算再继续）
    fn commit_one_match(
        &self,
        key: &GroupKey,
        records: &[StockRecord],
        sim_net: &mut [i64],
        mut sources: Vec<SourceCandidate>,
        mut destinations: Vec<DestCandidate>,
        result: &mut GroupAllocation,
    ) -> bool {
        // 排序契约: 优先级升序,同级内数量降序;平手保持分类顺序(即组内记录顺序)
        sources.sort_by(|a, b| {
            a.class
                .priority()
                .cmp(&b.class.priority())
                .then(b.qty.cmp(&a.qty))
        });
        destinations.sort_by(|a, b| a.priority.cmp(&b.priority).then(b.qty.cmp(&a.qty)));

        for source in &sources {
            if source.qty <= 0 {
                continue;
            }

            for dest in &destinations {
                if dest.qty <= 0 {
                    continue;
                }

                // 不能自己调给自己
                if records[source.record_idx].site == records[dest.record_idx].site {
                    continue;
                }

                let transfer_qty = source.qty.min(dest.qty);
                if transfer_qty <= 0 {
                    continue;
                }

                let source_record = &records[source.record_idx];
                let suggestion = TransferSuggestion {
                    article: key.article.clone(),
                    product_desc: source_record.product_desc.clone(),
                    om: key.om.clone(),
                    transfer_site: source_record.site.clone(),
                    receive_site: records[dest.record_idx].site.clone(),
                    transfer_qty,
                    notes: format!(
                        "转出类型: {}, 接收优先级: {}",
                        source.class.label(),
                        dest.priority
                    ),
                };

                result.stats.record(&suggestion);
                result.suggestions.push(suggestion);

                // 更新模拟库存,防止重复调货
                sim_net[source.record_idx] -= transfer_qty;
                sim_net[dest.record_idx] += transfer_qty;

                return true;
            }
        }

        false
    }
}

impl Default for TransferAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 分类规则
// ==========================================

/// RF 子集中的最大有效销量（无 RF 记录时为 None）
fn rf_max_sold(records: &[StockRecord]) -> Option<i64> {
    records
        .iter()
        .filter(|r| r.rp_type == RpType::Rf)
        .map(|r| r.effective_sold_qty())
        .max()
}

/// 识别转出店铺
///
/// 优先级1: ND 且模拟净库存 > 0,转出全部净库存
/// 优先级2: RF 且过剩 > 0 且有效销量严格小于组内 RF 最大销量
///          （并列最高销量的店铺视为需求最高,永不作为过剩源）
fn classify_sources(records: &[StockRecord], sim_net: &[i64]) -> Vec<SourceCandidate> {
    let mut sources = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        if record.rp_type == RpType::Nd && sim_net[idx] > 0 {
            sources.push(SourceCandidate {
                record_idx: idx,
                class: SourceClass::NdClearance,
                qty: sim_net[idx],
            });
        }
    }

    if let Some(max_sold) = rf_max_sold(records) {
        for (idx, record) in records.iter().enumerate() {
            if record.rp_type != RpType::Rf {
                continue;
            }
            let excess = record.excess_qty(sim_net[idx]);
            if excess > 0 && record.effective_sold_qty() < max_sold {
                sources.push(SourceCandidate {
                    record_idx: idx,
                    class: SourceClass::RfSurplus,
                    qty: excess,
                });
            }
        }
    }

    sources
}

/// 识别接收店铺（仅限 RF）
///
/// 优先级1: 零库存有销量且安全库存 > 0,需求为全额安全库存
///          （零库存店铺视为需要整补,不只补缺口）
/// 优先级2: 缺口 > 0 且有效销量等于组内 RF 最大销量
fn classify_destinations(records: &[StockRecord], sim_net: &[i64]) -> Vec<DestCandidate> {
    let mut destinations = Vec::new();

    let max_sold = match rf_max_sold(records) {
        Some(v) => v,
        None => return destinations,
    };

    for (idx, record) in records.iter().enumerate() {
        if record.rp_type != RpType::Rf {
            continue;
        }
        if sim_net[idx] == 0 && record.effective_sold_qty() > 0 && record.safety_stock > 0 {
            destinations.push(DestCandidate {
                record_idx: idx,
                priority: 1,
                qty: record.safety_stock,
            });
        }
    }

    for (idx, record) in records.iter().enumerate() {
        if record.rp_type != RpType::Rf {
            continue;
        }
        let needed = record.needed_qty(sim_net[idx]);
        if needed > 0 && record.effective_sold_qty() == max_sold {
            destinations.push(DestCandidate {
                record_idx: idx,
                priority: 2,
                qty: needed,
            });
        }
    }

    destinations
}
