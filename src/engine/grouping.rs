// ==========================================
// 商品调货建议系统 - 分组阶段
// ==========================================
// 职责: 按 (Article, OM) 切分独立工作单元
// 契约: 不丢行,不重复,组内保持输入顺序
// ==========================================

use crate::domain::stock::StockRecord;
use crate::domain::transfer::GroupKey;
use std::collections::BTreeMap;

/// 按 (Article, OM) 分组
///
/// BTreeMap 保证组间迭代顺序稳定,报表可比对。
/// 组内顺序即输入顺序（排序平手时作为最终决胜依据）。
pub fn group_records(records: Vec<StockRecord>) -> BTreeMap<GroupKey, Vec<StockRecord>> {
    let mut groups: BTreeMap<GroupKey, Vec<StockRecord>> = BTreeMap::new();

    for record in records {
        let key = GroupKey::new(record.article.clone(), record.om.clone());
        groups.entry(key).or_default().push(record);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stock::RpType;

    fn record(article: &str, om: &str, site: &str) -> StockRecord {
        StockRecord {
            article: article.to_string(),
            om: om.to_string(),
            site: site.to_string(),
            rp_type: RpType::Rf,
            product_desc: String::new(),
            net_stock: 0,
            pending_received: 0,
            safety_stock: 0,
            last_month_sold: 0,
            mtd_sold: 0,
        }
    }

    #[test]
    fn test_grouping_partitions_without_loss() {
        let records = vec![
            record("000000000001", "OM1", "S001"),
            record("000000000001", "OM2", "S002"),
            record("000000000001", "OM1", "S003"),
            record("000000000002", "OM1", "S004"),
        ];

        let groups = group_records(records);

        assert_eq!(groups.len(), 3);
        let total: usize = groups.values().map(|g| g.len()).sum();
        assert_eq!(total, 4);

        let g = &groups[&GroupKey::new("000000000001", "OM1")];
        assert_eq!(g.len(), 2);
        // 组内保持输入顺序
        assert_eq!(g[0].site, "S001");
        assert_eq!(g[1].site, "S003");
    }

    #[test]
    fn test_grouping_empty_input() {
        let groups = group_records(vec![]);
        assert!(groups.is_empty());
    }
}
