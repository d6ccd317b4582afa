// ==========================================
// 商品调货建议系统 - 记录标准化器
// ==========================================
// 职责: 原始行 → 类型化 StockRecord
// 规则: 必需列结构校验 / Article 补零 / 整数纠偏 [0, 100000]
// 纠偏不是错误: 以备注形式随数据返回,流程继续
// ==========================================

use crate::domain::stock::{RpType, StockRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{RawRow, RawTable};
use tracing::debug;

/// 整数字段取值上限
pub const QTY_MAX: i64 = 100_000;

/// Article 标准化长度（前补零）
pub const ARTICLE_WIDTH: usize = 12;

/// 结构性必需列（缺失任一列即终止本次运行）
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Article",
    "Site",
    "SaSa Net Stock",
    "Pending Received",
    "Safety Stock",
    "Last Month Sold Qty",
    "MTD Sold Qty",
];

/// 标准化结果: 类型化记录 + 纠偏备注（有序,供界面展示）
#[derive(Debug, Clone)]
pub struct NormalizedStock {
    pub records: Vec<StockRecord>,
    pub notes: Vec<String>,
}

// ==========================================
// RecordNormalizer - 记录标准化器
// ==========================================
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 标准化整张表
    ///
    /// 行号口径: 表头为第 1 行,首条数据行为第 2 行（备注引用该口径）
    pub fn normalize(&self, table: &RawTable) -> ImportResult<NormalizedStock> {
        // 结构校验: 必需列必须全部出现在表头
        for column in REQUIRED_COLUMNS {
            if !table.headers.iter().any(|h| h == column) {
                return Err(ImportError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::with_capacity(table.rows.len());
        let mut notes = Vec::new();

        for (idx, row) in table.rows.iter().enumerate() {
            let row_number = idx + 2;
            records.push(self.normalize_row(row, row_number, &mut notes));
        }

        debug!(
            records = records.len(),
            notes = notes.len(),
            "记录标准化完成"
        );

        Ok(NormalizedStock { records, notes })
    }

    /// 标准化单行
    fn normalize_row(&self, row: &RawRow, row_number: usize, notes: &mut Vec<String>) -> StockRecord {
        StockRecord {
            article: normalize_article(&get_text(row, "Article")),
            om: get_text(row, "OM"),
            site: get_text(row, "Site"),
            rp_type: RpType::parse(&get_text(row, "RP Type")),
            product_desc: get_text(row, "Product Desc"),
            net_stock: coerce_qty(row, "SaSa Net Stock", row_number, notes),
            pending_received: coerce_qty(row, "Pending Received", row_number, notes),
            safety_stock: coerce_qty(row, "Safety Stock", row_number, notes),
            last_month_sold: coerce_qty(row, "Last Month Sold Qty", row_number, notes),
            mtd_sold: coerce_qty(row, "MTD Sold Qty", row_number, notes),
        }
    }
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 字段级转换
// ==========================================

/// 文本字段: 缺失列/空单元格统一为空字符串
fn get_text(row: &RawRow, column: &str) -> String {
    row.get(column).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Article 强制转换为 12 位文本（前补零,超长原样保留）
fn normalize_article(value: &str) -> String {
    if value.len() >= ARTICLE_WIDTH {
        return value.to_string();
    }
    format!("{:0>width$}", value, width = ARTICLE_WIDTH)
}

/// 整数字段纠偏
///
/// - 空值 → 0（静默,与源系统一致）
/// - 非数字 → 0,记备注
/// - 负数 → 0,记备注
/// - 超过 100000 → 100000,记备注
/// - 小数文本（Excel 浮点渲染,如 "5.0"）→ 截断取整
fn coerce_qty(row: &RawRow, column: &str, row_number: usize, notes: &mut Vec<String>) -> i64 {
    let raw = get_text(row, column);

    if raw.is_empty() {
        return 0;
    }

    let parsed = raw
        .parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64));

    let value = match parsed {
        Some(v) => v,
        None => {
            notes.push(format!("行 {}: {} 列值 '{}' 转换为0", row_number, column, raw));
            return 0;
        }
    };

    if value < 0 {
        notes.push(format!("行 {}: {} 值小于0，已修正为0", row_number, column));
        return 0;
    }

    if value > QTY_MAX {
        notes.push(format!(
            "行 {}: {} 值超出范围，已修正为{}",
            row_number, column, QTY_MAX
        ));
        return QTY_MAX;
    }

    value
}
