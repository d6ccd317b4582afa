// ==========================================
// 商品调货建议系统 - Excel 报表导出
// ==========================================
// 职责: 调货建议 / 统计摘要 / 数据处理备注 三张工作表
// 契约: 无建议时仍输出带完整表头的空表,不省略工作表
// ==========================================

use crate::domain::transfer::{SummaryStats, TransferSuggestion};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 报表导出错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("报表写入失败: {0}")]
    WriteError(String),
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::WriteError(err.to_string())
    }
}

/// 调货建议表列头（顺序即输出契约）
pub const SUGGESTION_HEADERS: [&str; 7] = [
    "Article",
    "Product Desc",
    "OM",
    "Transfer Site",
    "Receive Site",
    "Transfer Qty",
    "Notes",
];

// ==========================================
// ExcelReportWriter - 报表生成器
// ==========================================
pub struct ExcelReportWriter;

impl ExcelReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// 写出完整报表
    ///
    /// # 工作表
    /// - 调货建议: 建议明细(表头恒在)
    /// - 统计摘要: 四项指标
    /// - 数据处理备注: 仅当存在纠偏备注时输出
    pub fn write(
        &self,
        path: &Path,
        suggestions: &[TransferSuggestion],
        stats: &SummaryStats,
        notes: &[String],
    ) -> Result<(), ReportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        // ===== 调货建议 =====
        let sheet = workbook.add_worksheet().set_name("调货建议")?;
        for (col, header) in SUGGESTION_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        for (idx, s) in suggestions.iter().enumerate() {
            let row = (idx + 1) as u32;
            sheet.write_string(row, 0, &s.article)?;
            sheet.write_string(row, 1, &s.product_desc)?;
            sheet.write_string(row, 2, &s.om)?;
            sheet.write_string(row, 3, &s.transfer_site)?;
            sheet.write_string(row, 4, &s.receive_site)?;
            sheet.write_number(row, 5, s.transfer_qty as f64)?;
            sheet.write_string(row, 6, &s.notes)?;
        }

        // ===== 统计摘要 =====
        let summary = workbook.add_worksheet().set_name("统计摘要")?;
        summary.write_string_with_format(0, 0, "指标", &header_format)?;
        summary.write_string_with_format(0, 1, "数值", &header_format)?;
        let metrics: [(&str, f64); 4] = [
            ("总调货建议数量", stats.total_transfers as f64),
            ("总调货件数", stats.total_qty as f64),
            ("涉及商品数量", stats.distinct_articles() as f64),
            ("涉及OM数量", stats.distinct_oms() as f64),
        ];
        for (idx, (name, value)) in metrics.iter().enumerate() {
            let row = (idx + 1) as u32;
            summary.write_string(row, 0, *name)?;
            summary.write_number(row, 1, *value)?;
        }

        // ===== 数据处理备注 =====
        if !notes.is_empty() {
            let note_sheet = workbook.add_worksheet().set_name("数据处理备注")?;
            note_sheet.write_string_with_format(0, 0, "备注", &header_format)?;
            for (idx, note) in notes.iter().enumerate() {
                note_sheet.write_string((idx + 1) as u32, 0, note)?;
            }
        }

        workbook.save(path)?;
        info!(
            path = %path.display(),
            suggestions = suggestions.len(),
            notes = notes.len(),
            "报表导出完成"
        );

        Ok(())
    }
}

impl Default for ExcelReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion() -> TransferSuggestion {
        TransferSuggestion {
            article: "000000000001".to_string(),
            product_desc: "测试商品".to_string(),
            om: "OM1".to_string(),
            transfer_site: "S001".to_string(),
            receive_site: "S002".to_string(),
            transfer_qty: 3,
            notes: "转出类型: ND, 接收优先级: 1".to_string(),
        }
    }

    #[test]
    fn test_write_report_with_suggestions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        let mut stats = SummaryStats::new();
        let s = suggestion();
        stats.record(&s);

        let writer = ExcelReportWriter::new();
        writer
            .write(&path, &[s], &stats, &["行 2: 备注".to_string()])
            .unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_write_empty_report_still_creates_sheets() {
        // 无建议时仍须生成带表头的空表
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        let writer = ExcelReportWriter::new();
        writer
            .write(&path, &[], &SummaryStats::new(), &[])
            .unwrap();

        assert!(path.exists());
    }
}
