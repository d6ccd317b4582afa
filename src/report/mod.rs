// ==========================================
// 商品调货建议系统 - 报表层
// ==========================================
// 职责: 结果序列化为电子表格输出
// ==========================================

pub mod excel_report;

pub use excel_report::{ExcelReportWriter, ReportError, SUGGESTION_HEADERS};
