// ==========================================
// 全流程端到端测试
// ==========================================
// 场景: CSV 文件 → 解析 → 标准化 → 匹配 → 报表落盘
// ==========================================

use std::io::Write;
use stock_transfer_dss::engine::TransferOrchestrator;
use stock_transfer_dss::importer::{ImportError, RecordNormalizer, UniversalFileParser};
use stock_transfer_dss::report::ExcelReportWriter;

fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

const HEADER: &str = "Article,OM,RP Type,Site,SaSa Net Stock,Pending Received,Safety Stock,Last Month Sold Qty,MTD Sold Qty,Product Desc";

#[test]
fn test_csv_to_report_end_to_end() {
    let input = write_csv(&[
        HEADER,
        "123,OM1,ND,S001,5,0,0,0,0,洗发水",
        "123,OM1,RF,S002,0,0,3,2,0,洗发水",
        // 负数触发纠偏备注
        "456,OM1,RF,S003,-2,0,0,0,0,",
    ]);

    // 1. 解析
    let table = UniversalFileParser.parse(input.path()).unwrap();
    assert_eq!(table.rows.len(), 3);

    // 2. 标准化
    let normalized = RecordNormalizer::new().normalize(&table).unwrap();
    assert_eq!(normalized.records[0].article, "000000000123");
    assert_eq!(normalized.notes.len(), 1);
    assert!(normalized.notes[0].contains("行 4"));

    // 3. 匹配: ND 清仓补紧急店铺,数量受全额安全库存限制
    let report = TransferOrchestrator::new().run(normalized.records);
    assert_eq!(report.suggestions.len(), 1);
    let s = &report.suggestions[0];
    assert_eq!(s.article, "000000000123");
    assert_eq!(s.transfer_site, "S001");
    assert_eq!(s.receive_site, "S002");
    assert_eq!(s.transfer_qty, 3);
    assert_eq!(s.product_desc, "洗发水");

    // 4. 报表落盘
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("调货建议.xlsx");
    ExcelReportWriter::new()
        .write(&out, &report.suggestions, &report.stats, &normalized.notes)
        .unwrap();
    assert!(out.exists());
}

#[test]
fn test_missing_required_column_stops_pipeline() {
    // 缺少 Safety Stock 列: 结构性错误,引擎不得运行
    let input = write_csv(&[
        "Article,OM,RP Type,Site,SaSa Net Stock,Pending Received,Last Month Sold Qty,MTD Sold Qty",
        "123,OM1,RF,S001,5,0,1,2",
    ]);

    let table = UniversalFileParser.parse(input.path()).unwrap();
    let result = RecordNormalizer::new().normalize(&table);

    match result {
        Err(ImportError::MissingColumn(col)) => assert_eq!(col, "Safety Stock"),
        other => panic!("期望 MissingColumn,实际 {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_no_suggestions_still_produces_report() {
    let input = write_csv(&[HEADER, "123,OM1,RF,S001,0,0,0,0,0,"]);

    let table = UniversalFileParser.parse(input.path()).unwrap();
    let normalized = RecordNormalizer::new().normalize(&table).unwrap();
    let report = TransferOrchestrator::new().run(normalized.records);
    assert!(report.suggestions.is_empty());

    // 空结果也要生成带表头的报表
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.xlsx");
    ExcelReportWriter::new()
        .write(&out, &report.suggestions, &report.stats, &normalized.notes)
        .unwrap();
    assert!(out.exists());
}
