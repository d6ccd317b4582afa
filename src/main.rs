// ==========================================
// 商品调货建议系统 - 命令行主入口
// ==========================================
// 流程: 读取文件 → 标准化 → 调货分析 → 报表导出
// 一次调用处理一个输入文件,产出一个报表文件
// ==========================================

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use stock_transfer_dss::engine::TransferOrchestrator;
use stock_transfer_dss::importer::{RecordNormalizer, UniversalFileParser};
use stock_transfer_dss::report::ExcelReportWriter;
use stock_transfer_dss::{logging, APP_NAME, VERSION};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "stock-transfer-dss")]
#[command(about = "商品调货建议系统 - 根据库存文件生成调货建议报表", long_about = None)]
#[command(version)]
struct Cli {
    /// 输入文件 (.xlsx/.xls/.csv)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// 输出报表文件 (.xlsx)
    #[arg(short, long, value_name = "FILE", default_value = "调货建议.xlsx")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init();

    info!("==================================================");
    info!("{} v{}", APP_NAME, VERSION);
    info!("==================================================");

    // 1. 读取文件
    let table = UniversalFileParser
        .parse(&cli.input)
        .with_context(|| format!("读取输入文件失败: {}", cli.input.display()))?;
    info!(rows = table.rows.len(), "文件读取成功");

    // 2. 数据标准化
    let normalized = RecordNormalizer::new()
        .normalize(&table)
        .context("数据标准化失败")?;
    for note in &normalized.notes {
        warn!("{}", note);
    }

    // 3. 调货分析
    let report = TransferOrchestrator::new().run(normalized.records);

    info!("总调货建议数: {}", report.stats.total_transfers);
    info!("总调货件数: {}", report.stats.total_qty);
    info!("涉及商品数: {}", report.stats.distinct_articles());
    info!("涉及OM数: {}", report.stats.distinct_oms());

    // 4. 报表导出
    ExcelReportWriter::new()
        .write(
            &cli.output,
            &report.suggestions,
            &report.stats,
            &normalized.notes,
        )
        .with_context(|| format!("报表导出失败: {}", cli.output.display()))?;

    info!("调货建议报表已生成: {}", cli.output.display());
    Ok(())
}
