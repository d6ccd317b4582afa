// ==========================================
// 商品调货建议系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输出: 原始行（列名 → 单元格文本）,供 normalizer 标准化
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始行: 列名 → 单元格文本（已 trim）
pub type RawRow = HashMap<String, String>;

/// 解析结果: 表头列名（保持源顺序）+ 数据行
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行,跳过完全空白的行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = RawRow::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行）
        let mut range_rows = range.rows();
        let header_row = range_rows.next().ok_or(ImportError::EmptySheet)?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行,跳过完全空白的行
        let mut rows = Vec::new();
        for data_row in range_rows {
            let mut row_map = RawRow::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path),
            "xlsx" | "xls" => ExcelParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
