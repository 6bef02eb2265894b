//! # 能量数据导出
//!
//! ## 支持格式
//! - CSV: 元数据注释行 + 能量表，可选反应能量表
//! - JSON: `EnergyReport` 的完整序列化，可被 `react` 子命令读回
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs`, `commands/react.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件
//! - 使用 `serde_json` 读写 JSON

use crate::error::{EnergyError, Result};
use crate::models::ReactionResult;
use crate::report::EnergyReport;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出完整报告为 CSV
pub fn to_csv(report: &EnergyReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output_path)?;

    let meta = &report.metadata;
    wtr.write_record(["# VASP energy extraction results"])?;
    wtr.write_record(["# Created:", csv_timestamp(&meta.timestamp).as_str()])?;
    wtr.write_record(["# Root directory:", meta.root_directory.as_str()])?;
    wtr.write_record(["# Recursive scan:", if meta.recursive { "Yes" } else { "No" }])?;
    write_blank_row(&mut wtr, output_path)?;

    wtr.write_record(["Structure", "Energy (eV)", "Source"])?;
    for record in &report.energies {
        wtr.write_record([
            record.structure_name.clone(),
            format!("{:.6}", record.energy),
            record.source.to_string(),
        ])?;
    }

    if !report.reactions.is_empty() {
        write_blank_row(&mut wtr, output_path)?;
        wtr.write_record(["# Reaction energies"])?;
        write_reaction_rows(&mut wtr, &report.reactions)?;
    }

    wtr.flush().map_err(|e| EnergyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 写入空行；csv 的空记录会被写成 `""`，因此直接写入底层文件
fn write_blank_row(wtr: &mut csv::Writer<File>, output_path: &Path) -> Result<()> {
    let to_write_error = |e: std::io::Error| EnergyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };
    wtr.flush().map_err(to_write_error)?;
    let mut file: &File = wtr.get_ref();
    file.write_all(b"\n").map_err(to_write_error)
}

/// CSV 注释行中的创建时间，格式为 `%Y-%m-%d %H:%M:%S`
///
/// 无法识别的时间戳原样返回。
fn csv_timestamp(timestamp: &str) -> String {
    let whole_seconds = timestamp.split('.').next().unwrap_or(timestamp);
    chrono::NaiveDateTime::parse_from_str(whole_seconds, "%Y-%m-%dT%H:%M:%S")
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// 仅导出反应能量为 CSV
pub fn reactions_to_csv(reactions: &[ReactionResult], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    write_reaction_rows(&mut wtr, reactions)?;

    wtr.flush().map_err(|e| EnergyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

fn write_reaction_rows<W: Write>(
    wtr: &mut csv::Writer<W>,
    reactions: &[ReactionResult],
) -> Result<()> {
    wtr.write_record(["Reaction", "Energy change (eV)"])?;
    for result in reactions {
        wtr.write_record([result.formula.clone(), format!("{:.6}", result.energy_delta)])?;
    }
    Ok(())
}

/// 导出完整报告为 JSON
pub fn to_json(report: &EnergyReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| EnergyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|e| EnergyError::JsonError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    writer.flush().map_err(|e| EnergyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 读取 JSON 报告
pub fn from_json(path: &Path) -> Result<EnergyReport> {
    let content = fs::read_to_string(path).map_err(|e| EnergyError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| EnergyError::JsonError {
        path: path.display().to_string(),
        source: e,
    })
}
