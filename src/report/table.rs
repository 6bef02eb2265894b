//! # 终端表格
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs`, `commands/react.rs` 使用
//! - 使用 `tabled` 渲染表格

use crate::models::{EnergyRecord, ReactionResult};
use tabled::{Table, Tabled};

/// 能量表格行
#[derive(Debug, Clone, Tabled)]
struct EnergyRow {
    #[tabled(rename = "Structure")]
    structure: String,
    #[tabled(rename = "Energy (eV)")]
    energy: String,
    #[tabled(rename = "Source")]
    source: String,
}

/// 反应能量表格行
#[derive(Debug, Clone, Tabled)]
struct ReactionRow {
    #[tabled(rename = "Reaction")]
    reaction: String,
    #[tabled(rename = "ΔE (eV)")]
    delta: String,
}

/// 渲染能量表格
pub fn energy_table(records: &[EnergyRecord]) -> String {
    let rows: Vec<EnergyRow> = records
        .iter()
        .map(|r| EnergyRow {
            structure: r.structure_name.clone(),
            energy: format!("{:.6}", r.energy),
            source: r.source.to_string(),
        })
        .collect();
    Table::new(&rows).to_string()
}

/// 渲染反应能量表格
pub fn reaction_table(results: &[ReactionResult]) -> String {
    let rows: Vec<ReactionRow> = results
        .iter()
        .map(|r| ReactionRow {
            reaction: r.formula.clone(),
            delta: format!("{:.6}", r.energy_delta),
        })
        .collect();
    Table::new(&rows).to_string()
}
