//! # VASP 能量记录数据模型
//!
//! 存储每个计算目录提取出的最终能量及其来源文件。
//!
//! ## 依赖关系
//! - 被 `parsers/` 使用
//! - 被 `commands/scan.rs`, `commands/react.rs`, `report/` 使用

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 结构名称到能量 (eV) 的映射
///
/// 键为目录名（basename），不同父目录下同名目录会相互覆盖。
pub type SymbolTable = BTreeMap<String, f64>;

/// 提供能量的 VASP 输出文件，按优先级排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergySource {
    #[serde(rename = "OSZICAR")]
    Oszicar,
    #[serde(rename = "OUTCAR")]
    Outcar,
    #[serde(rename = "vasprun.xml")]
    Vasprun,
}

impl EnergySource {
    /// 按提取优先级排列的全部来源
    pub const PRIORITY: [EnergySource; 3] = [
        EnergySource::Oszicar,
        EnergySource::Outcar,
        EnergySource::Vasprun,
    ];

    /// 计算目录中对应的文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            EnergySource::Oszicar => "OSZICAR",
            EnergySource::Outcar => "OUTCAR",
            EnergySource::Vasprun => "vasprun.xml",
        }
    }
}

impl std::fmt::Display for EnergySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// 单个计算目录的能量记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    /// 结构名称（目录名）
    #[serde(rename = "structure")]
    pub structure_name: String,

    /// 总能量 (eV)
    pub energy: f64,

    /// 提供能量的文件
    pub source: EnergySource,
}

impl EnergyRecord {
    pub fn new(structure_name: impl Into<String>, energy: f64, source: EnergySource) -> Self {
        EnergyRecord {
            structure_name: structure_name.into(),
            energy,
            source,
        }
    }
}

/// 由能量记录构建符号表，同名结构后者覆盖前者
pub fn build_symbol_table<'a>(records: impl IntoIterator<Item = &'a EnergyRecord>) -> SymbolTable {
    records
        .into_iter()
        .map(|r| (r.structure_name.clone(), r.energy))
        .collect()
}
