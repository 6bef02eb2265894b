//! # 报告输出模块
//!
//! 将能量记录和反应能量写为终端表格、CSV 和 JSON。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs`, `commands/react.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: export, table

pub mod export;
pub mod table;

use crate::models::{EnergyRecord, ReactionResult};
use serde::{Deserialize, Serialize};

/// 扫描元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// 创建时间
    pub timestamp: String,
    /// 扫描根目录（绝对路径）
    pub root_directory: String,
    /// 是否递归扫描
    pub recursive: bool,
}

/// 完整的能量报告（JSON 输出格式）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    pub metadata: ReportMetadata,

    /// 按结构名称排序的能量记录
    pub energies: Vec<EnergyRecord>,

    /// 按输入顺序的反应能量
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<ReactionResult>,
}
