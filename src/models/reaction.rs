//! # 反应能量数据模型
//!
//! ## 依赖关系
//! - 被 `reaction/` 和 `report/` 使用

use serde::{Deserialize, Serialize};

/// 反应方程式中的一项，例如 `2H2O` -> (2.0, "H2O")
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionTerm {
    pub coefficient: f64,
    pub symbol: String,
}

/// 单个反应的能量变化（产物 - 反应物）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionResult {
    #[serde(rename = "reaction")]
    pub formula: String,

    #[serde(rename = "energy")]
    pub energy_delta: f64,
}
