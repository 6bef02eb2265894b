//! # 数据模型模块
//!
//! 定义能量记录与反应结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`reaction/` 和 `commands/` 使用
//! - 子模块: calculation, reaction

pub mod calculation;
pub mod reaction;

pub use calculation::{EnergyRecord, EnergySource, SymbolTable};
pub use reaction::{ReactionResult, ReactionTerm};
