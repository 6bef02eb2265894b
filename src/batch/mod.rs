//! # 批量处理模块
//!
//! 提供计算目录的收集与并行提取能力。
//!
//! ## 功能
//! - 收集含有 VASP 输出文件的计算目录
//! - 并行处理，结果保持输入顺序
//! - 进度反馈
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::CalcDirCollector;
pub use runner::BatchRunner;
