//! # react 子命令 CLI 定义
//!
//! 读取 `scan --json` 保存的能量数据并计算反应能量
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/react.rs`

use clap::Args;
use std::path::PathBuf;

/// react 子命令参数
#[derive(Args, Debug)]
pub struct ReactArgs {
    /// JSON energy file written by `scan --json`
    #[arg(long)]
    pub energies: PathBuf,

    /// File with one reaction per line, e.g. "A + 2B -> C + 3D"
    #[arg(long)]
    pub reactions: PathBuf,

    /// Save the reaction energies to CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show per-reaction details
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
