//! # scan 子命令 CLI 定义
//!
//! 扫描计算目录，提取 VASP 最终能量，可选计算反应能量
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Root directory to scan
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "energies.csv")]
    pub output: PathBuf,

    /// Scan subdirectories recursively
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Show per-file extraction details
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Also save the energies as JSON
    #[arg(short, long)]
    pub json: Option<PathBuf>,

    /// File with one reaction per line, e.g. "A + 2B -> C + 3D"
    #[arg(long)]
    pub reactions: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(long, default_value_t = 0)]
    pub jobs: usize,
}
