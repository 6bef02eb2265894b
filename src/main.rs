//! # vasp-energy - VASP 能量提取工具
//!
//! 扫描计算目录，从 VASP 输出文件中提取最终能量，并按反应方程式计算反应能量。
//!
//! ## 子命令
//! - `scan`  - 扫描目录并提取能量 (OSZICAR > OUTCAR > vasprun.xml)
//! - `react` - 基于已保存的能量 JSON 计算反应能量
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (目录收集与并行提取)
//!   │     ├── parsers/   (能量解析器)
//!   │     ├── reaction/  (反应能量计算)
//!   │     ├── report/    (表格、CSV、JSON 输出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod reaction;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
