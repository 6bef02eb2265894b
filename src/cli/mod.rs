//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `scan`: 扫描计算目录，提取能量并计算反应能量
//! - `react`: 基于已有的能量 JSON 计算反应能量
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: scan, react

pub mod react;
pub mod scan;

use clap::{Parser, Subcommand};

/// vasp-energy - VASP 能量提取与反应能量计算
#[derive(Parser)]
#[command(name = "vasp-energy")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Extract final energies from VASP calculations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Scan calculation directories and extract final energies
    Scan(scan::ScanArgs),

    /// Evaluate reaction energies from a previously saved JSON energy file
    React(react::ReactArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scan_defaults() {
        let cli = Cli::parse_from(["vasp-energy", "scan"]);
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.directory, std::path::PathBuf::from("."));
        assert_eq!(args.output, std::path::PathBuf::from("energies.csv"));
        assert!(!args.recursive);
        assert!(!args.verbose);
        assert_eq!(args.jobs, 0);
        assert!(args.json.is_none());
        assert!(args.reactions.is_none());
    }

    #[test]
    fn test_scan_short_flags() {
        let cli = Cli::parse_from([
            "vasp-energy",
            "scan",
            "-d",
            "runs",
            "-r",
            "-v",
            "-j",
            "out.json",
            "--reactions",
            "rxn.txt",
        ]);
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.directory, std::path::PathBuf::from("runs"));
        assert!(args.recursive);
        assert!(args.verbose);
        assert_eq!(args.json, Some(std::path::PathBuf::from("out.json")));
        assert_eq!(args.reactions, Some(std::path::PathBuf::from("rxn.txt")));
    }
}
