//! # 解析器模块
//!
//! 从计算目录的 VASP 输出文件中提取最终能量。
//!
//! ## 提取优先级
//! 1. `OSZICAR` - 最后一个 `F=` 行
//! 2. `OUTCAR` - 最后一个 `free  energy   TOTEN` 行
//! 3. `vasprun.xml` - 第一个 `e_fr_energy` 标签
//!
//! 文件缺失、读取失败或找不到数值都只意味着"该格式无结果"，继续尝试下一个格式。
//! 每次尝试都记录为 [`Attempt`]，由调用方决定如何输出。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs`, `batch/collector.rs` 使用
//! - 使用 `models/calculation.rs`
//! - 子模块: oszicar, outcar, vasprun

pub mod oszicar;
pub mod outcar;
pub mod vasprun;

use crate::models::EnergySource;
use std::fs;
use std::io;
use std::path::Path;

/// 文件系统访问抽象
pub trait FileSource: Sync {
    /// 路径是否存在
    fn exists(&self, path: &Path) -> bool;

    /// 读取全部行
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// 本地文件系统
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSource for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        // 非 UTF-8 内容在这里返回 InvalidData
        let content = fs::read_to_string(path)?;
        Ok(content.lines().map(String::from).collect())
    }
}

/// 单个格式的尝试结果
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// 文件不存在
    Missing,
    /// 文件存在但读取失败
    ReadFailed(String),
    /// 找不到标记或数值无法解析
    NoValue,
    /// 成功提取
    Found(f64),
}

/// 对某个输出文件的一次提取尝试
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub source: EnergySource,
    pub outcome: AttemptOutcome,
}

/// 一个计算目录的提取结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extraction {
    /// 第一个成功的 (能量, 来源)
    pub energy: Option<(f64, EnergySource)>,
    /// 按顺序记录的所有尝试
    pub attempts: Vec<Attempt>,
}

/// 按行解析指定格式
pub fn parse_lines<S: AsRef<str>>(source: EnergySource, lines: &[S]) -> Option<f64> {
    match source {
        EnergySource::Oszicar => oszicar::parse_oszicar_lines(lines),
        EnergySource::Outcar => outcar::parse_outcar_lines(lines),
        EnergySource::Vasprun => vasprun::parse_vasprun_lines(lines),
    }
}

/// 按优先级从目录中提取能量，遇到第一个成功的格式即停止
pub fn extract<F: FileSource + ?Sized>(fs: &F, directory: &Path) -> Extraction {
    let mut extraction = Extraction::default();

    for source in EnergySource::PRIORITY {
        let path = directory.join(source.file_name());

        let outcome = if !fs.exists(&path) {
            AttemptOutcome::Missing
        } else {
            match fs.read_lines(&path) {
                Err(e) => AttemptOutcome::ReadFailed(e.to_string()),
                Ok(lines) => match parse_lines(source, &lines) {
                    Some(energy) => AttemptOutcome::Found(energy),
                    None => AttemptOutcome::NoValue,
                },
            }
        };

        let found = match outcome {
            AttemptOutcome::Found(energy) => Some(energy),
            _ => None,
        };
        extraction.attempts.push(Attempt { source, outcome });

        if let Some(energy) = found {
            extraction.energy = Some((energy, source));
            break;
        }
    }

    extraction
}

/// 目录中是否存在任一可识别的输出文件
pub fn has_output_files<F: FileSource + ?Sized>(fs: &F, directory: &Path) -> bool {
    EnergySource::PRIORITY
        .iter()
        .any(|s| fs.exists(&directory.join(s.file_name())))
}
