//! # 计算目录收集器
//!
//! 在根目录下查找含有 OSZICAR / OUTCAR / vasprun.xml 的计算目录。
//!
//! ## 功能
//! - 非递归：只检查根目录的直接子目录
//! - 递归：检查根目录本身及其下所有子目录
//! - 结果按路径排序
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `parsers::has_output_files` 判断目录

use crate::parsers::{self, LocalFs};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 计算目录收集器
pub struct CalcDirCollector {
    /// 根目录
    root: PathBuf,
    /// 是否递归
    recursive: bool,
}

impl CalcDirCollector {
    /// 创建新的目录收集器
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            recursive: false,
        }
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有计算目录（按路径排序）
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            return vec![];
        }

        let (min_depth, max_depth) = if self.recursive {
            (0, usize::MAX)
        } else {
            (1, 1)
        };

        let recursive = self.recursive;
        let mut dirs: Vec<PathBuf> = WalkDir::new(&self.root)
            .min_depth(min_depth)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            // 直接子目录跟随符号链接；递归时不进入链接目录
            .filter(|e| {
                if recursive {
                    e.file_type().is_dir()
                } else {
                    e.path().is_dir()
                }
            })
            .map(|e| e.into_path())
            .filter(|p| parsers::has_output_files(&LocalFs, p))
            .collect();

        dirs.sort();
        dirs
    }

    /// 计算目录对应的结构名称
    ///
    /// 取相对根目录路径的最后一段。递归扫描包含根目录本身时使用根目录名，
    /// 而不是相对路径的 "."。
    pub fn structure_name(&self, dir: &Path) -> String {
        let name = dir
            .strip_prefix(&self.root)
            .ok()
            .and_then(|rel| rel.file_name())
            .or_else(|| self.root.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if name.is_empty() {
            // 例如根目录为 "/"
            self.root.display().to_string()
        } else {
            name
        }
    }
}
