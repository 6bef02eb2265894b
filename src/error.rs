//! # 统一错误处理模块
//!
//! 定义 vasp-energy 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 反应方程式中的一侧
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionSide {
    Reactant,
    Product,
}

impl std::fmt::Display for ReactionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReactionSide::Reactant => write!(f, "reactant"),
            ReactionSide::Product => write!(f, "product"),
        }
    }
}

/// vasp-energy 统一错误类型
#[derive(Error, Debug)]
pub enum EnergyError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 反应方程式错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed reaction '{formula}': {reason}")]
    MalformedFormula { formula: String, reason: String },

    #[error("No energy data for {side} '{symbol}'")]
    UnresolvedSymbol { symbol: String, side: ReactionSide },

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, EnergyError>;
