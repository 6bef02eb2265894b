//! # VASP OUTCAR 解析器
//!
//! OUTCAR 在每个离子步结束时打印一次自由能 TOTEN，取最后一次：
//!
//! ```text
//!   free  energy   TOTEN  =      -108.39662000 eV
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 的 `extract` 使用

/// 能量标记（空格数量与 OUTCAR 原文一致）
const MARKER: &str = "free  energy   TOTEN";

/// 从 OUTCAR 行中提取最终自由能
///
/// 能量是最后一个标记行的倒数第二个字段（最后一个字段是 `eV`）。
pub fn parse_outcar_lines<S: AsRef<str>>(lines: &[S]) -> Option<f64> {
    let line = lines
        .iter()
        .map(|l| l.as_ref())
        .rev()
        .find(|l| l.contains(MARKER))?;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }
    parts[parts.len() - 2].parse().ok()
}
