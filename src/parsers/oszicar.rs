//! # VASP OSZICAR 解析器
//!
//! OSZICAR 按离子步追加记录，最后一个 `F=` 行即收敛后的自由能：
//!
//! ```text
//!    1 F= -.10839662E+03 E0= -.10838976E+03  d E =-.108397E+03
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 的 `extract` 使用

/// 能量标记
const MARKER: &str = "F=";

/// 从 OSZICAR 行中提取最终自由能
///
/// 只看最后一个含 `F=` 的行；该行数值无法解析时返回 `None`。
pub fn parse_oszicar_lines<S: AsRef<str>>(lines: &[S]) -> Option<f64> {
    let line = lines
        .iter()
        .map(|l| l.as_ref())
        .rev()
        .find(|l| l.contains(MARKER))?;
    line.split(MARKER)
        .nth(1)?
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}
