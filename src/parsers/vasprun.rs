//! # VASP vasprun.xml 解析器
//!
//! 不做 XML 解析，只按行扫描第一个 `e_fr_energy` 标签：
//!
//! ```text
//!    <i name="e_fr_energy">   -108.39662000 </i>
//! ```
//!
//! vasprun.xml 中该标签在每个离子步都会重复出现，这里按第一次出现取值。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 的 `extract` 使用

/// 能量标签
const TAG: &str = "e_fr_energy";

/// 从 vasprun.xml 行中提取自由能
///
/// 取第一个同时含有标签和 `>` 的行，数值位于第一个 `>` 与其后第一个 `<` 之间。
pub fn parse_vasprun_lines<S: AsRef<str>>(lines: &[S]) -> Option<f64> {
    for line in lines {
        let line = line.as_ref();
        if !line.contains(TAG) {
            continue;
        }

        // 没有 '>' 的标签行（例如跨行书写）直接跳过
        if let Some((_, rest)) = line.split_once('>') {
            let value = rest.split('<').next().unwrap_or(rest);
            return value.trim().parse().ok();
        }
    }
    None
}
