//! # 反应能量模块
//!
//! 根据反应方程式和能量表计算反应能量（产物 - 反应物）。
//!
//! ## 方程式格式
//! ```text
//! 2H2 + O2 -> 2H2O
//! Slab + 0.5O2 = Slab_O
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs`, `commands/react.rs` 使用
//! - 使用 `models/`
//! - 子模块: evaluator

pub mod evaluator;

pub use evaluator::evaluate;

use crate::error::Result;
use crate::models::{ReactionResult, SymbolTable};

/// 反应文件中需要计算的行：去除空行与 `#` 注释行
pub fn reaction_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

/// 逐行计算反应能量，结果保持输入顺序
///
/// 每行单独返回结果，失败的行不影响其他行。
pub fn evaluate_all<'a>(
    table: &SymbolTable,
    formulas: &[&'a str],
) -> Vec<(&'a str, Result<ReactionResult>)> {
    formulas
        .iter()
        .map(|&formula| {
            let result = evaluate(table, formula).map(|energy_delta| ReactionResult {
                formula: formula.to_string(),
                energy_delta,
            });
            (formula, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnergyError;

    #[test]
    fn test_reaction_lines_skip_comments_and_blanks() {
        let content = "# water formation\n\n  2H2 + O2 -> 2H2O  \n   \n#A -> B\nA = B\n";
        let lines = reaction_lines(content.lines());
        assert_eq!(lines, vec!["2H2 + O2 -> 2H2O", "A = B"]);
    }

    #[test]
    fn test_evaluate_all_keeps_order_and_isolates_failures() {
        let table: SymbolTable = [("A".to_string(), 1.0), ("B".to_string(), 3.0)]
            .into_iter()
            .collect();
        let formulas = ["A -> B", "A -> C", "A B", "2A = B"];
        let results = evaluate_all(&table, &formulas);

        assert_eq!(results.len(), 4);
        assert!((results[0].1.as_ref().unwrap().energy_delta - 2.0).abs() < 1e-12);
        assert!(matches!(
            results[1].1,
            Err(EnergyError::UnresolvedSymbol { .. })
        ));
        assert!(matches!(
            results[2].1,
            Err(EnergyError::MalformedFormula { .. })
        ));
        assert_eq!(results[3].0, "2A = B");
        assert!((results[3].1.as_ref().unwrap().energy_delta - 1.0).abs() < 1e-12);
    }
}
