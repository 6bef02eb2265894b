//! # 反应方程式求值
//!
//! 解析 `反应物 -> 产物`（或 `=`）两侧以 `+` 分隔的项，
//! 每项为可选数字系数紧跟结构名称，例如 `2H2O`、`0.5O2`、`Slab_O`。
//!
//! ## 依赖关系
//! - 被 `reaction/mod.rs` 使用
//! - 使用 `regex` 匹配项的语法

use crate::error::{EnergyError, ReactionSide, Result};
use crate::models::{ReactionTerm, SymbolTable};

use regex::Regex;
use std::sync::OnceLock;

/// 分隔符，按顺序尝试
const SEPARATORS: [&str; 2] = ["->", "="];

fn term_regex() -> &'static Regex {
    static TERM: OnceLock<Regex> = OnceLock::new();
    TERM.get_or_init(|| {
        Regex::new(r"^([0-9]*\.?[0-9]*)([A-Za-z0-9_.\-]+)$").expect("term pattern is valid")
    })
}

/// 将方程式拆分为 (反应物, 产物) 两侧
pub fn split_formula(formula: &str) -> Result<(&str, &str)> {
    let separator = SEPARATORS
        .iter()
        .find(|sep| formula.contains(**sep))
        .ok_or_else(|| EnergyError::MalformedFormula {
            formula: formula.to_string(),
            reason: "use '->' or '=' to separate reactants and products".to_string(),
        })?;

    let mut sides = formula.split(*separator);
    match (sides.next(), sides.next(), sides.next()) {
        (Some(reactants), Some(products), None) => Ok((reactants, products)),
        _ => Err(EnergyError::MalformedFormula {
            formula: formula.to_string(),
            reason: format!("'{}' must appear exactly once", separator),
        }),
    }
}

/// 解析单个项
///
/// 空项返回 `Ok(None)`。不符合 `系数+名称` 语法的项整体作为名称，系数为 1。
pub fn parse_term(term: &str) -> Result<Option<ReactionTerm>> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(None);
    }

    let Some(caps) = term_regex().captures(term) else {
        return Ok(Some(ReactionTerm {
            coefficient: 1.0,
            symbol: term.to_string(),
        }));
    };

    let coef_str = &caps[1];
    let coefficient = if coef_str.is_empty() {
        1.0
    } else {
        coef_str
            .parse::<f64>()
            .map_err(|_| EnergyError::MalformedFormula {
                formula: term.to_string(),
                reason: format!("invalid coefficient '{}'", coef_str),
            })?
    };

    Ok(Some(ReactionTerm {
        coefficient,
        symbol: caps[2].to_string(),
    }))
}

/// 计算一侧的能量加和，遇到未知结构立即失败
fn side_energy(table: &SymbolTable, side: &str, kind: ReactionSide) -> Result<f64> {
    let mut total = 0.0;
    for term in side.split('+') {
        let Some(term) = parse_term(term)? else {
            continue;
        };
        let energy = table
            .get(&term.symbol)
            .ok_or_else(|| EnergyError::UnresolvedSymbol {
                symbol: term.symbol.clone(),
                side: kind,
            })?;
        total += term.coefficient * energy;
    }
    Ok(total)
}

/// 计算反应能量：产物能量之和 - 反应物能量之和
pub fn evaluate(table: &SymbolTable, formula: &str) -> Result<f64> {
    let (reactants, products) = split_formula(formula)?;
    let reactant_energy = side_energy(table, reactants, ReactionSide::Reactant)?;
    let product_energy = side_energy(table, products, ReactionSide::Product)?;
    Ok(product_energy - reactant_energy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, f64)]) -> SymbolTable {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    fn term(coefficient: f64, symbol: &str) -> Option<ReactionTerm> {
        Some(ReactionTerm {
            coefficient,
            symbol: symbol.to_string(),
        })
    }

    #[test]
    fn test_parse_term_with_coefficient() {
        assert_eq!(parse_term("2.5X").unwrap(), term(2.5, "X"));
        assert_eq!(parse_term("2H2O").unwrap(), term(2.0, "H2O"));
        assert_eq!(parse_term(" 0.5O2 ").unwrap(), term(0.5, "O2"));
    }

    #[test]
    fn test_parse_term_implicit_coefficient() {
        assert_eq!(parse_term("X").unwrap(), term(1.0, "X"));
        assert_eq!(parse_term("Slab_O-top.v2").unwrap(), term(1.0, "Slab_O-top.v2"));
    }

    #[test]
    fn test_parse_term_all_digits_keeps_last_digit_as_name() {
        assert_eq!(parse_term("22").unwrap(), term(2.0, "2"));
    }

    #[test]
    fn test_parse_term_grammar_miss_is_bare_symbol() {
        assert_eq!(parse_term("2 H2O").unwrap(), term(1.0, "2 H2O"));
        assert_eq!(parse_term("Fe(OH)2").unwrap(), term(1.0, "Fe(OH)2"));
    }

    #[test]
    fn test_parse_term_empty() {
        assert_eq!(parse_term("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_term_invalid_coefficient() {
        assert!(matches!(
            parse_term(".H"),
            Err(EnergyError::MalformedFormula { .. })
        ));
    }

    #[test]
    fn test_evaluate_water_formation() {
        let t = table(&[("H2O", -10.0), ("H2", -6.0), ("O2", -12.0)]);
        let delta = evaluate(&t, "2H2 + O2 -> 2H2O").unwrap();
        assert!((delta - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_equals_separator() {
        let t = table(&[("A", -1.5), ("B", -4.0)]);
        let delta = evaluate(&t, "2A = B").unwrap();
        assert!((delta + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_skips_empty_terms() {
        let t = table(&[("A", 2.0), ("B", 5.0)]);
        let delta = evaluate(&t, "A + -> B +").unwrap();
        assert!((delta - 3.0).abs() < 1e-12);

        let delta = evaluate(&t, " -> B").unwrap();
        assert!((delta - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_unresolved_product() {
        let t = table(&[("A", 1.0)]);
        match evaluate(&t, "A -> B") {
            Err(EnergyError::UnresolvedSymbol { symbol, side }) => {
                assert_eq!(symbol, "B");
                assert_eq!(side, ReactionSide::Product);
            }
            other => panic!("expected UnresolvedSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_reports_reactant_miss_first() {
        let t = table(&[]);
        match evaluate(&t, "X -> Y") {
            Err(EnergyError::UnresolvedSymbol { symbol, side }) => {
                assert_eq!(symbol, "X");
                assert_eq!(side, ReactionSide::Reactant);
            }
            other => panic!("expected UnresolvedSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_without_separator() {
        let t = table(&[]);
        assert!(matches!(
            evaluate(&t, "A B"),
            Err(EnergyError::MalformedFormula { .. })
        ));
    }

    #[test]
    fn test_split_formula_prefers_arrow() {
        let (r, p) = split_formula("A -> B").unwrap();
        assert_eq!((r, p), ("A ", " B"));
    }

    #[test]
    fn test_split_formula_repeated_separator() {
        assert!(split_formula("A -> B -> C").is_err());
        assert!(split_formula("A = B = C").is_err());
    }
}
