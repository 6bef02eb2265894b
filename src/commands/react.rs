//! # react 命令实现
//!
//! 读取能量 JSON 与反应文件，逐行计算反应能量。
//!
//! ## 依赖关系
//! - 使用 `cli/react.rs` 定义的参数
//! - 使用 `reaction/`, `report/`
//! - `evaluate_reactions` 同时被 `commands/scan.rs` 使用

use crate::cli::react::ReactArgs;
use crate::error::{EnergyError, Result};
use crate::models::{calculation::build_symbol_table, ReactionResult, SymbolTable};
use crate::reaction;
use crate::report::{export, table};
use crate::utils::output;

/// 执行 react 命令
pub fn execute(args: ReactArgs) -> Result<()> {
    output::set_verbose(args.verbose);
    output::print_header("Evaluating Reaction Energies");

    for path in [&args.energies, &args.reactions] {
        if !path.is_file() {
            return Err(EnergyError::FileNotFound {
                path: path.display().to_string(),
            });
        }
    }

    let report = export::from_json(&args.energies)?;
    let symbols = build_symbol_table(&report.energies);
    output::print_info(&format!(
        "Loaded {} energies from '{}'",
        symbols.len(),
        args.energies.display()
    ));
    output::print_debug(&format!(
        "Energies were extracted from '{}' at {}",
        report.metadata.root_directory, report.metadata.timestamp
    ));

    let content = std::fs::read_to_string(&args.reactions).map_err(|e| {
        EnergyError::FileReadError {
            path: args.reactions.display().to_string(),
            source: e,
        }
    })?;

    let results = evaluate_reactions(&symbols, &content);
    if results.is_empty() {
        output::print_warning("No reaction energies could be computed.");
        return Ok(());
    }

    println!("{}", table::reaction_table(&results));

    if let Some(ref output_path) = args.output {
        export::reactions_to_csv(&results, output_path)?;
        output::print_success(&format!(
            "Reaction energies saved to '{}'",
            output_path.display()
        ));
    }

    output::print_done(&format!("Computed {} reaction energies", results.len()));
    Ok(())
}

/// 计算反应文件中所有反应的能量，无法计算的行给出警告后跳过
pub fn evaluate_reactions(symbols: &SymbolTable, content: &str) -> Vec<ReactionResult> {
    let lines = reaction::reaction_lines(content.lines());
    output::print_debug(&format!("Found {} reaction lines", lines.len()));

    reaction::evaluate_all(symbols, &lines)
        .into_iter()
        .filter_map(|(formula, result)| match result {
            Ok(r) => {
                output::print_debug(&format!(
                    "Reaction '{}': {:.6} eV",
                    formula, r.energy_delta
                ));
                Some(r)
            }
            Err(e) => {
                output::print_warning(&format!(
                    "Cannot compute reaction '{}': {}",
                    formula, e
                ));
                None
            }
        })
        .collect()
}
