//! # scan 命令实现
//!
//! 扫描计算目录，提取 VASP 最终能量并生成报告。
//!
//! ## 功能
//! - 收集含有 OSZICAR / OUTCAR / vasprun.xml 的计算目录
//! - 按优先级提取每个目录的能量（可并行）
//! - 可选计算反应能量
//! - 生成终端表格、CSV 和可选 JSON 输出
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `batch/`, `parsers/`, `reaction/`, `report/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, CalcDirCollector};
use crate::cli::scan::ScanArgs;
use crate::commands::react::evaluate_reactions;
use crate::error::{EnergyError, Result};
use crate::models::calculation::build_symbol_table;
use crate::models::{EnergyRecord, ReactionResult};
use crate::parsers::{self, Attempt, AttemptOutcome, LocalFs};
use crate::report::{export, table, EnergyReport, ReportMetadata};
use crate::utils::output;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 扫描结果
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// 找到的计算目录数
    pub dirs_scanned: usize,
    /// 按结构名称排序的能量记录（同名目录后者覆盖前者）
    pub records: Vec<EnergyRecord>,
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::set_verbose(args.verbose);
    output::print_header("Extracting VASP Energies");

    let root = resolve_root(&args.directory)?;
    output::print_info(&format!("Scanning directory: {}", root.display()));

    let outcome = collect_energies(&root, args.recursive, args.jobs)?;

    if outcome.dirs_scanned == 0 {
        output::print_warning(&format!(
            "No directories with VASP output found in {}",
            root.display()
        ));
        return Ok(());
    }

    if outcome.records.is_empty() {
        output::print_warning("No energy data found.");
        return Ok(());
    }

    println!("{}", table::energy_table(&outcome.records));

    let reactions = match args.reactions {
        Some(ref path) => load_and_evaluate_reactions(path, &outcome.records),
        None => Vec::new(),
    };

    if !reactions.is_empty() {
        println!("{}", table::reaction_table(&reactions));
    }

    let report = EnergyReport {
        metadata: ReportMetadata {
            timestamp: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            root_directory: root.display().to_string(),
            recursive: args.recursive,
        },
        energies: outcome.records,
        reactions,
    };

    export::to_csv(&report, &args.output)?;
    output::print_success(&format!(
        "Energy data saved to '{}'",
        args.output.display()
    ));

    if let Some(ref json_path) = args.json {
        export::to_json(&report, json_path)?;
        output::print_success(&format!(
            "Energy data saved as JSON to '{}'",
            json_path.display()
        ));
    }

    output::print_done(&format!(
        "Processed {} directories, extracted {} energies",
        outcome.dirs_scanned,
        report.energies.len()
    ));
    if !report.reactions.is_empty() {
        output::print_done(&format!(
            "Computed {} reaction energies",
            report.reactions.len()
        ));
    }

    Ok(())
}

/// 校验并规范化根目录
fn resolve_root(directory: &Path) -> Result<PathBuf> {
    if !directory.is_dir() {
        return Err(EnergyError::DirectoryNotFound {
            path: directory.display().to_string(),
        });
    }

    fs::canonicalize(directory).map_err(|e| EnergyError::FileReadError {
        path: directory.display().to_string(),
        source: e,
    })
}

/// 收集计算目录并提取能量
pub fn collect_energies(root: &Path, recursive: bool, jobs: usize) -> Result<ScanOutcome> {
    if !root.is_dir() {
        return Err(EnergyError::DirectoryNotFound {
            path: root.display().to_string(),
        });
    }

    let collector = CalcDirCollector::new(root.to_path_buf()).recursive(recursive);
    let calc_dirs = collector.collect();
    if calc_dirs.is_empty() {
        return Ok(ScanOutcome::default());
    }

    output::print_info(&format!(
        "Found {} directories with VASP output",
        calc_dirs.len()
    ));

    let runner = BatchRunner::new(jobs);
    output::print_debug(&format!("Using {} parallel jobs", runner.jobs()));
    let extractions = runner.run(&calc_dirs, "Extracting", |dir| {
        parsers::extract(&LocalFs, dir)
    });

    let mut by_name: BTreeMap<String, EnergyRecord> = BTreeMap::new();
    for (dir, extraction) in calc_dirs.iter().zip(extractions) {
        let rel_path = relative_display(root, dir);
        for attempt in &extraction.attempts {
            output::print_debug(&describe_attempt(&rel_path, attempt));
        }

        match extraction.energy {
            Some((energy, source)) => {
                let name = collector.structure_name(dir);
                output::print_info(&format!(
                    "{}: {:.6} eV from {}",
                    rel_path, energy, source
                ));
                if by_name.contains_key(&name) {
                    output::print_warning(&format!(
                        "Structure name '{}' is used by more than one directory; keeping {}",
                        name, rel_path
                    ));
                }
                by_name.insert(name.clone(), EnergyRecord::new(name, energy, source));
            }
            None => {
                output::print_skip(&format!("No usable energy data in {}", rel_path));
            }
        }
    }

    Ok(ScanOutcome {
        dirs_scanned: calc_dirs.len(),
        records: by_name.into_values().collect(),
    })
}

/// 读取反应文件并计算，文件不可用时只给出提示
fn load_and_evaluate_reactions(path: &Path, records: &[EnergyRecord]) -> Vec<ReactionResult> {
    if !path.exists() {
        output::print_warning(&format!(
            "Reactions file '{}' not found, skipping reactions",
            path.display()
        ));
        return Vec::new();
    }

    output::print_info(&format!("Reading reactions from {}", path.display()));
    match fs::read_to_string(path) {
        Ok(content) => evaluate_reactions(&build_symbol_table(records), &content),
        Err(e) => {
            output::print_error(&format!(
                "Failed to read reactions file '{}': {}",
                path.display(),
                e
            ));
            Vec::new()
        }
    }
}

/// 相对根目录的显示路径，根目录本身显示为 "."
fn relative_display(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => dir.display().to_string(),
    }
}

fn describe_attempt(rel_path: &str, attempt: &Attempt) -> String {
    let detail = match &attempt.outcome {
        AttemptOutcome::Missing => "not present".to_string(),
        AttemptOutcome::ReadFailed(reason) => format!("read failed: {}", reason),
        AttemptOutcome::NoValue => "no energy value found".to_string(),
        AttemptOutcome::Found(energy) => format!("found {:.6} eV", energy),
    };
    format!("{}/{}: {}", rel_path, attempt.source, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnergySource;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_collect_energies_skips_directories_without_energy() {
        let temp = TempDir::new().expect("tempdir should be created");
        let root = temp.path();
        write(
            root,
            "A/OSZICAR",
            "   1 F= -.99000000E+02 E0= -.99E+02\n   2 F= -100.123456 E0= -100.12\n",
        );
        fs::create_dir_all(root.join("B")).unwrap();
        write(root, "B/INCAR", "ENCUT = 500\n");

        let outcome = collect_energies(root, false, 1).unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].structure_name, "A");
        assert_eq!(outcome.records[0].source, EnergySource::Oszicar);
        assert!((outcome.records[0].energy + 100.123456).abs() < 1e-6);
    }

    #[test]
    fn test_collect_energies_sorted_and_mixed_sources() {
        let temp = TempDir::new().expect("tempdir should be created");
        let root = temp.path();
        write(root, "zeta/vasprun.xml", "<i name=\"e_fr_energy\"> -3.5 </i>\n");
        write(root, "alpha/OUTCAR", "  free  energy   TOTEN  =  -7.25 eV\n");
        write(root, "mid/OUTCAR", "nothing to see\n");

        let outcome = collect_energies(root, false, 2).unwrap();
        let names: Vec<&str> = outcome
            .records
            .iter()
            .map(|r| r.structure_name.as_str())
            .collect();

        assert_eq!(outcome.dirs_scanned, 3);
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(outcome.records[1].source, EnergySource::Vasprun);
    }

    #[test]
    fn test_collect_energies_basename_collision_last_path_wins() {
        let temp = TempDir::new().expect("tempdir should be created");
        let root = temp.path();
        write(root, "a/Si/OUTCAR", "  free  energy   TOTEN  =  -1.0 eV\n");
        write(root, "b/Si/OUTCAR", "  free  energy   TOTEN  =  -2.0 eV\n");

        let outcome = collect_energies(root, true, 1).unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert!((outcome.records[0].energy + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_collect_energies_missing_root_is_fatal() {
        let temp = TempDir::new().expect("tempdir should be created");
        let result = collect_energies(&temp.path().join("missing"), false, 1);
        assert!(matches!(result, Err(EnergyError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_execute_writes_csv_json_and_reactions() {
        let temp = TempDir::new().expect("tempdir should be created");
        let root = temp.path().join("runs");
        write(&root, "H2/OSZICAR", "   1 F= -6.0 E0= -6.0\n");
        write(&root, "O2/OUTCAR", "  free  energy   TOTEN  =  -12.0 eV\n");
        write(&root, "H2O/vasprun.xml", "<i name=\"e_fr_energy\"> -10.0 </i>\n");
        let reactions = temp.path().join("reactions.txt");
        fs::write(&reactions, "# water\n2H2 + O2 -> 2H2O\nH2 -> He\n").unwrap();

        let csv_path = temp.path().join("energies.csv");
        let json_path = temp.path().join("energies.json");
        execute(ScanArgs {
            directory: root,
            output: csv_path.clone(),
            recursive: false,
            verbose: true,
            json: Some(json_path.clone()),
            reactions: Some(reactions),
            jobs: 1,
        })
        .unwrap();

        let csv_content = fs::read_to_string(&csv_path).unwrap();
        assert!(csv_content.contains("H2,-6.000000,OSZICAR"));
        assert!(csv_content.contains("H2O,-10.000000,vasprun.xml"));
        assert!(csv_content.contains("O2,-12.000000,OUTCAR"));
        assert!(csv_content.contains("2H2 + O2 -> 2H2O,4.000000"));
        assert!(!csv_content.contains("H2 -> He"));

        let report = export::from_json(&json_path).unwrap();
        assert_eq!(report.energies.len(), 3);
        assert_eq!(report.reactions.len(), 1);
        assert!(!report.metadata.recursive);

        // JSON 保留完整 ISO 时间，CSV 注释行使用 "日期 时间"
        let created = csv_content
            .lines()
            .find(|l| l.starts_with("# Created:,"))
            .unwrap()
            .trim_start_matches("# Created:,");
        assert_eq!(created.len(), "2024-05-01 12:00:00".len());
        assert_eq!(&created[10..11], " ");
        assert!(report.metadata.timestamp.contains('T'));
        assert!(report.metadata.timestamp.contains('.'));
    }

    #[test]
    fn test_execute_without_calculations_writes_nothing() {
        let temp = TempDir::new().expect("tempdir should be created");
        let root = temp.path().join("empty");
        fs::create_dir_all(&root).unwrap();
        let csv_path = temp.path().join("energies.csv");

        execute(ScanArgs {
            directory: root,
            output: csv_path.clone(),
            recursive: true,
            verbose: false,
            json: None,
            reactions: None,
            jobs: 0,
        })
        .unwrap();

        assert!(!csv_path.exists());
    }

    #[test]
    fn test_relative_display() {
        let root = Path::new("/data/runs");
        assert_eq!(relative_display(root, Path::new("/data/runs")), ".");
        assert_eq!(relative_display(root, Path::new("/data/runs/a/b")), "a/b");
    }
}
