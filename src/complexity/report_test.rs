use std::path::PathBuf;

use super::*;
use crate::complexity::analyzer::{FunctionMetric, Rating};

fn sample_file(path: &str, complexities: &[usize]) -> FileComplexity {
    let functions: Vec<FunctionMetric> = complexities
        .iter()
        .enumerate()
        .map(|(i, &c)| FunctionMetric {
            file: PathBuf::from(path),
            name: format!("fn{i}"),
            start_line: i * 10 + 1,
            end_line: i * 10 + 5,
            loc: 5,
            cyclomatic: c,
            cognitive: c,
            max_nesting: 1,
            parameters: 0,
            returns: 1,
            rating: Rating::from_cyclomatic(c),
        })
        .collect();

    let total: usize = complexities.iter().sum();
    let max = complexities.iter().copied().max().unwrap_or(0);
    FileComplexity {
        path: PathBuf::from(path),
        function_count: functions.len(),
        avg_cyclomatic: total as f64 / functions.len().max(1) as f64,
        max_cyclomatic: max,
        total_cyclomatic: total,
        functions,
    }
}

#[test]
fn build_counts_over_threshold() {
    let files = vec![sample_file("a.ts", &[2, 15]), sample_file("b.ts", &[11])];
    let report = ComplexityReport::build(files, &Thresholds::default(), 20);
    assert_eq!(report.files_analyzed, 2);
    assert_eq!(report.function_count, 3);
    assert_eq!(report.functions_over_threshold, 2);
    assert_eq!(report.max_cyclomatic, 15);
}

#[test]
fn build_truncates_to_top() {
    let files = vec![
        sample_file("a.ts", &[1]),
        sample_file("b.ts", &[1]),
        sample_file("c.ts", &[1]),
    ];
    let report = ComplexityReport::build(files, &Thresholds::default(), 2);
    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files_analyzed, 3);
}

#[test]
fn build_empty_input() {
    let report = ComplexityReport::build(Vec::new(), &Thresholds::default(), 10);
    assert_eq!(report.function_count, 0);
    assert_eq!(report.avg_cyclomatic, 0.0);
    print_report(&report); // prints the empty message, must not panic
}

#[test]
fn print_modes_do_not_panic() {
    let files = vec![sample_file("a.ts", &[2, 15])];
    let report = ComplexityReport::build(files, &Thresholds::default(), 20);
    print_report(&report);
    print_per_function(&report);
    print_json(&report).unwrap();
}
