//! Report formatters for the complexity analysis.
//!
//! Provides a per-file table, a per-function breakdown, and JSON. The
//! per-function mode lists each function with cyclomatic, cognitive,
//! nesting, and rating columns, useful for finding the functions that
//! drive high file-level totals.

use std::path::PathBuf;

use serde::Serialize;

use super::analyzer::FunctionMetric;
use crate::config::Thresholds;
use crate::report_helpers;

/// Per-file complexity metrics with per-function breakdown.
#[derive(Debug, Serialize)]
pub struct FileComplexity {
    pub path: PathBuf,
    pub function_count: usize,
    pub avg_cyclomatic: f64,
    pub max_cyclomatic: usize,
    pub total_cyclomatic: usize,
    pub functions: Vec<FunctionMetric>,
}

/// Aggregate complexity report across all analyzed files.
#[derive(Debug, Serialize)]
pub struct ComplexityReport {
    pub files_analyzed: usize,
    pub function_count: usize,
    pub avg_cyclomatic: f64,
    pub max_cyclomatic: usize,
    pub functions_over_threshold: usize,
    pub complexity_threshold: usize,
    pub files: Vec<FileComplexity>,
    pub summary: String,
}

impl ComplexityReport {
    /// Aggregate sorted per-file results, keeping the top `top` files.
    pub fn build(mut files: Vec<FileComplexity>, thresholds: &Thresholds, top: usize) -> Self {
        let files_analyzed = files.len();
        let function_count: usize = files.iter().map(|f| f.function_count).sum();
        let total: usize = files.iter().map(|f| f.total_cyclomatic).sum();
        let max_cyclomatic = files.iter().map(|f| f.max_cyclomatic).max().unwrap_or(0);
        let avg_cyclomatic = if function_count > 0 {
            total as f64 / function_count as f64
        } else {
            0.0
        };
        let functions_over_threshold = files
            .iter()
            .flat_map(|f| f.functions.iter())
            .filter(|f| f.cyclomatic > thresholds.max_complexity)
            .count();

        files.truncate(top);

        let summary = format!(
            "{function_count} functions in {files_analyzed} files, \
             average complexity {avg_cyclomatic:.1}, \
             {functions_over_threshold} over the threshold of {}",
            thresholds.max_complexity
        );

        ComplexityReport {
            files_analyzed,
            function_count,
            avg_cyclomatic,
            max_cyclomatic,
            functions_over_threshold,
            complexity_threshold: thresholds.max_complexity,
            files,
            summary,
        }
    }
}

/// Print a table of per-file complexity with a totals row.
pub fn print_report(report: &ComplexityReport) {
    if report.files.is_empty() {
        println!("No recognized source files found.");
        return;
    }

    let max_path_len =
        report_helpers::max_path_width(report.files.iter().map(|f| f.path.as_path()), 4);
    let separator = report_helpers::separator((max_path_len + 50).max(78));

    println!("Cyclomatic Complexity");
    println!("{separator}");
    println!(
        " {:<width$}  {:>9} {:>5} {:>5} {:>7}",
        "File",
        "Functions",
        "Avg",
        "Max",
        "Total",
        width = max_path_len
    );
    println!("{separator}");

    for f in &report.files {
        println!(
            " {:<width$}  {:>9} {:>5.1} {:>5} {:>7}",
            f.path.display(),
            f.function_count,
            f.avg_cyclomatic,
            f.max_cyclomatic,
            f.total_cyclomatic,
            width = max_path_len
        );
    }

    println!("{separator}");
    println!("{}", report.summary);
}

/// Print per-function complexity grouped by file.
pub fn print_per_function(report: &ComplexityReport) {
    if report.files.is_empty() {
        println!("No recognized source files found.");
        return;
    }

    let separator = report_helpers::separator(78);
    println!("Cyclomatic Complexity (per function)");
    println!("{separator}");

    for f in &report.files {
        println!();
        println!("{}:", f.path.display());

        let max_name_len = f
            .functions
            .iter()
            .map(|func| func.name.len())
            .max()
            .unwrap_or(10)
            .max(10);

        for func in &f.functions {
            println!(
                "  {:<width$}  L{:<5} cyclo {:>3}  cog {:>3}  nest {:>2}  {}",
                func.name,
                func.start_line,
                func.cyclomatic,
                func.cognitive,
                func.max_nesting,
                func.rating.as_str(),
                width = max_name_len
            );
        }
    }

    println!();
    println!("{}", report.summary);
}

pub fn print_json(report: &ComplexityReport) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(report)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
