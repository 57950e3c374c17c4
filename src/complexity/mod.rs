pub mod analyzer;
pub(crate) mod report;

use std::error::Error;
use std::path::Path;

use crate::config::Thresholds;
use crate::lines::classify_lines;
use crate::util::read_source_lines;
use crate::walk::{self, FileFilter};
pub use analyzer::{FunctionMetric, Rating};
use report::{ComplexityReport, FileComplexity, print_json, print_per_function, print_report};

/// Analyze pre-read content (avoids re-reading the file).
pub(crate) fn analyze_content(path: &Path, lines: &[String]) -> Option<FileComplexity> {
    let kinds = classify_lines(lines);
    let functions = analyzer::analyze_functions(path, lines, &kinds);
    if functions.is_empty() {
        return None;
    }

    let total: usize = functions.iter().map(|f| f.cyclomatic).sum();
    let max = functions.iter().map(|f| f.cyclomatic).max().unwrap_or(0);
    let avg = total as f64 / functions.len() as f64;

    Some(FileComplexity {
        path: path.to_path_buf(),
        function_count: functions.len(),
        avg_cyclomatic: avg,
        max_cyclomatic: max,
        total_cyclomatic: total,
        functions,
    })
}

pub(crate) fn analyze_file(path: &Path) -> Result<Option<FileComplexity>, Box<dyn Error>> {
    let lines = match read_source_lines(path)? {
        Some(v) => v,
        None => return Ok(None), // binary
    };
    Ok(analyze_content(path, &lines))
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    path: &Path,
    json: bool,
    filters: &[String],
    config: Option<&Path>,
    max_complexity: Option<usize>,
    top: usize,
    per_function: bool,
    sort_by: &str,
) -> Result<(), Box<dyn Error>> {
    let mut thresholds = Thresholds::load(config)?;
    if let Some(c) = max_complexity {
        thresholds = thresholds.with_max_complexity(c);
    }
    thresholds.validate()?;

    let filter = FileFilter::new(filters)?;
    let mut results: Vec<FileComplexity> = Vec::new();

    for file_path in walk::source_files(path, &filter) {
        match analyze_file(&file_path) {
            Ok(Some(fc)) => results.push(fc),
            Ok(None) => {}
            Err(err) => {
                eprintln!("warning: {}: {err}", file_path.display());
            }
        }
    }

    // Sort by chosen metric descending
    match sort_by {
        "max" => results.sort_by(|a, b| b.max_cyclomatic.cmp(&a.max_cyclomatic)),
        "avg" => results.sort_by(|a, b| {
            b.avg_cyclomatic
                .partial_cmp(&a.avg_cyclomatic)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        _ => results.sort_by(|a, b| b.total_cyclomatic.cmp(&a.total_cyclomatic)),
    }

    let report = ComplexityReport::build(results, &thresholds, top);

    if json {
        print_json(&report)?;
    } else if per_function {
        print_per_function(&report);
    } else {
        print_report(&report);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
