pub mod builder;
pub(crate) mod report;

use std::error::Error;
use std::path::Path;

use crate::config::Thresholds;
use crate::smells::Severity;
use crate::walk::FileFilter;
pub use builder::{FileAnalysis, ProjectAnalysis, analyze_content, analyze_file, analyze_project};
pub use report::{QualityReport, SourceFile};
use report::{print_json, print_report};

#[allow(clippy::too_many_arguments)]
pub fn run(
    path: &Path,
    json: bool,
    filters: &[String],
    config: Option<&Path>,
    min_severity: &str,
    max_smells: usize,
    max_complexity: Option<usize>,
    top: usize,
) -> Result<(), Box<dyn Error>> {
    let min_severity = Severity::parse(min_severity)
        .ok_or_else(|| format!("unknown severity '{min_severity}' (info|minor|major|critical)"))?;

    let mut thresholds = Thresholds::load(config)?;
    if let Some(c) = max_complexity {
        thresholds = thresholds.with_max_complexity(c);
    }
    thresholds.validate()?;

    let filter = FileFilter::new(filters)?;
    let project = analyze_project(path, &filter, &thresholds);
    let report = QualityReport::build(&project, &thresholds, min_severity, max_smells, top);

    if json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
