pub mod advisor;
pub(crate) mod report;

use std::error::Error;
use std::path::Path;

use crate::config::Thresholds;
use crate::quality::analyze_project;
use crate::walk::FileFilter;
pub use advisor::{
    Effort, RefactoringSuggestion, RefactoringType, effort_for, estimated_hours,
    priority_for_complexity, priority_for_severity, refactoring_for, suggest,
};
use report::{RefactoringReport, print_json, print_report};

pub fn run(
    path: &Path,
    json: bool,
    filters: &[String],
    config: Option<&Path>,
    top: usize,
) -> Result<(), Box<dyn Error>> {
    let thresholds = Thresholds::load(config)?;
    let filter = FileFilter::new(filters)?;

    let project = analyze_project(path, &filter, &thresholds);
    let suggestions = suggest(&project.all_smells(), &project.all_functions(), &thresholds);
    let report = RefactoringReport::build(suggestions, project.files.len(), top);

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
