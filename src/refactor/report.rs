//! Report formatters for refactoring suggestions.

use serde::Serialize;

use super::advisor::{Effort, RefactoringSuggestion, estimated_hours};
use crate::report_helpers;

/// Aggregated refactoring analysis result.
#[derive(Debug, Serialize)]
pub struct RefactoringReport {
    pub files_analyzed: usize,
    pub total_suggestions: usize,
    pub estimated_hours: f64,
    /// Highest priority first, truncated to the requested count.
    pub suggestions: Vec<RefactoringSuggestion>,
    pub summary: String,
}

impl RefactoringReport {
    pub fn build(
        suggestions: Vec<RefactoringSuggestion>,
        files_analyzed: usize,
        top: usize,
    ) -> Self {
        let total_suggestions = suggestions.len();
        let hours = estimated_hours(&suggestions);

        let mut kept = suggestions;
        kept.truncate(top);

        let summary = format!(
            "{total_suggestions} suggestions across {files_analyzed} files, \
             ~{hours:.1} hours of estimated effort",
        );

        RefactoringReport {
            files_analyzed,
            total_suggestions,
            estimated_hours: hours,
            suggestions: kept,
            summary,
        }
    }
}

fn effort_tag(effort: Effort) -> &'static str {
    match effort {
        Effort::Low => "low   ",
        Effort::Medium => "medium",
        Effort::High => "high  ",
    }
}

pub fn print_report(report: &RefactoringReport) {
    if report.total_suggestions == 0 {
        println!("No refactoring suggestions.");
        return;
    }

    let separator = report_helpers::separator(78);
    println!("Refactoring Suggestions");
    println!("{separator}");

    for s in &report.suggestions {
        println!(
            " P{} [{}] {} — {}:{}",
            s.priority,
            effort_tag(s.effort),
            s.refactoring_type.as_str(),
            s.file.display(),
            s.start_line,
        );
        println!("      {}", s.reason);
        println!("      → {}", s.expected_improvement);
    }

    if report.suggestions.len() < report.total_suggestions {
        println!(
            " ... and {} more",
            report.total_suggestions - report.suggestions.len()
        );
    }

    println!("{separator}");
    println!("{}", report.summary);
}

pub fn print_json(report: &RefactoringReport) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(report)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
