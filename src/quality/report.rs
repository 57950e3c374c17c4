//! The aggregate quality report.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::builder::ProjectAnalysis;
use crate::classes::ClassMetric;
use crate::complexity::FunctionMetric;
use crate::config::Thresholds;
use crate::report_helpers;
use crate::score::{Grade, overall_score, score_to_grade};
use crate::smells::{CodeSmell, Severity};

/// Per-file summary row of the quality report.
#[derive(Debug, Clone, Serialize)]
pub struct SourceFile {
    pub path: PathBuf,
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    pub function_count: usize,
    pub class_count: usize,
    pub avg_complexity: f64,
    pub max_complexity: usize,
    pub smell_count: usize,
    pub score: f64,
}

/// The full quality analysis result.
#[derive(Debug, Serialize)]
pub struct QualityReport {
    pub files_analyzed: usize,
    pub total_lines: usize,
    pub score: f64,
    pub grade: Grade,
    pub total_smells: usize,
    /// Smells after the min-severity filter and max-count truncation,
    /// most severe first.
    pub smells: Vec<CodeSmell>,
    pub smells_by_type: BTreeMap<&'static str, usize>,
    pub smells_by_severity: BTreeMap<&'static str, usize>,
    pub files: Vec<SourceFile>,
    pub top_functions: Vec<FunctionMetric>,
    pub classes: Vec<ClassMetric>,
    pub summary: String,
}

impl QualityReport {
    pub fn build(
        project: &ProjectAnalysis,
        thresholds: &Thresholds,
        min_severity: Severity,
        max_smells: usize,
        top: usize,
    ) -> Self {
        let all_smells = project.all_smells();
        let all_functions = project.all_functions();
        let total_lines = project.total_lines();

        // The score always sees every smell; the filters below only
        // shape the reported list.
        let score = overall_score(
            &all_smells,
            &all_functions,
            total_lines,
            thresholds.max_complexity,
        );
        let grade = score_to_grade(score);

        let mut smells_by_type: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut smells_by_severity: BTreeMap<&'static str, usize> = BTreeMap::new();
        for smell in &all_smells {
            *smells_by_type.entry(smell.smell_type.as_str()).or_default() += 1;
            *smells_by_severity.entry(smell.severity.as_str()).or_default() += 1;
        }

        let mut smells: Vec<CodeSmell> = all_smells
            .iter()
            .filter(|s| s.severity >= min_severity)
            .cloned()
            .collect();
        smells.sort_by(|a, b| b.severity.cmp(&a.severity).then(a.file.cmp(&b.file)));
        smells.truncate(max_smells);

        let mut top_functions = all_functions;
        top_functions.sort_by(|a, b| b.cyclomatic.cmp(&a.cyclomatic));
        top_functions.truncate(top);

        let files: Vec<SourceFile> = project
            .files
            .iter()
            .map(|f| SourceFile {
                path: f.path.clone(),
                total_lines: f.counts.total,
                code_lines: f.counts.code,
                comment_lines: f.counts.comment,
                blank_lines: f.counts.blank,
                function_count: f.functions.len(),
                class_count: f.classes.len(),
                avg_complexity: f.avg_complexity(),
                max_complexity: f.max_complexity(),
                smell_count: f.smells.len(),
                score: f.score,
            })
            .collect();

        let summary = format!(
            "{} files, {total_lines} lines: {} smells, score {score:.0} ({grade})",
            files.len(),
            all_smells.len(),
        );

        QualityReport {
            files_analyzed: files.len(),
            total_lines,
            score,
            grade,
            total_smells: all_smells.len(),
            smells,
            smells_by_type,
            smells_by_severity,
            files,
            top_functions,
            classes: project.all_classes(),
            summary,
        }
    }
}

pub fn print_report(report: &QualityReport) {
    if report.files_analyzed == 0 {
        println!("No recognized source files found.");
        return;
    }

    let separator = report_helpers::separator(72);

    println!("Code Quality");
    println!("{separator}");
    println!(" Score:    {:.0} ({})", report.score, report.grade);
    println!(" Files:    {}", report.files_analyzed);
    println!(" Lines:    {}", report.total_lines);
    println!(" Smells:   {}", report.total_smells);

    if !report.smells_by_severity.is_empty() {
        println!();
        println!(" By severity:");
        for severity in Severity::ALL.iter().rev() {
            if let Some(count) = report.smells_by_severity.get(severity.as_str()) {
                println!("   {:<10} {count:>5}", severity.as_str());
            }
        }
    }

    if !report.smells.is_empty() {
        println!();
        println!("{separator}");
        for smell in &report.smells {
            println!(
                " [{}] {} {}:{}",
                smell.severity.as_str(),
                smell.smell_type.as_str(),
                smell.file.display(),
                smell.start_line,
            );
            println!("   {} — {}", smell.description, smell.suggestion);
        }
    }

    if !report.top_functions.is_empty() {
        println!();
        println!("{separator}");
        println!(" Most complex functions:");
        for f in &report.top_functions {
            println!(
                "   {:<30} {}:{}  cyclomatic {} ({})",
                f.name,
                f.file.display(),
                f.start_line,
                f.cyclomatic,
                f.rating.as_str(),
            );
        }
    }

    println!();
    println!("{}", report.summary);
}

pub fn print_json(report: &QualityReport) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(report)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
