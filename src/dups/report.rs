//! Report formatters for duplicate detection.

use serde::Serialize;

use super::detector::{DuplicateBlock, SourceLines};
use crate::report_helpers;

/// Duplicate groups shown by default; `--show-all` lifts the cap.
const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// Project-level duplication result.
#[derive(Debug, Serialize)]
pub struct DuplicationReport {
    pub files_analyzed: usize,
    pub total_lines: usize,
    pub duplicated_lines: usize,
    pub largest_block: usize,
    pub blocks: Vec<DuplicateBlock>,
    pub summary: String,
}

impl DuplicationReport {
    pub fn build(files: &[SourceLines], blocks: Vec<DuplicateBlock>) -> Self {
        let total_lines: usize = files.iter().map(|f| f.lines.len()).sum();
        let duplicated_lines: usize = blocks.iter().map(|b| b.line_count).sum();
        let largest_block = blocks.iter().map(|b| b.line_count).max().unwrap_or(0);

        let percent = if total_lines == 0 {
            0.0
        } else {
            duplicated_lines as f64 / total_lines as f64 * 100.0
        };
        let summary = format!(
            "{} duplicate blocks across {} files ({duplicated_lines} lines, {percent:.1}% of {total_lines})",
            blocks.len(),
            files.len(),
        );

        DuplicationReport {
            files_analyzed: files.len(),
            total_lines,
            duplicated_lines,
            largest_block,
            blocks,
            summary,
        }
    }
}

pub fn display_limit(total: usize, show_all: bool) -> usize {
    if show_all {
        total
    } else {
        total.min(DEFAULT_DISPLAY_LIMIT)
    }
}

pub fn print_summary(report: &DuplicationReport) {
    if report.files_analyzed == 0 {
        println!("No recognized source files found.");
        return;
    }

    println!("Duplicate Code");
    println!("{}", report_helpers::separator(60));
    println!(" Files analyzed:    {:>8}", report.files_analyzed);
    println!(" Total lines:       {:>8}", report.total_lines);
    println!(" Duplicate blocks:  {:>8}", report.blocks.len());
    println!(" Duplicated lines:  {:>8}", report.duplicated_lines);
    println!(" Largest block:     {:>8}", report.largest_block);
}

pub fn print_detailed(report: &DuplicationReport, limit: usize) {
    print_summary(report);
    if report.blocks.is_empty() {
        return;
    }

    println!();
    for (n, block) in report.blocks[..limit].iter().enumerate() {
        println!(
            "#{} {} lines ({} tokens, {}% similar)",
            n + 1,
            block.line_count,
            block.token_count,
            block.similarity
        );
        println!(
            "   {}:{}-{}",
            block.first.file.display(),
            block.first.start_line,
            block.first.end_line
        );
        println!(
            "   {}:{}-{}",
            block.second.file.display(),
            block.second.start_line,
            block.second.end_line
        );
        for line in block.snippet.lines() {
            println!("   | {line}");
        }
        println!();
    }

    if limit < report.blocks.len() {
        println!(
            "... and {} more (use --show-all)",
            report.blocks.len() - limit
        );
    }
}

pub fn print_json(report: &DuplicationReport, limit: usize) -> Result<(), Box<dyn std::error::Error>> {
    #[derive(Serialize)]
    struct Truncated<'a> {
        files_analyzed: usize,
        total_lines: usize,
        duplicated_lines: usize,
        largest_block: usize,
        blocks: &'a [DuplicateBlock],
        summary: &'a str,
    }

    report_helpers::print_json_stdout(&Truncated {
        files_analyzed: report.files_analyzed,
        total_lines: report.total_lines,
        duplicated_lines: report.duplicated_lines,
        largest_block: report.largest_block,
        blocks: &report.blocks[..limit],
        summary: &report.summary,
    })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
