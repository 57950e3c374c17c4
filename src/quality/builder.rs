//! Shared per-file analysis.
//!
//! One pass produces everything the quality, smell, and refactoring
//! surfaces need: line counts, function metrics, class metrics, and the
//! smells derived from them. Each file is analyzed independently and the
//! results merged by plain concatenation, so failures degrade coverage
//! rather than aborting the run.

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::classes::{ClassMetric, analyze_classes};
use crate::complexity::FunctionMetric;
use crate::complexity::analyzer::analyze_functions;
use crate::config::Thresholds;
use crate::lines::{LineCounts, classify_lines};
use crate::score::file_score;
use crate::smells::{CodeSmell, class_smells, function_smells, magic_number_smells};
use crate::util::read_source_lines;
use crate::walk::{self, FileFilter};

/// Everything measured for one file.
pub struct FileAnalysis {
    pub path: PathBuf,
    pub counts: LineCounts,
    pub functions: Vec<FunctionMetric>,
    pub classes: Vec<ClassMetric>,
    pub smells: Vec<CodeSmell>,
    /// Additive per-file score (independent of the project density score).
    pub score: f64,
}

impl FileAnalysis {
    pub fn avg_complexity(&self) -> f64 {
        if self.functions.is_empty() {
            return 0.0;
        }
        let total: usize = self.functions.iter().map(|f| f.cyclomatic).sum();
        total as f64 / self.functions.len() as f64
    }

    pub fn max_complexity(&self) -> usize {
        self.functions.iter().map(|f| f.cyclomatic).max().unwrap_or(0)
    }
}

/// Analyze already-read content.
pub fn analyze_content(path: &Path, lines: &[String], thresholds: &Thresholds) -> FileAnalysis {
    let kinds = classify_lines(lines);
    let counts = LineCounts::from_kinds(&kinds);

    let functions = analyze_functions(path, lines, &kinds);
    let classes = analyze_classes(path, lines, &kinds, thresholds);

    let mut smells: Vec<CodeSmell> = Vec::new();
    for function in &functions {
        smells.extend(function_smells(function, thresholds));
    }
    for class in &classes {
        smells.extend(class_smells(class, thresholds));
    }
    smells.extend(magic_number_smells(path, lines, &kinds));

    let avg = if functions.is_empty() {
        0.0
    } else {
        functions.iter().map(|f| f.cyclomatic).sum::<usize>() as f64 / functions.len() as f64
    };
    let score = file_score(smells.len(), avg, counts.code, thresholds.max_complexity);

    FileAnalysis {
        path: path.to_path_buf(),
        counts,
        functions,
        classes,
        smells,
        score,
    }
}

/// Read and analyze one file. Returns `None` for binary files.
pub fn analyze_file(
    path: &Path,
    thresholds: &Thresholds,
) -> Result<Option<FileAnalysis>, Box<dyn Error>> {
    let lines = match read_source_lines(path)? {
        Some(v) => v,
        None => return Ok(None),
    };
    Ok(Some(analyze_content(path, &lines, thresholds)))
}

/// Per-file results for a whole tree.
pub struct ProjectAnalysis {
    pub files: Vec<FileAnalysis>,
}

impl ProjectAnalysis {
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|f| f.counts.total).sum()
    }

    pub fn all_smells(&self) -> Vec<CodeSmell> {
        self.files.iter().flat_map(|f| f.smells.clone()).collect()
    }

    pub fn all_functions(&self) -> Vec<FunctionMetric> {
        self.files.iter().flat_map(|f| f.functions.clone()).collect()
    }

    pub fn all_classes(&self) -> Vec<ClassMetric> {
        self.files.iter().flat_map(|f| f.classes.clone()).collect()
    }
}

/// Walk and analyze every source file under `path`. Unreadable files are
/// skipped with a warning; the analysis never aborts on a single file.
pub fn analyze_project(path: &Path, filter: &FileFilter, thresholds: &Thresholds) -> ProjectAnalysis {
    let mut files = Vec::new();

    for file_path in walk::source_files(path, filter) {
        match analyze_file(&file_path, thresholds) {
            Ok(Some(analysis)) => files.push(analysis),
            Ok(None) => {} // binary, skip
            Err(err) => {
                eprintln!("warning: {}: {err}", file_path.display());
            }
        }
    }

    ProjectAnalysis { files }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
