pub mod detector;
pub(crate) mod report;

use std::error::Error;
use std::path::Path;

use crate::util::read_source_lines;
use crate::walk::{self, FileFilter};
pub use detector::{DuplicateBlock, DuplicateLocation, SourceLines, detect_duplicates};
use report::{DuplicationReport, display_limit, print_detailed, print_json, print_summary};

/// Read a file into trimmed comparison lines. Returns `None` for
/// binary files.
fn load_file(path: &Path) -> Result<Option<SourceLines>, Box<dyn Error>> {
    let raw = match read_source_lines(path)? {
        Some(v) => v,
        None => return Ok(None),
    };
    Ok(Some(SourceLines::new(path.to_path_buf(), &raw)))
}

/// Collect comparison files under `path`, skipping unreadable ones with
/// a warning.
pub(crate) fn collect_files(path: &Path, filter: &FileFilter) -> Vec<SourceLines> {
    let mut files = Vec::new();
    for file_path in walk::source_files(path, filter) {
        match load_file(&file_path) {
            Ok(Some(sl)) => files.push(sl),
            Ok(None) => {} // binary, skip
            Err(err) => {
                eprintln!("warning: {}: {err}", file_path.display());
            }
        }
    }
    files
}

pub fn run(
    path: &Path,
    json: bool,
    filters: &[String],
    min_lines: usize,
    show_report: bool,
    show_all: bool,
) -> Result<(), Box<dyn Error>> {
    if min_lines == 0 {
        return Err("--min-lines must be at least 1".into());
    }

    let filter = FileFilter::new(filters)?;
    let files = collect_files(path, &filter);
    let blocks = detect_duplicates(&files, min_lines);
    let report = DuplicationReport::build(&files, blocks);

    let limit = display_limit(report.blocks.len(), show_all);
    if json {
        print_json(&report, limit)?;
    } else if show_report {
        print_detailed(&report, limit);
    } else {
        print_summary(&report);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
