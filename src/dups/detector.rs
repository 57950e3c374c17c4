//! Duplicate code detection by pairwise exact matching.
//!
//! ## Algorithm
//!
//! Every pair of files (including a file paired with itself) is compared
//! line by line on trimmed text. An anchor line of at least
//! [`MIN_ANCHOR_CHARS`] characters starts a comparison; a match is
//! extended while subsequent lines stay identical, and recorded when the
//! run reaches the configured minimum length. Within one anchor scan the
//! second index skips past a recorded region, and the diagonal of every
//! recorded block is remembered so later anchors inside it do not
//! re-report sub-runs.
//!
//! Cost is O(files² × lines²) with no hashing; only exact duplicates
//! are found, so the reported similarity is always 100. Callers bound
//! cost through file filters and the minimum block length.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

/// Anchor lines shorter than this never start a comparison; braces and
/// other one-token lines would match everywhere.
const MIN_ANCHOR_CHARS: usize = 10;

/// Lines of a block quoted in the report snippet.
const SNIPPET_LINES: usize = 5;

/// Characters kept of a snippet.
const SNIPPET_MAX_CHARS: usize = 240;

/// A file reduced to trimmed lines, ready for comparison.
pub struct SourceLines {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl SourceLines {
    pub fn new(path: PathBuf, raw_lines: &[String]) -> Self {
        SourceLines {
            path,
            lines: raw_lines.iter().map(|l| l.trim().to_string()).collect(),
        }
    }
}

/// One end of a duplicate pair, with 1-based inclusive line numbers.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateLocation {
    pub file: PathBuf,
    pub start_line: usize,
    pub end_line: usize,
}

/// An identical run of lines appearing in two locations.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateBlock {
    pub first: DuplicateLocation,
    pub second: DuplicateLocation,
    pub line_count: usize,
    pub token_count: usize,
    /// Always 100: only exact matches are detected.
    pub similarity: u8,
    pub snippet: String,
}

/// Compare two files (possibly the same file twice) and append every
/// maximal duplicate run of at least `min_lines` lines.
fn compare_pair(
    first: &SourceLines,
    second: &SourceLines,
    same_file: bool,
    min_lines: usize,
    blocks: &mut Vec<DuplicateBlock>,
) {
    let lines1 = &first.lines;
    let lines2 = &second.lines;
    let mut covered: HashSet<(usize, usize)> = HashSet::new();

    for i in 0..lines1.len() {
        if lines1[i].len() < MIN_ANCHOR_CHARS {
            continue;
        }

        let mut j = if same_file { i + min_lines } else { 0 };
        while j < lines2.len() {
            if lines1[i] != lines2[j] || covered.contains(&(i, j)) {
                j += 1;
                continue;
            }

            let mut len = 1;
            while i + len < lines1.len()
                && j + len < lines2.len()
                && lines1[i + len] == lines2[j + len]
            {
                len += 1;
            }

            if len >= min_lines {
                for k in 0..len {
                    covered.insert((i + k, j + k));
                }
                blocks.push(build_block(first, second, i, j, len));
                j += len;
            } else {
                j += 1;
            }
        }
    }
}

fn build_block(
    first: &SourceLines,
    second: &SourceLines,
    i: usize,
    j: usize,
    len: usize,
) -> DuplicateBlock {
    let matched = &first.lines[i..i + len];
    let token_count = matched.iter().map(|l| l.split_whitespace().count()).sum();

    let mut snippet: String = matched
        .iter()
        .take(SNIPPET_LINES)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    if snippet.chars().count() > SNIPPET_MAX_CHARS {
        snippet = snippet.chars().take(SNIPPET_MAX_CHARS).collect();
    }

    DuplicateBlock {
        first: DuplicateLocation {
            file: first.path.clone(),
            start_line: i + 1,
            end_line: i + len,
        },
        second: DuplicateLocation {
            file: second.path.clone(),
            start_line: j + 1,
            end_line: j + len,
        },
        line_count: len,
        token_count,
        similarity: 100,
        snippet,
    }
}

/// Detect duplicate blocks across all files.
///
/// `min_lines` must be validated (>= 1) by the caller before analysis
/// starts.
pub fn detect_duplicates(files: &[SourceLines], min_lines: usize) -> Vec<DuplicateBlock> {
    let mut blocks = Vec::new();

    for a in 0..files.len() {
        for b in a..files.len() {
            compare_pair(&files[a], &files[b], a == b, min_lines, &mut blocks);
        }
    }

    // Largest duplicates first
    blocks.sort_by(|x, y| y.line_count.cmp(&x.line_count));
    blocks
}

#[cfg(test)]
#[path = "detector_test.rs"]
mod tests;
