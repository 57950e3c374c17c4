//! Per-function complexity metrics.
//!
//! Cyclomatic complexity counts decision points (branching keywords and
//! short-circuit operators) over the whole function body, including any
//! nested functions. Cognitive complexity weights control structures by
//! the nesting depth in force when they appear, approximating reading
//! difficulty. Nesting depth is raw brace depth. String literals are
//! masked before any counting.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::boundary::{Declaration, find_functions};
use crate::lines::LineKind;
use crate::util::{contains_keyword, count_keyword, count_operator, mask_strings};

/// A–F rating derived from cyclomatic complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    A,
    B,
    C,
    D,
    F,
}

impl Rating {
    pub fn from_cyclomatic(complexity: usize) -> Self {
        match complexity {
            0..=5 => Self::A,
            6..=10 => Self::B,
            11..=20 => Self::C,
            21..=30 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// Complexity metrics for a single function or method.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMetric {
    pub file: PathBuf,
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub loc: usize,
    pub cyclomatic: usize,
    pub cognitive: usize,
    pub max_nesting: usize,
    pub parameters: usize,
    pub returns: usize,
    pub rating: Rating,
}

/// Branching keywords counted for cyclomatic complexity. `else if` is
/// masked out before `if` is counted so the chain `if / else if / else`
/// scores base + 2, never base + 3.
const MULTI_WORD_BRANCHES: &[&str] = &["else if"];
const BRANCH_KEYWORDS: &[&str] = &["if", "for", "while", "case", "catch"];
const SHORT_CIRCUIT_OPERATORS: &[&str] = &["&&", "||", "??"];

/// Collect the masked code lines of a 1-based line range.
fn masked_code_lines(lines: &[String], kinds: &[LineKind], start: usize, end: usize) -> Vec<String> {
    (start..=end.min(lines.len()))
        .filter(|n| kinds.get(n - 1) == Some(&LineKind::Code))
        .map(|n| mask_strings(&lines[n - 1]))
        .collect()
}

/// Count ternary `?` operators: a `?` that is not part of `??`
/// (counted separately), optional chaining `?.`, or an optional-member
/// marker `?:`.
fn count_ternary(line: &str) -> usize {
    let bytes = line.as_bytes();
    let mut count = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'?' {
            continue;
        }
        if i > 0 && bytes[i - 1] == b'?' {
            continue;
        }
        if let Some(&next) = bytes.get(i + 1)
            && matches!(next, b'?' | b'.' | b':')
        {
            continue;
        }
        count += 1;
    }
    count
}

/// Cyclomatic complexity of a body given as masked code lines.
///
/// Starts at 1 (the function itself is one path) and adds 1 per decision
/// point.
pub fn cyclomatic_complexity(body: &[String]) -> usize {
    let mut complexity = 1;

    for line in body {
        let mut masked = line.clone();
        for kw in MULTI_WORD_BRANCHES {
            let n = count_keyword(&masked, kw);
            if n > 0 {
                complexity += n;
                masked = masked.replace(kw, &" ".repeat(kw.len()));
            }
        }
        for kw in BRANCH_KEYWORDS {
            complexity += count_keyword(&masked, kw);
        }
        for op in SHORT_CIRCUIT_OPERATORS {
            complexity += count_operator(line, op);
        }
        complexity += count_ternary(line);
    }

    complexity
}

/// Cognitive complexity of a body given as masked code lines.
///
/// A line-granular nesting counter rises on lines containing `{` and
/// falls (floored at zero) on lines containing `}`. Each qualifying
/// construct on a line contributes independently, weighted by the
/// nesting depth in force before that line's braces apply.
pub fn cognitive_complexity(body: &[String]) -> usize {
    let mut complexity = 0;
    let mut nesting = 0usize;

    for line in body {
        for kw in ["if", "for", "while", "switch"] {
            if contains_keyword(line, kw) {
                complexity += 1 + nesting;
            }
        }
        if contains_keyword(line, "else") {
            complexity += 1;
        }
        if contains_keyword(line, "catch") {
            complexity += 1 + nesting;
        }
        if line.contains("&&") || line.contains("||") {
            complexity += 1;
        }

        if line.contains('{') {
            nesting += 1;
        }
        if line.contains('}') {
            nesting = nesting.saturating_sub(1);
        }
    }

    complexity
}

/// Maximum brace depth reached anywhere in the body. Never negative,
/// regardless of unbalanced closers.
pub fn max_nesting_depth(body: &[String]) -> usize {
    let mut depth = 0usize;
    let mut max = 0;

    for line in body {
        for ch in line.bytes() {
            if ch == b'{' {
                depth += 1;
                max = max.max(depth);
            } else if ch == b'}' {
                depth = depth.saturating_sub(1);
            }
        }
    }

    max
}

/// Count parameters in the signature starting on the declaration line:
/// the text between the first `(` and its matching `)`, split on
/// top-level commas.
pub fn parameter_count(body: &[String]) -> usize {
    let mut signature = String::new();
    let mut depth = 0usize;
    let mut started = false;

    'outer: for line in body {
        for ch in line.chars() {
            match ch {
                '(' => {
                    depth += 1;
                    if !started {
                        started = true;
                        continue;
                    }
                }
                ')' => {
                    if started {
                        depth -= 1;
                        if depth == 0 {
                            break 'outer;
                        }
                    }
                }
                _ => {}
            }
            if started {
                signature.push(ch);
            }
        }
        if started {
            signature.push('\n');
        }
    }

    split_top_level(&signature)
        .iter()
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Split on commas that are not nested inside brackets of any kind.
fn split_top_level(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0isize;

    for ch in s.chars() {
        match ch {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => depth -= 1,
            ',' if depth <= 0 => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    parts.push(current);
    parts
}

/// Count return statements in the body.
pub fn return_count(body: &[String]) -> usize {
    body.iter().map(|l| count_keyword(l, "return")).sum()
}

/// Build the full metric record for one detected declaration.
pub fn measure_function(
    path: &Path,
    lines: &[String],
    kinds: &[LineKind],
    decl: &Declaration,
) -> FunctionMetric {
    let body = masked_code_lines(lines, kinds, decl.start_line, decl.end_line);
    let cyclomatic = cyclomatic_complexity(&body);

    FunctionMetric {
        file: path.to_path_buf(),
        name: decl.name.clone(),
        start_line: decl.start_line,
        end_line: decl.end_line,
        loc: decl.end_line - decl.start_line + 1,
        cyclomatic,
        cognitive: cognitive_complexity(&body),
        max_nesting: max_nesting_depth(&body),
        parameters: parameter_count(&body),
        returns: return_count(&body),
        rating: Rating::from_cyclomatic(cyclomatic),
    }
}

/// Detect and measure every function in a file's lines.
pub fn analyze_functions(path: &Path, lines: &[String], kinds: &[LineKind]) -> Vec<FunctionMetric> {
    find_functions(lines, kinds)
        .iter()
        .map(|decl| measure_function(path, lines, kinds, decl))
        .collect()
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
