//! Structural metrics per class.
//!
//! Uses the boundary extractor to locate class bodies, then counts
//! method-shaped and property-shaped declarations inside them and
//! aggregates per-method cyclomatic complexity.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::boundary::{find_classes, find_methods_in_range};
use crate::complexity::analyzer::cyclomatic_complexity;
use crate::config::Thresholds;
use crate::lines::LineKind;
use crate::util::mask_strings;

/// Structural metrics for a single class.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMetric {
    pub file: PathBuf,
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub loc: usize,
    pub method_count: usize,
    pub property_count: usize,
    pub avg_method_complexity: f64,
    pub max_method_complexity: usize,
    pub is_god_object: bool,
}

/// Modifiers that may precede a property declaration.
const PROPERTY_MODIFIERS: &[&str] = &[
    "public", "private", "protected", "static", "readonly", "declare", "abstract",
];

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn take_identifier(s: &str) -> (&str, &str) {
    let end = s.find(|c| !is_ident_char(c)).unwrap_or(s.len());
    (&s[..end], &s[end..])
}

/// `[modifiers] name: type;` or `[modifiers] name = value;`
fn is_property_declaration(masked: &str) -> bool {
    let mut s = masked.trim();
    loop {
        let (word, rest) = take_identifier(s);
        if !word.is_empty() && PROPERTY_MODIFIERS.contains(&word) {
            s = rest.trim_start();
        } else {
            break;
        }
    }

    let (name, rest) = take_identifier(s);
    if name.is_empty() {
        return false;
    }
    let rest = rest.strip_prefix(['?', '!']).unwrap_or(rest).trim_start();
    (rest.starts_with(':') || rest.starts_with('=')) && masked.trim_end().ends_with(';')
}

/// Masked code lines of a 1-based line range.
fn masked_code_lines(lines: &[String], kinds: &[LineKind], start: usize, end: usize) -> Vec<String> {
    (start..=end.min(lines.len()))
        .filter(|n| kinds.get(n - 1) == Some(&LineKind::Code))
        .map(|n| mask_strings(&lines[n - 1]))
        .collect()
}

/// Detect and measure every class in a file's lines.
pub fn analyze_classes(
    path: &Path,
    lines: &[String],
    kinds: &[LineKind],
    thresholds: &Thresholds,
) -> Vec<ClassMetric> {
    find_classes(lines, kinds)
        .iter()
        .map(|class| {
            let methods = find_methods_in_range(lines, kinds, class.start_line, class.end_line);

            let complexities: Vec<usize> = methods
                .iter()
                .map(|m| {
                    let body = masked_code_lines(lines, kinds, m.start_line, m.end_line);
                    cyclomatic_complexity(&body)
                })
                .collect();

            let max_method_complexity = complexities.iter().copied().max().unwrap_or(0);
            let avg_method_complexity = if complexities.is_empty() {
                0.0
            } else {
                complexities.iter().sum::<usize>() as f64 / complexities.len() as f64
            };

            let method_lines: Vec<(usize, usize)> =
                methods.iter().map(|m| (m.start_line, m.end_line)).collect();
            let property_count = count_properties(lines, kinds, class, &method_lines);

            ClassMetric {
                file: path.to_path_buf(),
                name: class.name.clone(),
                start_line: class.start_line,
                end_line: class.end_line,
                loc: class.end_line - class.start_line + 1,
                method_count: methods.len(),
                property_count,
                avg_method_complexity,
                max_method_complexity,
                is_god_object: methods.len() > thresholds.god_object_methods,
            }
        })
        .collect()
}

/// Count property-shaped declarations in the class body, skipping lines
/// inside method bodies so local statements are not mistaken for fields.
fn count_properties(
    lines: &[String],
    kinds: &[LineKind],
    class: &crate::boundary::Declaration,
    method_lines: &[(usize, usize)],
) -> usize {
    let mut count = 0;
    for idx in class.start_line..class.end_line.min(lines.len()) {
        let line_no = idx + 1;
        if kinds.get(idx) != Some(&LineKind::Code) {
            continue;
        }
        if method_lines
            .iter()
            .any(|&(start, end)| line_no >= start && line_no <= end)
        {
            continue;
        }
        if is_property_declaration(&mask_strings(lines[idx].trim())) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
#[path = "classes_test.rs"]
mod tests;
