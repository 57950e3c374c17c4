//! Threshold-driven smell detection.
//!
//! Function and class smells are derived from already-computed metric
//! records. Magic-number detection is the one text-level rule: it scans
//! code lines directly for bare numeric literals.

use std::path::Path;

use crate::classes::ClassMetric;
use crate::complexity::FunctionMetric;
use crate::config::Thresholds;
use crate::lines::LineKind;
use crate::util::{contains_keyword, is_word_char, mask_strings};

use super::types::{CodeSmell, Severity, SmellType};

/// Literal values too common to ever be "magic".
const ALLOWED_NUMBERS: &[u64] = &[0, 1, 2, 10, 100, 1000];

/// Keywords marking a line as a declaration, where a literal is a
/// deliberate named value rather than a buried constant.
const DECLARATION_KEYWORDS: &[&str] = &["const", "let", "var", "enum"];

fn smell(
    smell_type: SmellType,
    severity: Severity,
    file: &Path,
    start_line: usize,
    end_line: usize,
    entity: &str,
    entity_kind: &'static str,
    description: String,
    value: f64,
    threshold: Option<f64>,
) -> CodeSmell {
    CodeSmell {
        smell_type,
        severity,
        file: file.to_path_buf(),
        start_line,
        end_line,
        entity: entity.to_string(),
        entity_kind,
        description,
        value,
        threshold,
        suggestion: smell_type.suggestion(),
    }
}

/// Evaluate one function's metrics against the thresholds.
pub fn function_smells(f: &FunctionMetric, thresholds: &Thresholds) -> Vec<CodeSmell> {
    let mut smells = Vec::new();

    if f.loc > thresholds.max_method_lines {
        let severity = if f.loc > 100 {
            Severity::Major
        } else {
            Severity::Minor
        };
        smells.push(smell(
            SmellType::LongMethod,
            severity,
            &f.file,
            f.start_line,
            f.end_line,
            &f.name,
            "function",
            format!("Function '{}' has {} lines", f.name, f.loc),
            f.loc as f64,
            Some(thresholds.max_method_lines as f64),
        ));
    }

    if f.cyclomatic > thresholds.max_complexity {
        let severity = if f.cyclomatic > 20 {
            Severity::Critical
        } else {
            Severity::Major
        };
        smells.push(smell(
            SmellType::HighComplexity,
            severity,
            &f.file,
            f.start_line,
            f.end_line,
            &f.name,
            "function",
            format!(
                "Function '{}' has cyclomatic complexity {}",
                f.name, f.cyclomatic
            ),
            f.cyclomatic as f64,
            Some(thresholds.max_complexity as f64),
        ));
    }

    if f.max_nesting > thresholds.max_nesting_depth {
        smells.push(smell(
            SmellType::DeepNesting,
            Severity::Minor,
            &f.file,
            f.start_line,
            f.end_line,
            &f.name,
            "function",
            format!(
                "Function '{}' nests {} levels deep",
                f.name, f.max_nesting
            ),
            f.max_nesting as f64,
            Some(thresholds.max_nesting_depth as f64),
        ));
    }

    if f.parameters > thresholds.max_parameters {
        smells.push(smell(
            SmellType::LongParameterList,
            Severity::Minor,
            &f.file,
            f.start_line,
            f.end_line,
            &f.name,
            "function",
            format!(
                "Function '{}' takes {} parameters",
                f.name, f.parameters
            ),
            f.parameters as f64,
            Some(thresholds.max_parameters as f64),
        ));
    }

    smells
}

/// Evaluate one class's metrics against the thresholds.
pub fn class_smells(c: &ClassMetric, thresholds: &Thresholds) -> Vec<CodeSmell> {
    let mut smells = Vec::new();

    if c.is_god_object {
        smells.push(smell(
            SmellType::GodObject,
            Severity::Major,
            &c.file,
            c.start_line,
            c.end_line,
            &c.name,
            "class",
            format!("Class '{}' has {} methods", c.name, c.method_count),
            c.method_count as f64,
            Some(thresholds.god_object_methods as f64),
        ));
    }

    if c.loc > thresholds.max_class_lines {
        smells.push(smell(
            SmellType::LongClass,
            Severity::Minor,
            &c.file,
            c.start_line,
            c.end_line,
            &c.name,
            "class",
            format!("Class '{}' has {} lines", c.name, c.loc),
            c.loc as f64,
            Some(thresholds.max_class_lines as f64),
        ));
    }

    smells
}

/// Scan code lines for bare numeric literals of two or more digits.
///
/// Lines holding a declaration keyword or a line comment are skipped
/// entirely; the values 0, 1, 2, 10, 100, and 1000 are never flagged.
pub fn magic_number_smells(path: &Path, lines: &[String], kinds: &[LineKind]) -> Vec<CodeSmell> {
    let mut smells = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if kinds.get(idx) != Some(&LineKind::Code) {
            continue;
        }
        if line.contains("//") {
            continue;
        }
        let masked = mask_strings(line);
        if DECLARATION_KEYWORDS
            .iter()
            .any(|kw| contains_keyword(&masked, kw))
        {
            continue;
        }

        for literal in digit_runs(&masked) {
            let Ok(value) = literal.parse::<u64>() else {
                continue;
            };
            if ALLOWED_NUMBERS.contains(&value) {
                continue;
            }
            smells.push(smell(
                SmellType::MagicNumber,
                Severity::Info,
                path,
                idx + 1,
                idx + 1,
                literal,
                "literal",
                format!("Magic number {value}"),
                value as f64,
                None,
            ));
        }
    }

    smells
}

/// Extract maximal digit runs of length >= 2 that are not part of an
/// identifier.
fn digit_runs(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let preceded_by_ident = start > 0
                && (is_word_char(bytes[start - 1]) && !bytes[start - 1].is_ascii_digit());
            let followed_by_ident =
                i < bytes.len() && is_word_char(bytes[i]) && !bytes[i].is_ascii_digit();
            if i - start >= 2 && !preceded_by_ident && !followed_by_ident {
                runs.push(&line[start..i]);
            }
        } else {
            i += 1;
        }
    }

    runs
}

#[cfg(test)]
#[path = "detector_test.rs"]
mod tests;
