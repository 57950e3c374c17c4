//! Density-based quality scoring.
//!
//! Smells are weighted by severity and normalized per 1000 lines, a
//! complexity density is added for functions over the threshold, and the
//! combined density decays the score logarithmically: a handful of
//! findings in a large tree barely registers, the same findings in a
//! small tree cost real points.

use std::fmt;

use serde::Serialize;

use crate::complexity::FunctionMetric;
use crate::smells::{CodeSmell, Severity};

/// Letter grade for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
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

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn score_to_grade(score: f64) -> Grade {
    if score >= 90.0 {
        Grade::A
    } else if score >= 80.0 {
        Grade::B
    } else if score >= 70.0 {
        Grade::C
    } else if score >= 60.0 {
        Grade::D
    } else {
        Grade::F
    }
}

/// Severity weight used for smell density.
pub fn severity_weight(severity: Severity) -> f64 {
    match severity {
        Severity::Critical => 10.0,
        Severity::Major => 4.0,
        Severity::Minor => 1.0,
        Severity::Info => 0.1,
    }
}

/// Overall project score from aggregated findings.
///
/// Smell weights and over-threshold function counts are normalized per
/// KLOC, summed, and pushed through a logarithmic decay curve. An empty
/// project (zero lines) scores a clean 100.
pub fn overall_score(
    smells: &[CodeSmell],
    functions: &[FunctionMetric],
    total_lines: usize,
    max_complexity: usize,
) -> f64 {
    if total_lines == 0 {
        return 100.0;
    }

    let kloc = total_lines as f64 / 1000.0;
    let smell_density: f64 =
        smells.iter().map(|s| severity_weight(s.severity)).sum::<f64>() / kloc;

    let over_threshold = functions
        .iter()
        .filter(|f| f.cyclomatic > max_complexity)
        .count();
    let complexity_density = over_threshold as f64 / kloc * 5.0;

    let total_density = smell_density + complexity_density;
    if total_density <= 0.0 {
        return 100.0;
    }

    let score = 100.0 - 15.0 * (1.0 + total_density / 10.0).ln();
    score.clamp(0.0, 100.0).round()
}

/// Simpler additive score for a single file, independent of the
/// density formula: flat deductions for smells, excess average
/// complexity, and size beyond 500 code lines.
pub fn file_score(
    smell_count: usize,
    avg_complexity: f64,
    code_lines: usize,
    max_complexity: usize,
) -> f64 {
    let mut score = 100.0 - 5.0 * smell_count as f64;

    let threshold = max_complexity as f64;
    if avg_complexity > threshold {
        score -= 2.0 * (avg_complexity - threshold);
    }
    if code_lines > 500 {
        score -= 2.0 * ((code_lines - 500) / 100) as f64;
    }

    score.clamp(0.0, 100.0).round()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
