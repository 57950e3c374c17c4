//! Analysis thresholds.
//!
//! A single immutable record passed by reference into every detector.
//! Defaults can be overridden from an `olfato.toml` file and by CLI
//! flags; values are validated once at the boundary so the analyzers
//! never have to re-check them.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Threshold set controlling smell detection and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Function lines before a long-method smell.
    pub max_method_lines: usize,
    /// Class lines before a long-class smell.
    pub max_class_lines: usize,
    /// Cyclomatic complexity before a high-complexity smell.
    pub max_complexity: usize,
    /// Block nesting depth before a deep-nesting smell.
    pub max_nesting_depth: usize,
    /// Parameter count before a long-parameter-list smell.
    pub max_parameters: usize,
    /// Method count above which a class is a god object.
    pub god_object_methods: usize,
    /// Minimum identical run length for a duplicate block.
    pub min_duplicate_lines: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            max_method_lines: 50,
            max_class_lines: 300,
            max_complexity: 10,
            max_nesting_depth: 4,
            max_parameters: 5,
            god_object_methods: 20,
            min_duplicate_lines: 10,
        }
    }
}

/// Top-level config file shape: a `[thresholds]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    thresholds: Thresholds,
}

impl Thresholds {
    /// Load thresholds from a TOML config file, or defaults when `path`
    /// is `None`. Values are validated before being returned.
    pub fn load(path: Option<&Path>) -> Result<Thresholds, Box<dyn Error>> {
        let thresholds = match path {
            Some(p) => {
                let text = fs::read_to_string(p)
                    .map_err(|e| format!("cannot read config {}: {e}", p.display()))?;
                let config: ConfigFile = toml::from_str(&text)
                    .map_err(|e| format!("invalid config {}: {e}", p.display()))?;
                config.thresholds
            }
            None => Thresholds::default(),
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Reject zero thresholds; every limit must be at least 1.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        let fields = [
            (self.max_method_lines, "max_method_lines"),
            (self.max_class_lines, "max_class_lines"),
            (self.max_complexity, "max_complexity"),
            (self.max_nesting_depth, "max_nesting_depth"),
            (self.max_parameters, "max_parameters"),
            (self.god_object_methods, "god_object_methods"),
            (self.min_duplicate_lines, "min_duplicate_lines"),
        ];
        for (value, name) in fields {
            if value == 0 {
                return Err(format!("{name} must be at least 1").into());
            }
        }
        Ok(())
    }

    /// Return a copy with the complexity threshold replaced.
    pub fn with_max_complexity(self, max_complexity: usize) -> Thresholds {
        Thresholds {
            max_complexity,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
