/// CLI argument definitions for the `olf` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "olf", version, about = "Code quality analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by all analysis commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Directory to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Restrict to paths matching a fragment or glob (repeatable)
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Threshold config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// All available analysis subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Full quality report: smells, per-file metrics, score and grade
    #[command(long_about = "\
Full quality report for a source tree.

Detects code smells against configurable thresholds, computes per-file
line counts and complexity, and aggregates everything into a single
0-100 score with a letter grade. The score weights smells by severity,
normalizes per 1000 lines, and decays logarithmically, so one finding
in a large tree costs less than the same finding in a small one.

Examples:
  olf quality                          # analyze current directory
  olf quality src/ --json              # machine-readable output
  olf quality --min-severity major     # hide minor findings
  olf quality --filter services        # only paths containing 'services'")]
    Quality {
        #[command(flatten)]
        common: CommonArgs,

        /// Lowest severity to report: info, minor, major, critical
        #[arg(long, default_value = "info")]
        min_severity: String,

        /// Maximum number of smells to report (default: 100)
        #[arg(long, default_value = "100")]
        max_smells: usize,

        /// Override the cyclomatic complexity threshold
        #[arg(long)]
        max_complexity: Option<usize>,

        /// Number of most complex functions to list (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Analyze cyclomatic and cognitive complexity per function
    Complexity {
        #[command(flatten)]
        common: CommonArgs,

        /// Override the cyclomatic complexity threshold
        #[arg(long)]
        max_complexity: Option<usize>,

        /// Show only the top N files (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,

        /// Show per-function breakdown
        #[arg(long)]
        per_function: bool,

        /// Sort by metric: total, max, or avg (default: total)
        #[arg(long, default_value = "total", value_parser = ["total", "max", "avg"])]
        sort_by: String,
    },

    /// Detect duplicate code across files
    #[command(long_about = "\
Detect duplicate code across files.

Compares every pair of files line by line on trimmed text and reports
identical runs of at least --min-lines lines. Only exact duplicates are
found; the cost is quadratic in files and lines, so use --filter to
bound large trees.

Examples:
  olf dups                             # current directory
  olf dups --min-lines 6               # shorter blocks count too
  olf dups --report                    # show locations and snippets")]
    Dups {
        #[command(flatten)]
        common: CommonArgs,

        /// Minimum lines for a duplicate block (default: 10)
        #[arg(long, default_value = "10")]
        min_lines: usize,

        /// Show detailed report with duplicate locations
        #[arg(short, long)]
        report: bool,

        /// Show all duplicate blocks (default: top 20)
        #[arg(long)]
        show_all: bool,
    },

    /// Suggest refactorings for detected smells, with effort estimates
    Refactor {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of suggestions to show (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },
}
