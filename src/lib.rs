//! Static quality analysis for brace-delimited source text.
//!
//! The analyses are text heuristics, not a parser: function and class
//! boundaries come from header patterns plus brace counting, complexity
//! from token counting, duplicates from exact line matching. Each
//! analysis is exposed as plain functions over immutable inputs so
//! callers can consume the structured results directly; the `olf`
//! binary is a thin command surface over the same entry points.

pub mod boundary;
pub mod classes;
pub mod complexity;
pub mod config;
pub mod dups;
pub mod lines;
pub mod quality;
pub mod refactor;
pub mod report_helpers;
pub mod score;
pub mod smells;
pub mod util;
pub mod walk;
