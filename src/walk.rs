use std::error::Error;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    ".git",
    "coverage",
    ".next",
    ".cache",
];

/// File extensions selected for analysis.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Check whether a file is analyzable source: a selected extension,
/// not a TypeScript declaration file, not a test/spec file.
pub fn is_source_file(path: &Path) -> bool {
    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };

    let Some(dot) = file_name.rfind('.') else {
        return false;
    };
    let ext = &file_name[dot + 1..];
    let base = &file_name[..dot];

    if !SOURCE_EXTENSIONS.contains(&ext) {
        return false;
    }
    if base.ends_with(".d") {
        return false; // .d.ts declaration files
    }
    !(base.ends_with(".test") || base.ends_with(".spec"))
}

/// User-supplied scope restriction: bare fragments match as path
/// substrings, patterns with glob metacharacters match as globs.
pub struct FileFilter {
    fragments: Vec<String>,
    globs: Option<GlobSet>,
}

impl FileFilter {
    /// Compile a filter from CLI `--filter` values. An empty list matches
    /// every file.
    pub fn new(patterns: &[String]) -> Result<Self, Box<dyn Error>> {
        let mut fragments = Vec::new();
        let mut builder = GlobSetBuilder::new();
        let mut has_globs = false;

        for pattern in patterns {
            if pattern.contains(['*', '?', '[']) {
                builder.add(Glob::new(pattern)?);
                has_globs = true;
            } else {
                fragments.push(pattern.clone());
            }
        }

        let globs = if has_globs {
            Some(builder.build()?)
        } else {
            None
        };

        Ok(FileFilter { fragments, globs })
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.globs.is_none()
    }

    pub fn matches(&self, path: &Path) -> bool {
        if self.is_empty() {
            return true;
        }
        let text = path.to_string_lossy();
        if self.fragments.iter().any(|f| text.contains(f.as_str())) {
            return true;
        }
        self.globs.as_ref().is_some_and(|g| g.is_match(path))
    }
}

/// Build a directory walker that respects `.gitignore` and skips the
/// fixed exclusion list.
fn walker(path: &Path) -> ignore::Walk {
    WalkBuilder::new(path)
        .hidden(false)
        .follow_links(false)
        .filter_entry(|entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && let Some(name) = entry.file_name().to_str()
                && EXCLUDED_DIRS.contains(&name)
            {
                return false;
            }
            true
        })
        .build()
}

/// Collect analyzable source files under `path`, in sorted order for
/// deterministic output. Unreadable directory entries are skipped.
pub fn source_files(path: &Path, filter: &FileFilter) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in walker(path) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let file_path = entry.path();
        if is_source_file(file_path) && filter.matches(file_path) {
            files.push(file_path.to_path_buf());
        }
    }

    files.sort();
    files
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
