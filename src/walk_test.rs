use std::fs;
use std::path::Path;

use super::*;

fn no_filter() -> FileFilter {
    FileFilter::new(&[]).unwrap()
}

#[test]
fn source_file_extensions() {
    assert!(is_source_file(Path::new("app.ts")));
    assert!(is_source_file(Path::new("app.tsx")));
    assert!(is_source_file(Path::new("app.js")));
    assert!(is_source_file(Path::new("app.jsx")));
    assert!(!is_source_file(Path::new("app.rs")));
    assert!(!is_source_file(Path::new("app.css")));
    assert!(!is_source_file(Path::new("README.md")));
}

#[test]
fn declaration_files_excluded() {
    assert!(!is_source_file(Path::new("types.d.ts")));
    assert!(is_source_file(Path::new("types.ts")));
}

#[test]
fn test_and_spec_files_excluded() {
    assert!(!is_source_file(Path::new("parser.test.ts")));
    assert!(!is_source_file(Path::new("parser.spec.ts")));
    assert!(!is_source_file(Path::new("parser.test.jsx")));
    assert!(is_source_file(Path::new("parser.ts")));
}

#[test]
fn no_extension_excluded() {
    assert!(!is_source_file(Path::new("Makefile")));
}

#[test]
fn walks_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.ts"), "const b = 1;\n").unwrap();
    fs::write(dir.path().join("a.ts"), "const a = 1;\n").unwrap();
    fs::write(dir.path().join("notes.md"), "# notes\n").unwrap();

    let files = source_files(dir.path(), &no_filter());
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("a.ts"));
    assert!(files[1].ends_with("b.ts"));
}

#[test]
fn skips_excluded_directories() {
    let dir = tempfile::tempdir().unwrap();
    for excluded in ["node_modules", "dist", "coverage", ".next"] {
        let sub = dir.path().join(excluded);
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("inner.ts"), "const x = 1;\n").unwrap();
    }
    fs::write(dir.path().join("app.ts"), "const x = 1;\n").unwrap();

    let files = source_files(dir.path(), &no_filter());
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("app.ts"));
}

#[test]
fn skips_test_files_during_walk() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("app.ts"), "const x = 1;\n").unwrap();
    fs::write(dir.path().join("app.test.ts"), "const x = 1;\n").unwrap();
    fs::write(dir.path().join("app.d.ts"), "declare const x: number;\n").unwrap();

    let files = source_files(dir.path(), &no_filter());
    assert_eq!(files.len(), 1);
}

#[test]
fn fragment_filter_matches_substring() {
    let filter = FileFilter::new(&["services".to_string()]).unwrap();
    assert!(filter.matches(Path::new("src/services/auth.ts")));
    assert!(!filter.matches(Path::new("src/models/user.ts")));
}

#[test]
fn glob_filter_matches() {
    let filter = FileFilter::new(&["**/models/*.ts".to_string()]).unwrap();
    assert!(filter.matches(Path::new("src/models/user.ts")));
    assert!(!filter.matches(Path::new("src/services/auth.ts")));
}

#[test]
fn empty_filter_matches_everything() {
    let filter = no_filter();
    assert!(filter.is_empty());
    assert!(filter.matches(Path::new("anything/at/all.ts")));
}

#[test]
fn invalid_glob_is_an_error() {
    assert!(FileFilter::new(&["src/[".to_string()]).is_err());
}
