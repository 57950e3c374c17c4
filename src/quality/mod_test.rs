use std::fs;

use super::*;

#[test]
fn run_on_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    run(dir.path(), false, &[], None, "info", 100, None, 10).unwrap();
}

#[test]
fn run_json_mode() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.ts"),
        "function f(x) {\n  if (x) {\n    return 1;\n  }\n  return 0;\n}\n",
    )
    .unwrap();
    run(dir.path(), true, &[], None, "info", 100, None, 10).unwrap();
}

#[test]
fn run_rejects_unknown_severity() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run(dir.path(), false, &[], None, "fatal", 100, None, 10).is_err());
}

#[test]
fn run_rejects_zero_complexity_override() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run(dir.path(), false, &[], None, "info", 100, Some(0), 10).is_err());
}

#[test]
fn run_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("olfato.toml");
    fs::write(&config, "[thresholds]\nmax_parameters = 2\n").unwrap();
    fs::write(
        dir.path().join("a.ts"),
        "function f(a, b, c) {\n  return a;\n}\n",
    )
    .unwrap();

    run(dir.path(), false, &[], Some(&config), "info", 100, None, 10).unwrap();
}

#[test]
fn run_skips_unreadable_file_content() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bin.ts"), b"function f() {\x00}").unwrap();
    fs::write(dir.path().join("ok.ts"), "function f() {\n  return 1;\n}\n").unwrap();
    run(dir.path(), false, &[], None, "info", 100, None, 10).unwrap();
}
