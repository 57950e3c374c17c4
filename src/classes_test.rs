use std::path::Path;

use super::*;
use crate::lines::classify_lines;

fn analyze(code: &str, thresholds: &Thresholds) -> Vec<ClassMetric> {
    let lines: Vec<String> = code.lines().map(String::from).collect();
    let kinds = classify_lines(&lines);
    analyze_classes(Path::new("sample.ts"), &lines, &kinds, thresholds)
}

fn class_with_methods(n: usize) -> String {
    let mut code = String::from("class Wide {\n");
    for i in 0..n {
        code.push_str(&format!("  method{i}() {{\n    return {i};\n  }}\n"));
    }
    code.push_str("}\n");
    code
}

#[test]
fn counts_methods_and_properties() {
    let metrics = analyze(
        "class UserService {\n  private users: User[] = [];\n  count = 0;\n\n  find(id) {\n    return this.users[id];\n  }\n\n  add(user) {\n    if (user) {\n      this.users.push(user);\n    }\n  }\n}\n",
        &Thresholds::default(),
    );
    assert_eq!(metrics.len(), 1);
    let m = &metrics[0];
    assert_eq!(m.name, "UserService");
    assert_eq!(m.method_count, 2);
    assert_eq!(m.property_count, 2);
    assert_eq!(m.max_method_complexity, 2);
    assert!((m.avg_method_complexity - 1.5).abs() < 1e-9);
    assert!(!m.is_god_object);
}

#[test]
fn loc_is_line_span() {
    let metrics = analyze("class A {\n  x = 1;\n}\n", &Thresholds::default());
    assert_eq!(metrics[0].start_line, 1);
    assert_eq!(metrics[0].end_line, 3);
    assert_eq!(metrics[0].loc, 3);
}

#[test]
fn statements_inside_methods_are_not_properties() {
    let metrics = analyze(
        "class A {\n  run() {\n    const local = 1;\n    this.x = local;\n  }\n}\n",
        &Thresholds::default(),
    );
    assert_eq!(metrics[0].property_count, 0);
    assert_eq!(metrics[0].method_count, 1);
}

#[test]
fn god_object_requires_exceeding_threshold() {
    let thresholds = Thresholds {
        god_object_methods: 3,
        ..Thresholds::default()
    };

    let at_threshold = analyze(&class_with_methods(3), &thresholds);
    assert!(!at_threshold[0].is_god_object);

    let over_threshold = analyze(&class_with_methods(4), &thresholds);
    assert!(over_threshold[0].is_god_object);
}

#[test]
fn empty_class() {
    let metrics = analyze("class Empty {\n}\n", &Thresholds::default());
    let m = &metrics[0];
    assert_eq!(m.method_count, 0);
    assert_eq!(m.property_count, 0);
    assert_eq!(m.avg_method_complexity, 0.0);
    assert_eq!(m.max_method_complexity, 0);
}

#[test]
fn no_classes_in_plain_module() {
    let metrics = analyze("function f() {\n  return 1;\n}\n", &Thresholds::default());
    assert!(metrics.is_empty());
}

#[test]
fn optional_and_typed_properties() {
    let metrics = analyze(
        "class Config {\n  name?: string;\n  readonly retries: number = 3;\n  static instance = null;\n}\n",
        &Thresholds::default(),
    );
    assert_eq!(metrics[0].property_count, 3);
}
