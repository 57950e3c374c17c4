use std::path::PathBuf;

use super::*;
use crate::refactor::advisor::RefactoringType;
use crate::smells::SmellType;

fn suggestion(priority: u8, effort: Effort) -> RefactoringSuggestion {
    RefactoringSuggestion {
        refactoring_type: RefactoringType::ExtractMethod,
        priority,
        file: PathBuf::from("a.ts"),
        start_line: 1,
        end_line: 30,
        entity: "handler".to_string(),
        description: "Apply extract-method to 'handler'".to_string(),
        reason: "Function 'handler' has 120 lines".to_string(),
        expected_improvement: RefactoringType::ExtractMethod.expected_improvement(),
        effort,
        related_smells: vec![SmellType::LongMethod],
    }
}

#[test]
fn build_totals_and_truncation() {
    let suggestions = vec![
        suggestion(1, Effort::High),
        suggestion(2, Effort::Medium),
        suggestion(3, Effort::Low),
    ];
    let report = RefactoringReport::build(suggestions, 5, 2);

    assert_eq!(report.total_suggestions, 3);
    assert_eq!(report.suggestions.len(), 2);
    assert!((report.estimated_hours - 10.5).abs() < 1e-9);
    assert!(report.summary.contains("3 suggestions"));
}

#[test]
fn build_empty() {
    let report = RefactoringReport::build(Vec::new(), 0, 20);
    assert_eq!(report.total_suggestions, 0);
    assert_eq!(report.estimated_hours, 0.0);
    print_report(&report);
}

#[test]
fn print_modes_do_not_panic() {
    let report = RefactoringReport::build(vec![suggestion(1, Effort::Medium)], 1, 20);
    print_report(&report);
    print_json(&report).unwrap();
}
