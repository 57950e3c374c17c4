use std::path::PathBuf;

use super::*;
use crate::complexity::Rating;

fn smell(smell_type: SmellType, severity: Severity, entity: &str) -> CodeSmell {
    CodeSmell {
        smell_type,
        severity,
        file: PathBuf::from("a.ts"),
        start_line: 1,
        end_line: 20,
        entity: entity.to_string(),
        entity_kind: "function",
        description: format!("'{entity}' triggered {}", smell_type.as_str()),
        value: 1.0,
        threshold: None,
        suggestion: smell_type.suggestion(),
    }
}

fn function(name: &str, cyclomatic: usize) -> FunctionMetric {
    FunctionMetric {
        file: PathBuf::from("a.ts"),
        name: name.to_string(),
        start_line: 1,
        end_line: 20,
        loc: 20,
        cyclomatic,
        cognitive: cyclomatic,
        max_nesting: 1,
        parameters: 0,
        returns: 1,
        rating: Rating::from_cyclomatic(cyclomatic),
    }
}

#[test]
fn smell_mapping_table() {
    assert_eq!(
        refactoring_for(SmellType::LongMethod),
        Some(RefactoringType::ExtractMethod)
    );
    assert_eq!(
        refactoring_for(SmellType::GodObject),
        Some(RefactoringType::ExtractClass)
    );
    assert_eq!(
        refactoring_for(SmellType::LongClass),
        Some(RefactoringType::ExtractClass)
    );
    assert_eq!(
        refactoring_for(SmellType::LongParameterList),
        Some(RefactoringType::IntroduceParameterObject)
    );
    assert_eq!(
        refactoring_for(SmellType::DataClump),
        Some(RefactoringType::IntroduceParameterObject)
    );
    assert_eq!(
        refactoring_for(SmellType::DuplicateCode),
        Some(RefactoringType::ConsolidateDuplicate)
    );
    assert_eq!(
        refactoring_for(SmellType::MagicNumber),
        Some(RefactoringType::ReplaceMagicNumber)
    );
    assert_eq!(refactoring_for(SmellType::MessageChain), None);
}

#[test]
fn effort_classes() {
    assert_eq!(effort_for(RefactoringType::ExtractClass), Effort::High);
    assert_eq!(
        effort_for(RefactoringType::ReplaceConditionalWithPolymorphism),
        Effort::High
    );
    assert_eq!(effort_for(RefactoringType::ExtractInterface), Effort::High);
    assert_eq!(effort_for(RefactoringType::Rename), Effort::Low);
    assert_eq!(effort_for(RefactoringType::ReplaceMagicNumber), Effort::Low);
    assert_eq!(effort_for(RefactoringType::RemoveDeadCode), Effort::Low);
    assert_eq!(effort_for(RefactoringType::ExtractMethod), Effort::Medium);
    assert_eq!(effort_for(RefactoringType::MoveMethod), Effort::Medium);
}

#[test]
fn priorities_from_severity() {
    assert_eq!(priority_for_severity(Severity::Critical), 1);
    assert_eq!(priority_for_severity(Severity::Major), 2);
    assert_eq!(priority_for_severity(Severity::Minor), 3);
    assert_eq!(priority_for_severity(Severity::Info), 4);
}

#[test]
fn priorities_from_complexity() {
    assert_eq!(priority_for_complexity(31), 1);
    assert_eq!(priority_for_complexity(21), 2);
    assert_eq!(priority_for_complexity(16), 3);
    assert_eq!(priority_for_complexity(15), 4);
}

#[test]
fn smells_become_suggestions() {
    let smells = vec![
        smell(SmellType::LongMethod, Severity::Major, "handler"),
        smell(SmellType::MagicNumber, Severity::Info, "42"),
    ];
    let suggestions = suggest(&smells, &[], &Thresholds::default());

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].refactoring_type, RefactoringType::ExtractMethod);
    assert_eq!(suggestions[0].priority, 2);
    assert_eq!(suggestions[0].related_smells, vec![SmellType::LongMethod]);
    assert_eq!(suggestions[1].priority, 4);
}

#[test]
fn unmapped_smells_produce_nothing() {
    let smells = vec![smell(SmellType::MessageChain, Severity::Minor, "chain")];
    assert!(suggest(&smells, &[], &Thresholds::default()).is_empty());
}

#[test]
fn over_threshold_function_without_smell_gets_suggestion() {
    let suggestions = suggest(&[], &[function("gnarly", 17)], &Thresholds::default());
    assert_eq!(suggestions.len(), 1);
    assert_eq!(
        suggestions[0].refactoring_type,
        RefactoringType::DecomposeConditional
    );
    assert_eq!(suggestions[0].priority, 3);
    assert_eq!(suggestions[0].entity, "gnarly");
}

#[test]
fn smell_backed_function_not_suggested_twice() {
    let smells = vec![smell(SmellType::HighComplexity, Severity::Major, "gnarly")];
    let suggestions = suggest(&smells, &[function("gnarly", 17)], &Thresholds::default());

    assert_eq!(suggestions.len(), 1);
    // smell-backed entry wins, carrying the severity-derived priority
    assert_eq!(suggestions[0].priority, 2);
}

#[test]
fn function_at_threshold_not_suggested() {
    assert!(suggest(&[], &[function("fine", 10)], &Thresholds::default()).is_empty());
}

#[test]
fn sorted_by_priority() {
    let smells = vec![
        smell(SmellType::MagicNumber, Severity::Info, "42"),
        smell(SmellType::HighComplexity, Severity::Critical, "worst"),
        smell(SmellType::DeepNesting, Severity::Minor, "nested"),
    ];
    let suggestions = suggest(&smells, &[], &Thresholds::default());
    let priorities: Vec<u8> = suggestions.iter().map(|s| s.priority).collect();
    assert_eq!(priorities, vec![1, 3, 4]);
}

#[test]
fn estimated_hours_by_effort() {
    let smells = vec![
        smell(SmellType::GodObject, Severity::Major, "Blob"), // extract-class, high: 8h
        smell(SmellType::LongMethod, Severity::Major, "f"),   // extract-method, medium: 2h
        smell(SmellType::MagicNumber, Severity::Info, "42"),  // replace-magic-number, low: 0.5h
    ];
    let suggestions = suggest(&smells, &[], &Thresholds::default());
    assert!((estimated_hours(&suggestions) - 10.5).abs() < 1e-9);
}
