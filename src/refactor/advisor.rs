//! Mapping from findings to refactoring suggestions.
//!
//! Every table here is an exhaustive `match` over a closed tag set, so
//! adding a smell type or refactoring type is a compile-time-checked
//! exercise rather than a silent runtime gap.

use std::path::PathBuf;

use serde::Serialize;

use crate::complexity::FunctionMetric;
use crate::config::Thresholds;
use crate::smells::{CodeSmell, Severity, SmellType};

/// The closed set of refactoring operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefactoringType {
    ExtractMethod,
    ExtractClass,
    ExtractInterface,
    IntroduceParameterObject,
    ConsolidateDuplicate,
    ReplaceMagicNumber,
    ReplaceConditionalWithPolymorphism,
    DecomposeConditional,
    ReplaceNestedConditional,
    MoveMethod,
    InlineClass,
    RemoveDeadCode,
    Rename,
}

impl RefactoringType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExtractMethod => "extract-method",
            Self::ExtractClass => "extract-class",
            Self::ExtractInterface => "extract-interface",
            Self::IntroduceParameterObject => "introduce-parameter-object",
            Self::ConsolidateDuplicate => "consolidate-duplicate",
            Self::ReplaceMagicNumber => "replace-magic-number",
            Self::ReplaceConditionalWithPolymorphism => "replace-conditional-with-polymorphism",
            Self::DecomposeConditional => "decompose-conditional",
            Self::ReplaceNestedConditional => "replace-nested-conditional",
            Self::MoveMethod => "move-method",
            Self::InlineClass => "inline-class",
            Self::RemoveDeadCode => "remove-dead-code",
            Self::Rename => "rename",
        }
    }

    /// What the change buys, phrased for the report.
    pub fn expected_improvement(self) -> &'static str {
        match self {
            Self::ExtractMethod => "Shorter functions that can be read and tested alone",
            Self::ExtractClass => "Focused classes with a single responsibility",
            Self::ExtractInterface => "Callers decoupled from the implementation",
            Self::IntroduceParameterObject => "One named argument instead of a positional list",
            Self::ConsolidateDuplicate => "A single copy to maintain and fix",
            Self::ReplaceMagicNumber => "Intent readable at the call site",
            Self::ReplaceConditionalWithPolymorphism => "Branching replaced by dispatch",
            Self::DecomposeConditional => "Branch logic split into named pieces",
            Self::ReplaceNestedConditional => "Flat control flow with early returns",
            Self::MoveMethod => "Behavior living next to the data it uses",
            Self::InlineClass => "One less indirection layer",
            Self::RemoveDeadCode => "Less code to read and compile",
            Self::Rename => "Names that say what the code does",
        }
    }
}

/// Implementation effort classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Estimated remediation hours per suggestion.
    pub fn hours(self) -> f64 {
        match self {
            Self::Low => 0.5,
            Self::Medium => 2.0,
            Self::High => 8.0,
        }
    }
}

/// Which refactoring addresses a smell. `None` means no mechanical
/// suggestion exists (message chains need case-by-case judgment).
pub fn refactoring_for(smell: SmellType) -> Option<RefactoringType> {
    match smell {
        SmellType::LongMethod => Some(RefactoringType::ExtractMethod),
        SmellType::LongClass => Some(RefactoringType::ExtractClass),
        SmellType::GodObject => Some(RefactoringType::ExtractClass),
        SmellType::HighComplexity => Some(RefactoringType::DecomposeConditional),
        SmellType::DeepNesting => Some(RefactoringType::ReplaceNestedConditional),
        SmellType::LongParameterList => Some(RefactoringType::IntroduceParameterObject),
        SmellType::DuplicateCode => Some(RefactoringType::ConsolidateDuplicate),
        SmellType::DeadCode => Some(RefactoringType::RemoveDeadCode),
        SmellType::MagicNumber => Some(RefactoringType::ReplaceMagicNumber),
        SmellType::FeatureEnvy => Some(RefactoringType::MoveMethod),
        SmellType::DataClump => Some(RefactoringType::IntroduceParameterObject),
        SmellType::PrimitiveObsession => Some(RefactoringType::IntroduceParameterObject),
        SmellType::SwitchStatement => Some(RefactoringType::ReplaceConditionalWithPolymorphism),
        SmellType::ParallelInheritance => Some(RefactoringType::MoveMethod),
        SmellType::LazyClass => Some(RefactoringType::InlineClass),
        SmellType::SpeculativeGenerality => Some(RefactoringType::RemoveDeadCode),
        SmellType::TemporaryField => Some(RefactoringType::ExtractClass),
        SmellType::MessageChain => None,
        SmellType::MiddleMan => Some(RefactoringType::InlineClass),
        SmellType::InappropriateIntimacy => Some(RefactoringType::MoveMethod),
    }
}

/// Fixed effort class per refactoring type.
pub fn effort_for(refactoring: RefactoringType) -> Effort {
    match refactoring {
        RefactoringType::ExtractClass
        | RefactoringType::ReplaceConditionalWithPolymorphism
        | RefactoringType::ExtractInterface => Effort::High,
        RefactoringType::Rename
        | RefactoringType::ReplaceMagicNumber
        | RefactoringType::RemoveDeadCode => Effort::Low,
        RefactoringType::ExtractMethod
        | RefactoringType::IntroduceParameterObject
        | RefactoringType::ConsolidateDuplicate
        | RefactoringType::DecomposeConditional
        | RefactoringType::ReplaceNestedConditional
        | RefactoringType::MoveMethod
        | RefactoringType::InlineClass => Effort::Medium,
    }
}

/// Priority 1 (highest) to 4, from smell severity.
pub fn priority_for_severity(severity: Severity) -> u8 {
    match severity {
        Severity::Critical => 1,
        Severity::Major => 2,
        Severity::Minor => 3,
        Severity::Info => 4,
    }
}

/// Priority from raw cyclomatic complexity, for suggestions not backed
/// by a smell.
pub fn priority_for_complexity(cyclomatic: usize) -> u8 {
    if cyclomatic > 30 {
        1
    } else if cyclomatic > 20 {
        2
    } else if cyclomatic > 15 {
        3
    } else {
        4
    }
}

/// A concrete, prioritized refactoring suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct RefactoringSuggestion {
    pub refactoring_type: RefactoringType,
    pub priority: u8,
    pub file: PathBuf,
    pub start_line: usize,
    pub end_line: usize,
    pub entity: String,
    pub description: String,
    pub reason: String,
    pub expected_improvement: &'static str,
    pub effort: Effort,
    pub related_smells: Vec<SmellType>,
}

/// Derive suggestions from detected smells plus any over-threshold
/// functions the smells did not cover. One suggestion per
/// `(file, entity, refactoring)` triple; the first (smell-backed)
/// occurrence wins.
pub fn suggest(
    smells: &[CodeSmell],
    functions: &[FunctionMetric],
    thresholds: &Thresholds,
) -> Vec<RefactoringSuggestion> {
    let mut suggestions: Vec<RefactoringSuggestion> = Vec::new();
    let mut seen: Vec<(PathBuf, String, RefactoringType)> = Vec::new();

    for smell in smells {
        let Some(refactoring) = refactoring_for(smell.smell_type) else {
            continue;
        };
        let key = (smell.file.clone(), smell.entity.clone(), refactoring);
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        suggestions.push(RefactoringSuggestion {
            refactoring_type: refactoring,
            priority: priority_for_severity(smell.severity),
            file: smell.file.clone(),
            start_line: smell.start_line,
            end_line: smell.end_line,
            entity: smell.entity.clone(),
            description: format!("Apply {} to '{}'", refactoring.as_str(), smell.entity),
            reason: smell.description.clone(),
            expected_improvement: refactoring.expected_improvement(),
            effort: effort_for(refactoring),
            related_smells: vec![smell.smell_type],
        });
    }

    for function in functions {
        if function.cyclomatic <= thresholds.max_complexity {
            continue;
        }
        let refactoring = RefactoringType::DecomposeConditional;
        let key = (function.file.clone(), function.name.clone(), refactoring);
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        suggestions.push(RefactoringSuggestion {
            refactoring_type: refactoring,
            priority: priority_for_complexity(function.cyclomatic),
            file: function.file.clone(),
            start_line: function.start_line,
            end_line: function.end_line,
            entity: function.name.clone(),
            description: format!(
                "Apply {} to '{}'",
                refactoring.as_str(),
                function.name
            ),
            reason: format!(
                "Function '{}' has cyclomatic complexity {}",
                function.name, function.cyclomatic
            ),
            expected_improvement: refactoring.expected_improvement(),
            effort: effort_for(refactoring),
            related_smells: vec![SmellType::HighComplexity],
        });
    }

    suggestions.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then(a.file.cmp(&b.file))
            .then(a.start_line.cmp(&b.start_line))
    });
    suggestions
}

/// Total estimated remediation hours across suggestions.
pub fn estimated_hours(suggestions: &[RefactoringSuggestion]) -> f64 {
    suggestions.iter().map(|s| s.effort.hours()).sum()
}

#[cfg(test)]
#[path = "advisor_test.rs"]
mod tests;
