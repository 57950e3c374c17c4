use std::path::PathBuf;

use serde::Serialize;

/// Smell severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Critical => "critical",
        }
    }

    /// Parse a CLI severity name.
    pub fn parse(s: &str) -> Option<Severity> {
        match s {
            "info" => Some(Self::Info),
            "minor" => Some(Self::Minor),
            "major" => Some(Self::Major),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    pub const ALL: [Severity; 4] = [Self::Info, Self::Minor, Self::Major, Self::Critical];
}

/// The closed set of smell types. Only a subset is detected by the
/// analyzers; the rest are representable because the refactoring advisor
/// maps every member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmellType {
    LongMethod,
    LongClass,
    GodObject,
    HighComplexity,
    DeepNesting,
    LongParameterList,
    DuplicateCode,
    DeadCode,
    MagicNumber,
    FeatureEnvy,
    DataClump,
    PrimitiveObsession,
    SwitchStatement,
    ParallelInheritance,
    LazyClass,
    SpeculativeGenerality,
    TemporaryField,
    MessageChain,
    MiddleMan,
    InappropriateIntimacy,
}

impl SmellType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongMethod => "long-method",
            Self::LongClass => "long-class",
            Self::GodObject => "god-object",
            Self::HighComplexity => "high-complexity",
            Self::DeepNesting => "deep-nesting",
            Self::LongParameterList => "long-parameter-list",
            Self::DuplicateCode => "duplicate-code",
            Self::DeadCode => "dead-code",
            Self::MagicNumber => "magic-number",
            Self::FeatureEnvy => "feature-envy",
            Self::DataClump => "data-clump",
            Self::PrimitiveObsession => "primitive-obsession",
            Self::SwitchStatement => "switch-statement",
            Self::ParallelInheritance => "parallel-inheritance",
            Self::LazyClass => "lazy-class",
            Self::SpeculativeGenerality => "speculative-generality",
            Self::TemporaryField => "temporary-field",
            Self::MessageChain => "message-chain",
            Self::MiddleMan => "middle-man",
            Self::InappropriateIntimacy => "inappropriate-intimacy",
        }
    }

    /// Fixed remediation hint attached to every emitted smell.
    pub fn suggestion(self) -> &'static str {
        match self {
            Self::LongMethod => "Break the function into smaller, focused functions",
            Self::LongClass => "Extract cohesive parts into new classes",
            Self::GodObject => "Split responsibilities into separate classes",
            Self::HighComplexity => "Simplify branching or split the function",
            Self::DeepNesting => "Use guard clauses or extract nested blocks",
            Self::LongParameterList => "Group related parameters into an object",
            Self::DuplicateCode => "Extract the repeated block into a shared function",
            Self::DeadCode => "Delete the unreachable code",
            Self::MagicNumber => "Replace the literal with a named constant",
            Self::FeatureEnvy => "Move the method next to the data it uses",
            Self::DataClump => "Introduce a parameter object",
            Self::PrimitiveObsession => "Wrap the primitive in a domain type",
            Self::SwitchStatement => "Replace the switch with polymorphism",
            Self::ParallelInheritance => "Merge the parallel hierarchies",
            Self::LazyClass => "Inline the class into its caller",
            Self::SpeculativeGenerality => "Remove the unused flexibility",
            Self::TemporaryField => "Extract the transient state into its own class",
            Self::MessageChain => "Hide the delegation behind a method",
            Self::MiddleMan => "Remove the delegating layer",
            Self::InappropriateIntimacy => "Reduce knowledge of the other class's internals",
        }
    }
}

/// A detected code smell with its location and the measurement that
/// triggered it.
#[derive(Debug, Clone, Serialize)]
pub struct CodeSmell {
    pub smell_type: SmellType,
    pub severity: Severity,
    pub file: PathBuf,
    pub start_line: usize,
    pub end_line: usize,
    pub entity: String,
    pub entity_kind: &'static str,
    pub description: String,
    /// The observed metric value.
    pub value: f64,
    /// The violated threshold, when the smell is metric-based.
    pub threshold: Option<f64>,
    pub suggestion: &'static str,
}
