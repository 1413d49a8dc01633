use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::training_engine::glyphs::GlyphPool;

// ---------------------------------------------------------------------------
// Arithmetic primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    /// Canonical order; encoding assignment and legend rows follow it.
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ];

    /// Canonical display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition       => "+",
            Operation::Subtraction    => "-",
            Operation::Multiplication => "x",
        }
    }

    /// Apply the operator to a pair of operands.
    pub fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Operation::Addition       => lhs + rhs,
            Operation::Subtraction    => lhs - rhs,
            Operation::Multiplication => lhs * rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Operator encoding
// ---------------------------------------------------------------------------

/// Substitute-symbol mapping applied to operators to obscure their identity.
///
/// Empty means "no encoding": display falls back to canonical symbols.
/// Populated, it assigns exactly one distinct pool glyph to each operation,
/// drawn without replacement from a freshly shuffled [`GlyphPool`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorEncoding {
    pairs: Vec<(Operation, char)>,
}

impl OperatorEncoding {
    /// The empty mapping: canonical symbols everywhere.
    pub fn disabled() -> Self {
        OperatorEncoding { pairs: Vec::new() }
    }

    /// A fresh bijection from every operation onto a distinct pool glyph.
    pub fn shuffled<R: rand::Rng>(rng: &mut R) -> Self {
        let mut pool = GlyphPool::new_shuffled(rng);
        let pairs = Operation::ALL.iter().map(|&op| (op, pool.deal())).collect();
        OperatorEncoding { pairs }
    }

    pub fn new<R: rand::Rng>(enabled: bool, rng: &mut R) -> Self {
        if enabled {
            Self::shuffled(rng)
        } else {
            Self::disabled()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The glyph assigned to `op`, if encoding is active.
    pub fn glyph(&self, op: Operation) -> Option<char> {
        self.pairs.iter().find(|(o, _)| *o == op).map(|&(_, g)| g)
    }

    /// The symbol to render for `op`: its glyph, or the canonical symbol
    /// when the mapping is empty.
    pub fn display_symbol(&self, op: Operation) -> String {
        match self.glyph(op) {
            Some(glyph) => glyph.to_string(),
            None        => op.symbol().to_string(),
        }
    }

    /// Mapping rows in canonical operation order.
    pub fn iter(&self) -> impl Iterator<Item = (Operation, char)> + '_ {
        self.pairs.iter().copied()
    }
}

// ---------------------------------------------------------------------------
// Problems
// ---------------------------------------------------------------------------

/// Single-operation problem: two positive single-digit operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleProblem {
    pub first: i32,
    pub second: i32,
    pub operation: Operation,
    pub result: i32,
    pub text: String,
    pub encoding: OperatorEncoding,
}

impl SimpleProblem {
    pub fn new(first: i32, second: i32, operation: Operation, encoding: OperatorEncoding) -> Self {
        let result = operation.apply(first, second);
        let text = format!("{} {} {} = ", first, encoding.display_symbol(operation), second);
        SimpleProblem { first, second, operation, result, text, encoding }
    }
}

/// Two-operation problem, evaluated strictly left-to-right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexProblem {
    pub first: i32,
    pub second: i32,
    pub third: i32,
    pub first_operation: Operation,
    pub second_operation: Operation,
    pub result: i32,
    pub text: String,
    pub encoding: OperatorEncoding,
}

impl ComplexProblem {
    pub fn new(
        first: i32, second: i32, third: i32,
        first_operation: Operation, second_operation: Operation,
        encoding: OperatorEncoding,
    ) -> Self {
        let result = second_operation.apply(first_operation.apply(first, second), third);
        let text = format!(
            "{} {} {} {} {} = ",
            first,
            encoding.display_symbol(first_operation),
            second,
            encoding.display_symbol(second_operation),
            third,
        );
        ComplexProblem {
            first, second, third,
            first_operation, second_operation,
            result, text, encoding,
        }
    }
}

/// One arithmetic question instance. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Problem {
    Simple(SimpleProblem),
    Complex(ComplexProblem),
}

impl Problem {
    /// Display text, operands and operator symbols pre-formatted
    /// (e.g. `"3 + 5 = "`).
    pub fn text(&self) -> &str {
        match self {
            Problem::Simple(p)  => &p.text,
            Problem::Complex(p) => &p.text,
        }
    }

    /// The correct integer answer.
    pub fn result(&self) -> i32 {
        match self {
            Problem::Simple(p)  => p.result,
            Problem::Complex(p) => p.result,
        }
    }

    /// The operator encoding this problem was generated under.
    pub fn encoding(&self) -> &OperatorEncoding {
        match self {
            Problem::Simple(p)  => &p.encoding,
            Problem::Complex(p) => &p.encoding,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Problem::Complex(_))
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemComplexity {
    Simple,
    Complex,
}

impl fmt::Display for ProblemComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemComplexity::Simple  => write!(f, "Simple"),
            ProblemComplexity::Complex => write!(f, "Complex"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingType {
    /// Fixed number of problems with an explicit submit step per answer.
    Simple { count: u32 },
    /// Never runs dry; ends only by external cancellation.
    Infinite,
    /// Driver-owned countdown; each solve credits time back.
    TimeAttack { total_time_millis: u64, increment_millis: u64 },
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingType::Simple { .. }     => write!(f, "Simple"),
            TrainingType::Infinite          => write!(f, "Infinite"),
            TrainingType::TimeAttack { .. } => write!(f, "Time Attack"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub complexity: ProblemComplexity,
    pub encoding_enabled: bool,
    /// Complex mode only: whether both operator slots may draw the same
    /// operator. Ignored for simple problems.
    pub allow_duplicate_operators: bool,
    pub training_type: TrainingType,
    /// `Some` makes the whole session deterministic, useful for tests
    /// and reproducible drills.
    pub rng_seed: Option<u64>,
}

impl TrainingRequest {
    /// Minimal constructor. Defaults: simple problems, no encoding, no
    /// duplicate operators, entropy seed.
    pub fn new(training_type: TrainingType) -> Self {
        TrainingRequest {
            complexity: ProblemComplexity::Simple,
            encoding_enabled: false,
            allow_duplicate_operators: false,
            training_type,
            rng_seed: None,
        }
    }
}

/// Countdown budget for clock-driven sessions. The engine never ticks the
/// clock itself; the driver decrements and credits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBudget {
    pub total_millis: u64,
    pub increment_millis: u64,
}

// ---------------------------------------------------------------------------
// Session output
// ---------------------------------------------------------------------------

/// Human-readable outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub summary: String,
}

impl fmt::Display for TrainingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Rejected at session construction; a session is never built from a
/// configuration that cannot run to a meaningful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("problem count must be positive (got {0})")]
    NonPositiveCount(u32),
    #[error("total time must be positive (got {0} ms)")]
    NonPositiveTime(u64),
}
