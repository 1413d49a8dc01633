//! # math_drill_gen
//!
//! A fully offline arithmetic training engine.
//!
//! This library generates single-step and two-step mental-arithmetic
//! problems under configurable constraints and runs them through one of
//! three session modes. It is the core behind a numeric-keypad trainer:
//! the UI collects keystrokes and owns all timing; this crate owns the
//! problems, the rules, and the score.
//!
//! ## How it works
//!
//! 1. Create a [`TrainingRequest`] with a complexity, a training type, an
//!    optional RNG seed, and the encoding/duplicate-operator switches.
//! 2. Call [`build_training`]: the request is validated, a problem
//!    generator is constructed (with a fresh operator encoding if
//!    enabled), and the matching session variant wraps it.
//! 3. Drive the session: [`Training::next_problem`] yields problems,
//!    [`Training::answer`] records submissions where the mode keeps a
//!    log, and [`Training::result`] produces the final summary.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same problem sequence every time, useful for tests and reproducible
//!   drills.
//! - **Solvable by construction**: every emitted problem's stored result
//!   is the exact left-to-right evaluation of its displayed expression,
//!   and is always ≥ 1. Subtraction operands are drawn so the difference
//!   is positive; two-step problems rejection-sample their operand triple
//!   until the running total stays above zero.
//! - **Operator encoding**: an optional per-generator bijection from each
//!   operator onto a distinct glyph from a fixed 27-glyph pool, so the
//!   player has to decode the operator through the legend first.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{build_training, Training, TrainingRequest, TrainingType};
//!
//! let mut request = TrainingRequest::new(TrainingType::Simple { count: 3 });
//! request.rng_seed = Some(42);
//!
//! let mut training = build_training(request).expect("valid configuration");
//! while let Some(problem) = training.next_problem() {
//!     // A real driver reads the keypad; here we just answer correctly.
//!     training.answer(problem.result());
//! }
//! println!("{}", training.result());
//! ```

pub mod training_engine;
pub mod ui_adapter;

// Convenience re-exports so callers can use `math_drill_gen::build_training`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    build_training, ComplexProblem, ComplexProblemGenerator, ConfigError, InfiniteTraining,
    Operation, OperatorEncoding, Problem, ProblemComplexity, ProblemGenerator, SimpleProblem,
    SimpleProblemGenerator, SimpleTraining, TimeBudget, TimeTraining, Training, TrainingRequest,
    TrainingResult, TrainingType, GLYPH_POOL, MAX_SAMPLE_ATTEMPTS,
};
