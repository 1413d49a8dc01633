//! Training session variants and the request → session dispatch.
//!
//! | Module        | Session |
//! |---------------|---------|
//! | `simple`      | Fixed problem count, explicit submit step, scored log |
//! | `infinite`    | Endless stream, ends only by external cancellation |
//! | `time_attack` | Driver-owned countdown with per-solve time credit |

pub mod infinite;
pub mod simple;
pub mod time_attack;

use tracing::debug;

use crate::training_engine::generator::{
    ComplexProblemGenerator, ProblemGenerator, SimpleProblemGenerator,
};
use crate::training_engine::models::{
    ConfigError, Problem, ProblemComplexity, TimeBudget, TrainingRequest, TrainingResult,
    TrainingType,
};

pub use infinite::InfiniteTraining;
pub use simple::SimpleTraining;
pub use time_attack::TimeTraining;

/// A training session: a sequence of problems plus bookkeeping, ending in
/// a result summary. The engine is synchronous throughout; timing loops
/// and auto-advance delays belong to the driver.
pub trait Training {
    /// The next problem to present, or `None` exactly when the session has
    /// nothing more to offer.
    fn next_problem(&mut self) -> Option<Problem>;

    /// Record a submitted answer for the current problem. A no-op for
    /// sessions without an explicit submit step, and before the first
    /// problem has been presented.
    fn answer(&mut self, value: i32);

    /// Snapshot of the session outcome.
    fn result(&self) -> TrainingResult;

    /// Whether the driver should compare keypad input against the current
    /// result after each keystroke and advance on an exact match.
    fn auto_advance(&self) -> bool;

    /// Countdown budget for clock-driven sessions; `None` for untimed
    /// modes. The driver owns the tick loop: it decrements the remaining
    /// time and, on each correct auto-advance, credits
    /// `increment_millis` back *before* fetching the next problem.
    fn time_budget(&self) -> Option<TimeBudget>;
}

fn build_generator(request: &TrainingRequest) -> Box<dyn ProblemGenerator> {
    match (request.complexity, request.rng_seed) {
        (ProblemComplexity::Simple, Some(seed)) => {
            Box::new(SimpleProblemGenerator::with_seed(seed, request.encoding_enabled))
        }
        (ProblemComplexity::Simple, None) => {
            Box::new(SimpleProblemGenerator::new(request.encoding_enabled))
        }
        (ProblemComplexity::Complex, Some(seed)) => Box::new(ComplexProblemGenerator::with_seed(
            seed,
            request.encoding_enabled,
            request.allow_duplicate_operators,
        )),
        (ProblemComplexity::Complex, None) => Box::new(ComplexProblemGenerator::new(
            request.encoding_enabled,
            request.allow_duplicate_operators,
        )),
    }
}

/// Core dispatch: validates the request and wires a generator into the
/// matching session variant.
pub fn build_training(request: TrainingRequest) -> Result<Box<dyn Training>, ConfigError> {
    debug!(
        complexity = %request.complexity,
        training_type = %request.training_type,
        encoding = request.encoding_enabled,
        "building training session"
    );

    let generator = build_generator(&request);

    match request.training_type {
        TrainingType::Simple { count } => Ok(Box::new(SimpleTraining::new(generator, count)?)),

        TrainingType::Infinite => Ok(Box::new(InfiniteTraining::new(generator))),

        TrainingType::TimeAttack { total_time_millis, increment_millis } => Ok(Box::new(
            TimeTraining::new(generator, total_time_millis, increment_millis)?,
        )),
    }
}
