use std::time::Instant;

use tracing::debug;

use crate::training_engine::generator::ProblemGenerator;
use crate::training_engine::models::{ConfigError, Problem, TimeBudget, TrainingResult};
use crate::training_engine::sessions::Training;

/// Counted session: exactly `count` problems, each answered through an
/// explicit submit step, scored into a per-answer log.
///
/// This is the only variant that records answers; the driver shows an
/// "ok" button instead of auto-advancing on a matching input.
pub struct SimpleTraining {
    generator: Box<dyn ProblemGenerator>,
    count: u32,
    presented: u32,
    current: Option<Problem>,
    log: Vec<(Problem, i32)>,
    started: Instant,
}

impl SimpleTraining {
    pub fn new(generator: Box<dyn ProblemGenerator>, count: u32) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NonPositiveCount(count));
        }
        debug!(count, "starting counted session");
        Ok(SimpleTraining {
            generator,
            count,
            presented: 0,
            current: None,
            log: Vec::with_capacity(count as usize),
            started: Instant::now(),
        })
    }
}

impl Training for SimpleTraining {
    fn next_problem(&mut self) -> Option<Problem> {
        if self.presented >= self.count {
            // Done: no current problem, late answers are dropped.
            self.current = None;
            return None;
        }
        self.presented += 1;
        let problem = self.generator.generate();
        self.current = Some(problem.clone());
        Some(problem)
    }

    fn answer(&mut self, value: i32) {
        if let Some(problem) = &self.current {
            self.log.push((problem.clone(), value));
        }
    }

    fn result(&self) -> TrainingResult {
        let mut summary = format!("{}s", self.started.elapsed().as_secs());
        for (problem, answer) in &self.log {
            let mark = if *answer == problem.result() { "✓" } else { "✗" };
            summary.push_str(&format!("\n{}{} {}", problem.text(), answer, mark));
        }
        TrainingResult { summary }
    }

    fn auto_advance(&self) -> bool {
        false
    }

    fn time_budget(&self) -> Option<TimeBudget> {
        None
    }
}
