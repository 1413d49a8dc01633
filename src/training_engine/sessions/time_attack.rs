use tracing::debug;

use crate::training_engine::generator::ProblemGenerator;
use crate::training_engine::models::{ConfigError, Problem, TimeBudget, TrainingResult};
use crate::training_engine::sessions::Training;

/// Countdown session. The engine owns no timer: the driver ticks the
/// remaining time down, credits `increment_millis` back on each correct
/// auto-advance (credit before the next fetch), and stops requesting
/// problems once the clock hits zero.
///
/// The score is the number of problems fully advanced past; the problem
/// still on screen when the clock runs out is presented but not solved.
pub struct TimeTraining {
    generator: Box<dyn ProblemGenerator>,
    budget: TimeBudget,
    presented: u32,
}

impl TimeTraining {
    pub fn new(
        generator: Box<dyn ProblemGenerator>,
        total_time_millis: u64,
        increment_millis: u64,
    ) -> Result<Self, ConfigError> {
        if total_time_millis == 0 {
            return Err(ConfigError::NonPositiveTime(total_time_millis));
        }
        debug!(total_time_millis, increment_millis, "starting time-attack session");
        Ok(TimeTraining {
            generator,
            budget: TimeBudget { total_millis: total_time_millis, increment_millis },
            presented: 0,
        })
    }
}

impl Training for TimeTraining {
    fn next_problem(&mut self) -> Option<Problem> {
        self.presented += 1;
        Some(self.generator.generate())
    }

    fn answer(&mut self, _value: i32) {}

    fn result(&self) -> TrainingResult {
        TrainingResult {
            summary: format!("Solved problems: {}", self.presented.saturating_sub(1)),
        }
    }

    fn auto_advance(&self) -> bool {
        true
    }

    fn time_budget(&self) -> Option<TimeBudget> {
        Some(self.budget)
    }
}
