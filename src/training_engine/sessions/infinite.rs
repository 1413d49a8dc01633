use crate::training_engine::generator::ProblemGenerator;
use crate::training_engine::models::{Problem, TimeBudget, TrainingResult};
use crate::training_engine::sessions::Training;

/// Endless session: a stateless pass-through over its generator. Ends only
/// when the driver cancels it, so the result summary is empty.
pub struct InfiniteTraining {
    generator: Box<dyn ProblemGenerator>,
}

impl InfiniteTraining {
    pub fn new(generator: Box<dyn ProblemGenerator>) -> Self {
        InfiniteTraining { generator }
    }
}

impl Training for InfiniteTraining {
    fn next_problem(&mut self) -> Option<Problem> {
        Some(self.generator.generate())
    }

    fn answer(&mut self, _value: i32) {}

    fn result(&self) -> TrainingResult {
        TrainingResult { summary: String::new() }
    }

    fn auto_advance(&self) -> bool {
        true
    }

    fn time_budget(&self) -> Option<TimeBudget> {
        None
    }
}
