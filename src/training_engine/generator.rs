use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, trace};

use crate::training_engine::models::{
    ComplexProblem, Operation, OperatorEncoding, Problem, SimpleProblem,
};

/// Upper bound on operand rejection sampling. The operand space is dense
/// enough that a positive result lands within a handful of draws; hitting
/// this bound means the sampler itself is broken.
pub const MAX_SAMPLE_ATTEMPTS: usize = 10_000;

/// Produces one [`Problem`] per call under the constraints fixed at
/// construction. Sessions hold one generator behind `Box<dyn ProblemGenerator>`.
pub trait ProblemGenerator {
    fn generate(&mut self) -> Problem;

    /// The operator encoding every problem from this generator carries.
    /// Empty when encoding is off.
    fn encoding(&self) -> &OperatorEncoding;
}

// ---------------------------------------------------------------------------
// Simple problems: one operation, two single-digit operands
// ---------------------------------------------------------------------------

pub struct SimpleProblemGenerator {
    rng: StdRng,
    encoding: OperatorEncoding,
}

impl SimpleProblemGenerator {
    pub fn new(encoding_enabled: bool) -> Self {
        Self::with_rng(StdRng::from_entropy(), encoding_enabled)
    }

    pub fn with_seed(seed: u64, encoding_enabled: bool) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), encoding_enabled)
    }

    fn with_rng(mut rng: StdRng, encoding_enabled: bool) -> Self {
        let encoding = OperatorEncoding::new(encoding_enabled, &mut rng);
        SimpleProblemGenerator { rng, encoding }
    }
}

impl ProblemGenerator for SimpleProblemGenerator {
    fn generate(&mut self) -> Problem {
        let operation = match self.rng.gen_range(0..3) {
            0 => Operation::Addition,
            1 => Operation::Subtraction,
            _ => Operation::Multiplication,
        };

        // Subtraction draws its operands so the result is always positive:
        // first from [2,9], second strictly below first.
        let (first, second) = if operation == Operation::Subtraction {
            let first = self.rng.gen_range(2..=9);
            (first, self.rng.gen_range(1..first))
        } else {
            (self.rng.gen_range(1..=9), self.rng.gen_range(1..=9))
        };

        Problem::Simple(SimpleProblem::new(first, second, operation, self.encoding.clone()))
    }

    fn encoding(&self) -> &OperatorEncoding {
        &self.encoding
    }
}

// ---------------------------------------------------------------------------
// Complex problems: two operations, rejection-sampled operand triple
// ---------------------------------------------------------------------------

pub struct ComplexProblemGenerator {
    rng: StdRng,
    encoding: OperatorEncoding,
    allow_duplicate_operators: bool,
}

impl ComplexProblemGenerator {
    pub fn new(encoding_enabled: bool, allow_duplicate_operators: bool) -> Self {
        Self::with_rng(StdRng::from_entropy(), encoding_enabled, allow_duplicate_operators)
    }

    pub fn with_seed(seed: u64, encoding_enabled: bool, allow_duplicate_operators: bool) -> Self {
        Self::with_rng(
            StdRng::seed_from_u64(seed),
            encoding_enabled,
            allow_duplicate_operators,
        )
    }

    fn with_rng(mut rng: StdRng, encoding_enabled: bool, allow_duplicate_operators: bool) -> Self {
        let encoding = OperatorEncoding::new(encoding_enabled, &mut rng);
        ComplexProblemGenerator { rng, encoding, allow_duplicate_operators }
    }

    fn pick_operation(&mut self) -> Operation {
        // Multiplication is excluded from two-step problems.
        if self.rng.gen_bool(0.5) {
            Operation::Addition
        } else {
            Operation::Subtraction
        }
    }
}

impl ProblemGenerator for ComplexProblemGenerator {
    fn generate(&mut self) -> Problem {
        let first_operation = self.pick_operation();
        let second_operation = if self.allow_duplicate_operators {
            self.pick_operation()
        } else {
            match first_operation {
                Operation::Addition => Operation::Subtraction,
                _                   => Operation::Addition,
            }
        };

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let first = self.rng.gen_range(1..=9);
            let second = self.rng.gen_range(1..=9);
            let third = self.rng.gen_range(1..=9);

            let result = second_operation.apply(first_operation.apply(first, second), third);
            if result > 0 {
                return Problem::Complex(ComplexProblem::new(
                    first, second, third,
                    first_operation, second_operation,
                    self.encoding.clone(),
                ));
            }
            trace!(first, second, third, result, "rejected non-positive draw");
        }

        // Every operator pair over [1,9]^3 admits positive results, so the
        // loop above cannot run dry unless the sampler is broken.
        error!(
            attempts = MAX_SAMPLE_ATTEMPTS,
            ?first_operation,
            ?second_operation,
            "operand sampling exhausted"
        );
        panic!("operand sampling exhausted after {} attempts", MAX_SAMPLE_ATTEMPTS);
    }

    fn encoding(&self) -> &OperatorEncoding {
        &self.encoding
    }
}
