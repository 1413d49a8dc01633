//! Core training engine — problem generation, operator encoding, and
//! session state machines.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: operations, problems, requests, results |
//! | `glyphs`    | Fixed 27-glyph pool with Fisher-Yates shuffle and dealing |
//! | `generator` | Simple/Complex problem generators with rejection sampling |
//! | `sessions`  | Simple/Infinite/Time-Attack session variants + dispatch |

pub mod generator;
pub mod glyphs;
pub mod models;
pub mod sessions;

// Re-export the public API surface so callers can use
// `training_engine::build_training` without reaching into sub-modules.
pub use generator::{
    ComplexProblemGenerator, ProblemGenerator, SimpleProblemGenerator, MAX_SAMPLE_ATTEMPTS,
};
pub use glyphs::GLYPH_POOL;
pub use models::{
    ComplexProblem, ConfigError, Operation, OperatorEncoding, Problem, ProblemComplexity,
    SimpleProblem, TimeBudget, TrainingRequest, TrainingResult, TrainingType,
};
pub use sessions::{
    build_training, InfiniteTraining, SimpleTraining, TimeTraining, Training,
};
