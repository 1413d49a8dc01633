//! JSON payloads for keypad-style clients.
//!
//! The engine has no wire protocol of its own; a presentation layer that
//! talks JSON (web view, remote keypad) renders from these payloads:
//! the problem line, the operator legend shown above the keypad, and the
//! final summary screen.

use serde_json::{json, Value};

use crate::training_engine::models::{Operation, Problem, TrainingResult};

/// Legend rows mapping each canonical operator symbol to its active glyph.
///
/// Empty when encoding is off. Complex problems never use multiplication,
/// so its row is omitted there; the legend only shows operators the
/// player can meet.
pub fn operator_legend(problem: &Problem) -> Value {
    let rows: Vec<Value> = problem
        .encoding()
        .iter()
        .filter(|&(op, _)| !problem.is_complex() || op != Operation::Multiplication)
        .map(|(op, glyph)| {
            json!({
                "operator": op.symbol(),
                "glyph": glyph.to_string(),
            })
        })
        .collect();
    Value::Array(rows)
}

/// Everything the client needs to render one problem screen.
pub fn problem_state(problem: &Problem) -> Value {
    json!({
        "text": problem.text(),
        "result": problem.result(),
        "legend": operator_legend(problem),
    })
}

/// The finish-screen payload.
pub fn result_state(result: &TrainingResult) -> Value {
    json!({ "summary": result.summary })
}
