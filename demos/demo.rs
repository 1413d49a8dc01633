//! Full demo of the three training modes.
//!
//! Run with: `cargo run --example demo`
//!
//! This example plays the role of the presentation layer: it drives each
//! session variant the way a keypad UI would, with fixed seeds so the
//! output is deterministic and reproducible.
//!
//! 1. **Counted session** — ten simple problems answered through the
//!    explicit submit step (one deliberate mistake), then the scored log.
//! 2. **Infinite session** — a short auto-advance burst over encoded
//!    complex problems, with the operator legend a client would render.
//! 3. **Time attack** — a simulated 100 ms tick loop: the driver owns the
//!    clock, decrements it while "solving", credits the increment back on
//!    each solve *before* fetching the next problem, and stops the moment
//!    the budget is gone.

use math_drill_gen::{
    build_training, ui_adapter, ProblemComplexity, Training, TrainingRequest, TrainingType,
};
use tracing_subscriber::EnvFilter;

const TICK_MILLIS: u64 = 100;

fn banner(title: &str) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}", title);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

fn counted_session() {
    banner("Counted session — 10 simple problems, explicit submit");

    let mut request = TrainingRequest::new(TrainingType::Simple { count: 10 });
    request.rng_seed = Some(42);
    let mut training = build_training(request).expect("valid configuration");

    let mut index = 0;
    while let Some(problem) = training.next_problem() {
        index += 1;
        // Miss the seventh problem on purpose so the log shows both marks.
        let answer = if index == 7 { problem.result() + 1 } else { problem.result() };
        println!("  {}{}", problem.text(), answer);
        training.answer(answer);
    }

    println!();
    println!("  Finished:");
    for line in training.result().summary.lines() {
        println!("    {}", line);
    }
    println!();
}

fn infinite_session() {
    banner("Infinite session — encoded complex problems, auto-advance");

    let mut request = TrainingRequest::new(TrainingType::Infinite);
    request.complexity = ProblemComplexity::Complex;
    request.encoding_enabled = true;
    request.rng_seed = Some(7);
    let mut training = build_training(request).expect("valid configuration");

    for _ in 0..5 {
        let problem = training.next_problem().expect("infinite sessions never run dry");
        // Auto-advance: the driver matches input against the result itself.
        println!("  {}{}", problem.text(), problem.result());
        println!("    legend: {}", ui_adapter::operator_legend(&problem));
    }
    println!("  (session ends only when the player exits)");
    println!();
}

fn time_attack_session() {
    banner("Time attack — 3 s budget, 300 ms increment, simulated clock");

    let mut request = TrainingRequest::new(TrainingType::TimeAttack {
        total_time_millis: 3_000,
        increment_millis: 300,
    });
    request.rng_seed = Some(99);
    let mut training = build_training(request).expect("valid configuration");

    let budget = training.time_budget().expect("time attack exposes its budget");
    let mut remaining = budget.total_millis as i64;

    // Pretend every problem takes eight ticks of thinking.
    let solve_ticks = 8;

    while remaining > 0 {
        let problem = training.next_problem().expect("clock-driven sessions never run dry");
        remaining -= (solve_ticks * TICK_MILLIS) as i64;
        if remaining <= 0 {
            // Clock ran out mid-problem: presented but not solved.
            println!("  {}…  ⏰", problem.text());
            break;
        }
        // Solved: credit the increment before fetching the next problem.
        remaining += budget.increment_millis as i64;
        println!("  {}{}  ({} ms left)", problem.text(), problem.result(), remaining);
    }

    println!();
    println!("  Finished: {}", training.result());
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    counted_session();
    infinite_session();
    time_attack_session();
}
