//! End-to-end tests: strategy text → parsed strategy → seeded simulation.

mod simulation;
mod strategy_text;
