//! Core engine: replays a strategy against the wheel and reports the result.

pub mod report;
pub mod simulator;

pub use report::SimulationReport;
pub use simulator::{settle, Simulator};
