//! Roulette betting-strategy simulator.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod strategy;
pub mod types;
pub mod wheel;
