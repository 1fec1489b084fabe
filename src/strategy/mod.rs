//! Strategy definition: parsing the text format into a [`Strategy`].
//!
//! [`Strategy`]: crate::types::Strategy

pub mod parser;

pub use parser::{parse_game_count, parse_strategy};
