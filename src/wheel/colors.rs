//! Red/black classification of wheel pockets.

use serde::Serialize;
use std::fmt;

use crate::types::Pocket;

/// Red numbers on a roulette wheel.
pub const RED_NUMBERS: [i64; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

/// Black numbers on a roulette wheel.
pub const BLACK_NUMBERS: [i64; 18] = [2, 4, 6, 8, 10, 11, 13, 15, 17, 20, 22, 24, 26, 28, 29, 31, 33, 35];

/// Pocket color. Both zero pockets are green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Red,
    Black,
    Green,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
            Color::Green => write!(f, "green"),
        }
    }
}

pub fn is_red(value: i64) -> bool {
    RED_NUMBERS.contains(&value)
}

pub fn is_black(value: i64) -> bool {
    BLACK_NUMBERS.contains(&value)
}

/// Color of a pocket, judged on its collapsed settlement value.
pub fn color_of(pocket: Pocket) -> Color {
    let value = pocket.value();
    if is_red(value) {
        Color::Red
    } else if is_black(value) {
        Color::Black
    } else {
        Color::Green
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
