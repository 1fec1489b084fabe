//! Shared types for the roulette simulator.
//!
//! These types form the data model used across all modules: the parsed
//! strategy, its bets, and the pockets the wheel produces. They carry no
//! behaviour beyond small helpers so that the parser, wheel, and engine
//! modules can depend on them without depending on each other.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Bets
// ---------------------------------------------------------------------------

/// The kind of wager a bet places.
///
/// Matching is exact and case-sensitive: `"red"` is [`BetKind::Red`] but
/// `"Red"` is `Other("Red")`. Unrecognized kinds are kept so the strategy
/// round-trips, and they never win.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BetKind {
    Number,
    Even,
    Odd,
    Red,
    Black,
    Other(String),
}

impl BetKind {
    /// Classify the verbatim type text of a `bet:` line.
    pub fn from_text(text: &str) -> Self {
        match text {
            "number" => BetKind::Number,
            "even" => BetKind::Even,
            "odd" => BetKind::Odd,
            "red" => BetKind::Red,
            "black" => BetKind::Black,
            other => BetKind::Other(other.to_string()),
        }
    }

    /// Whether this is one of the five kinds the engine settles.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, BetKind::Other(_))
    }
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetKind::Number => write!(f, "number"),
            BetKind::Even => write!(f, "even"),
            BetKind::Odd => write!(f, "odd"),
            BetKind::Red => write!(f, "red"),
            BetKind::Black => write!(f, "black"),
            BetKind::Other(text) => write!(f, "{text}"),
        }
    }
}

impl Serialize for BetKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single wager, replayed every round of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bet {
    pub kind: BetKind,
    /// Target pocket for `number` bets. Ignored by every other kind.
    pub value: i64,
    pub amount: Decimal,
}

impl Bet {
    pub fn new(kind: BetKind, value: i64, amount: Decimal) -> Self {
        Self { kind, value, amount }
    }
}

/// Renders in the same shape as the `bet:` line it came from.
impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.kind, self.value, self.amount)
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// A bankroll plus the ordered list of bets placed on every spin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Strategy {
    pub initial_bankroll: Decimal,
    /// Declaration order is settlement order.
    pub bets: Vec<Bet>,
}

impl Strategy {
    pub fn new(initial_bankroll: Decimal) -> Self {
        Self {
            initial_bankroll,
            bets: Vec::new(),
        }
    }

    pub fn push_bet(&mut self, bet: Bet) {
        self.bets.push(bet);
    }

    /// True when there are no bets to place.
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// Bets whose kind the engine will never settle.
    pub fn unrecognized_bets(&self) -> impl Iterator<Item = &Bet> {
        self.bets.iter().filter(|b| !b.kind.is_recognized())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bankroll: {}", self.initial_bankroll)?;
        for bet in &self.bets {
            writeln!(f, "bet: {bet}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pockets
// ---------------------------------------------------------------------------

/// One pocket of an American double-zero wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pocket {
    Zero,
    DoubleZero,
    Number(u8),
}

impl Pocket {
    /// Numeric value used for settlement. Both zero pockets collapse to 0.
    pub fn value(&self) -> i64 {
        match self {
            Pocket::Zero | Pocket::DoubleZero => 0,
            Pocket::Number(n) => i64::from(*n),
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Pocket::Zero | Pocket::DoubleZero)
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pocket::Zero => write!(f, "0"),
            Pocket::DoubleZero => write!(f, "00"),
            Pocket::Number(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
