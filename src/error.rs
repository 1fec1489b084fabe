//! Error types for strategy and game-count parsing.

use thiserror::Error;

/// Result type alias using [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

/// Every way strategy text or a game count can be rejected.
///
/// All of these are terminal: a strategy that fails to parse is discarded
/// whole, never partially applied. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text after `bankroll:` is not a decimal.
    #[error("invalid bankroll on line {line}: {text:?}")]
    InvalidBankroll { line: usize, text: String },

    /// A `bet:` line did not split into exactly three fields.
    #[error("invalid bet format on line {line}: expected 3 fields, found {fields}: {text}")]
    MalformedBet {
        line: usize,
        fields: usize,
        text: String,
    },

    /// The bet value field is not an integer.
    #[error("invalid bet value on line {line}: {text:?}")]
    InvalidBetValue { line: usize, text: String },

    /// The bet amount field is not a decimal.
    #[error("invalid bet amount on line {line}: {text:?}")]
    InvalidBetAmount { line: usize, text: String },

    /// The game count is not a non-negative integer.
    #[error("invalid integer: {text:?}")]
    InvalidInteger { text: String },
}

impl ParseError {
    /// The 1-based line the error was found on, if it came from strategy text.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::InvalidBankroll { line, .. }
            | ParseError::MalformedBet { line, .. }
            | ParseError::InvalidBetValue { line, .. }
            | ParseError::InvalidBetAmount { line, .. } => Some(*line),
            ParseError::InvalidInteger { .. } => None,
        }
    }
}
