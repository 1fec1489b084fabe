//! Strategy text parser.
//!
//! A strategy is a handful of lines:
//!
//! ```text
//! bankroll: 100
//! bet: red, 0, 10
//! bet: number, 17, 2.5
//! ```
//!
//! Parsing is a single pass over trimmed lines. Blank and unrecognized
//! lines are skipped, the last `bankroll:` wins, and bet types are stored
//! verbatim without validation. Numeric fields are strict: any field that
//! fails to parse aborts the whole strategy.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, trace, warn};

use crate::error::{ParseError, Result};
use crate::types::{Bet, BetKind, Strategy};

const BANKROLL_PREFIX: &str = "bankroll:";
const BET_PREFIX: &str = "bet:";
const BET_FIELDS: usize = 3;

/// Parse strategy text into a [`Strategy`].
pub fn parse_strategy(text: &str) -> Result<Strategy> {
    let mut strategy = Strategy::default();
    let mut bankroll_seen = false;

    for (index, raw) in text.split('\n').enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix(BANKROLL_PREFIX) {
            let field = rest.trim();
            let bankroll = parse_decimal(field).ok_or_else(|| ParseError::InvalidBankroll {
                line: line_no,
                text: field.to_string(),
            })?;
            if bankroll_seen {
                debug!(line = line_no, %bankroll, "Bankroll redeclared, last value wins");
            }
            strategy.initial_bankroll = bankroll;
            bankroll_seen = true;
        } else if let Some(rest) = line.strip_prefix(BET_PREFIX) {
            let bet = parse_bet(rest, line_no, line)?;
            if bet.amount.is_sign_negative() && !bet.amount.is_zero() {
                warn!(line = line_no, amount = %bet.amount, "Negative bet amount");
            }
            strategy.push_bet(bet);
        } else if !line.is_empty() {
            trace!(line = line_no, content = line, "Skipping unrecognized line");
        }
    }

    debug!(
        bankroll = %strategy.initial_bankroll,
        bets = strategy.bets.len(),
        "Strategy parsed"
    );
    Ok(strategy)
}

/// Parse the body of a `bet:` line (everything after the prefix).
fn parse_bet(body: &str, line_no: usize, line: &str) -> Result<Bet> {
    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    if fields.len() != BET_FIELDS {
        return Err(ParseError::MalformedBet {
            line: line_no,
            fields: fields.len(),
            text: line.to_string(),
        });
    }

    let kind = BetKind::from_text(fields[0]);
    let value = fields[1]
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidBetValue {
            line: line_no,
            text: fields[1].to_string(),
        })?;
    let amount = parse_decimal(fields[2]).ok_or_else(|| ParseError::InvalidBetAmount {
        line: line_no,
        text: fields[2].to_string(),
    })?;

    Ok(Bet::new(kind, value, amount))
}

/// Parse a game count: a non-negative integer, surrounding whitespace allowed.
pub fn parse_game_count(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidInteger {
            text: trimmed.to_string(),
        })
}

/// Largest power of ten a `Decimal` can hold digits up to (`Decimal::MAX` ≈ 7.9e28).
const MAX_INTEGER_DIGITS: i64 = 29;
/// Fractional digits a `Decimal` keeps; anything finer is rounded away.
const MAX_SCALE: i64 = 28;

/// Parse plain or scientific decimal notation.
///
/// Digits finer than 28 decimal places are rounded, in either notation.
/// Magnitudes above `Decimal::MAX` do not fit and are rejected.
/// `Decimal::from_str` tolerates `_` separators, which are not valid in a
/// strategy, so those are rejected up front.
fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() || text.contains('_') {
        return None;
    }
    if text.contains(|c: char| c == 'e' || c == 'E') {
        return parse_scientific(text);
    }
    Decimal::from_str(text).ok()
}

/// Rewrite `<mantissa>e<exponent>` as plain notation and parse that, so
/// out-of-scale exponents round like long plain fractions do.
fn parse_scientific(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(|c: char| c == 'e' || c == 'E')?;
    let exponent: i64 = exponent.parse().ok()?;

    let (sign, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{int_part}{frac_part}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(Decimal::ZERO);
    }
    let leading_zeros = (digits.len() - significant.len()) as i64;
    // Position of the decimal point relative to the first significant digit.
    let point = (int_part.len() as i64)
        .saturating_add(exponent)
        .saturating_sub(leading_zeros);

    if point > MAX_INTEGER_DIGITS {
        return None;
    }
    if point < -MAX_SCALE {
        // Below half of the smallest representable step.
        return Some(Decimal::ZERO);
    }

    let len = significant.len() as i64;
    let plain = if point <= 0 {
        format!("{sign}0.{}{significant}", "0".repeat((-point) as usize))
    } else if point >= len {
        format!("{sign}{significant}{}", "0".repeat((point - len) as usize))
    } else {
        let (whole, frac) = significant.split_at(point as usize);
        format!("{sign}{whole}.{frac}")
    };
    Decimal::from_str(&plain).ok()
}

impl FromStr for Strategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_strategy(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
