//! Monte Carlo spin/settlement loop.
//!
//! Each round spins the wheel once and settles every bet of the strategy
//! against that single pocket, in declaration order. A bet the current
//! bankroll cannot cover is skipped for the round, and a bet of an
//! unrecognized kind is never placed at all. A placed bet is debited
//! up front and, on a win, credited with its full payout (stake included).
//!
//! | Kind   | Wins when                         | Credit      |
//! |--------|-----------------------------------|-------------|
//! | number | pocket value == bet value         | amount × 36 |
//! | even   | pocket is even and nonzero        | amount × 2  |
//! | odd    | pocket is odd                     | amount × 2  |
//! | red    | pocket is red                     | amount × 2  |
//! | black  | pocket is black                   | amount × 2  |
//!
//! Both zero pockets have value 0, so a number bet on 0 covers two of the
//! 38 pockets while a number bet on 1–36 covers one.

use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, trace};

use super::report::SimulationReport;
use crate::types::{BetKind, Pocket, Strategy};
use crate::wheel::colors::{color_of, Color};
use crate::wheel::{PocketSource, Wheel};

/// Credit multiplier for a winning single-number bet.
const NUMBER_PAYOUT: Decimal = dec!(36);
/// Credit multiplier for a winning even-money bet.
const EVEN_MONEY_PAYOUT: Decimal = dec!(2);

/// Credit owed to a bet for a given winning pocket, or `None` if it lost.
///
/// Unrecognized kinds never win.
pub fn settle(kind: &BetKind, value: i64, amount: Decimal, pocket: Pocket) -> Option<Decimal> {
    let result = pocket.value();
    let multiplier = match kind {
        BetKind::Number if result == value => NUMBER_PAYOUT,
        BetKind::Even if result != 0 && result % 2 == 0 => EVEN_MONEY_PAYOUT,
        BetKind::Odd if result % 2 != 0 => EVEN_MONEY_PAYOUT,
        BetKind::Red if color_of(pocket) == Color::Red => EVEN_MONEY_PAYOUT,
        BetKind::Black if color_of(pocket) == Color::Black => EVEN_MONEY_PAYOUT,
        _ => return None,
    };
    Some(amount.saturating_mul(multiplier))
}

/// Replays strategies against a pocket source.
pub struct Simulator<S: PocketSource> {
    source: S,
}

impl<S: PocketSource> Simulator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run `games` rounds and return the final bankroll.
    pub fn simulate(&mut self, strategy: &Strategy, games: u64) -> Decimal {
        let mut bankroll = strategy.initial_bankroll;
        if strategy.is_empty() {
            debug!(games, "No bets to place, bankroll unchanged");
            return bankroll;
        }

        let mut placed = 0u64;
        let mut skipped = 0u64;
        let mut won = 0u64;

        for round in 1..=games {
            let pocket = self.source.spin();

            for bet in &strategy.bets {
                if !bet.kind.is_recognized() {
                    continue;
                }
                if bankroll < bet.amount {
                    skipped += 1;
                    continue;
                }

                bankroll = bankroll.saturating_sub(bet.amount);
                placed += 1;

                if let Some(credit) = settle(&bet.kind, bet.value, bet.amount, pocket) {
                    bankroll = bankroll.saturating_add(credit);
                    won += 1;
                }
            }

            trace!(round, %pocket, %bankroll, "Round settled");
        }

        debug!(
            games,
            placed,
            skipped,
            won,
            initial = %strategy.initial_bankroll,
            final_bankroll = %bankroll,
            "Simulation complete"
        );
        bankroll
    }

    /// Run `games` rounds and wrap the outcome in a report.
    pub fn run(&mut self, strategy: &Strategy, games: u64) -> SimulationReport {
        let final_bankroll = self.simulate(strategy, games);
        SimulationReport::new(games, strategy.initial_bankroll, final_bankroll)
    }
}

impl Simulator<Wheel<StdRng>> {
    /// Simulator over a deterministic wheel.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Wheel::seeded(seed))
    }

    /// Simulator over an entropy-seeded wheel.
    pub fn from_entropy() -> Self {
        Self::new(Wheel::from_entropy())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
