//! Simulation outcome and its terminal rendering.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub games: u64,
    pub initial_bankroll: Decimal,
    pub final_bankroll: Decimal,
    /// Always exactly `final_bankroll - initial_bankroll`.
    pub profit_loss: Decimal,
}

impl SimulationReport {
    pub fn new(games: u64, initial_bankroll: Decimal, final_bankroll: Decimal) -> Self {
        Self {
            games,
            initial_bankroll,
            final_bankroll,
            profit_loss: final_bankroll.saturating_sub(initial_bankroll),
        }
    }
}

/// Format a money amount as `$` plus two decimal places, rounding half away from zero.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial bankroll: {}", format_money(self.initial_bankroll))?;
        writeln!(
            f,
            "Final bankroll after {} games: {}",
            self.games,
            format_money(self.final_bankroll)
        )?;
        write!(f, "Profit/Loss: {}", format_money(self.profit_loss))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_profit_loss_is_exact() {
        let report = SimulationReport::new(10, dec!(100.10), dec!(87.335));
        assert_eq!(report.profit_loss, dec!(-12.765));
        assert_eq!(report.final_bankroll - report.initial_bankroll, report.profit_loss);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(100)), "$100.00");
        assert_eq!(format_money(dec!(2.5)), "$2.50");
        assert_eq!(format_money(dec!(0.125)), "$0.13");
        assert_eq!(format_money(dec!(-12.765)), "$-12.77");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_display() {
        let report = SimulationReport::new(50, dec!(100), dec!(130));
        assert_eq!(
            report.to_string(),
            "Initial bankroll: $100.00\n\
             Final bankroll after 50 games: $130.00\n\
             Profit/Loss: $30.00"
        );
    }

    #[test]
    fn test_json_fields() {
        let report = SimulationReport::new(5, dec!(10), dec!(4));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["games"], 5);
        assert_eq!(json["final_bankroll"].as_f64(), Some(4.0));
        assert_eq!(json["profit_loss"].as_f64(), Some(-6.0));
    }
}
