//! Seeded simulation runs over parsed strategies.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use roulette_sim::engine::Simulator;
use roulette_sim::strategy::parse_strategy;
use roulette_sim::types::Pocket;
use roulette_sim::wheel::{PocketSource, Wheel};

/// Replays a fixed pocket sequence, cycling.
struct FixedSequence {
    pockets: Vec<Pocket>,
    next: usize,
}

impl FixedSequence {
    fn new(pockets: Vec<Pocket>) -> Self {
        Self { pockets, next: 0 }
    }
}

impl PocketSource for FixedSequence {
    fn spin(&mut self) -> Pocket {
        let p = self.pockets[self.next % self.pockets.len()];
        self.next += 1;
        p
    }
}

#[test]
fn test_zero_games_is_identity() {
    let s = parse_strategy("bankroll: 123.45\nbet: red, 0, 10\nbet: number, 7, 1\n").unwrap();
    for seed in 0..5 {
        assert_eq!(Simulator::seeded(seed).simulate(&s, 0), dec!(123.45));
    }
}

#[test]
fn test_same_seed_same_result() {
    let s = parse_strategy("bankroll: 1000\nbet: black, 0, 25\nbet: number, 17, 5\n").unwrap();
    let a = Simulator::seeded(2024).run(&s, 5_000);
    let b = Simulator::seeded(2024).run(&s, 5_000);
    assert_eq!(a, b);
}

#[test]
fn test_profit_loss_matches_bankrolls() {
    let s = parse_strategy("bankroll: 300\nbet: even, 0, 3.33\nbet: odd, 0, 1.11\n").unwrap();
    for seed in 0..10 {
        let r = Simulator::seeded(seed).run(&s, 400);
        assert_eq!(r.profit_loss, r.final_bankroll - r.initial_bankroll);
    }
}

#[test]
fn test_unrecognized_bets_never_change_bankroll() {
    let s = parse_strategy("bankroll: 100\nbet: Red, 0, 1\nbet: split, 1, 1\n").unwrap();
    assert_eq!(s.unrecognized_bets().count(), 2);
    for games in [1, 10, 1_000] {
        assert_eq!(Simulator::seeded(5).simulate(&s, games), dec!(100));
    }
}

#[test]
fn test_broke_number_bettor_never_negative() {
    let s = parse_strategy("bankroll: 0\nbet: number, 5, 10\n").unwrap();
    for seed in 0..10 {
        let result = Simulator::seeded(seed).simulate(&s, 100);
        assert!(result >= Decimal::ZERO);
    }
}

#[test]
fn test_zero_number_bet_hits_on_both_zero_pockets() {
    let s = parse_strategy("bankroll: 10\nbet: number, 0, 1\n").unwrap();
    let mut sim = Simulator::new(FixedSequence::new(vec![Pocket::Zero, Pocket::DoubleZero]));
    // Two rounds, two hits: (10 - 1 + 36) - 1 + 36
    assert_eq!(sim.simulate(&s, 2), dec!(80));
}

#[test]
fn test_scripted_mixed_session() {
    let text = "bankroll: 50\nbet: red, 0, 10\nbet: even, 0, 5\n";
    let s = parse_strategy(text).unwrap();
    let mut sim = Simulator::new(FixedSequence::new(vec![
        Pocket::Number(12), // red + even: 50 -10 +20 -5 +10 = 65
        Pocket::Number(11), // black + odd: 65 -10 -5 = 50
        Pocket::DoubleZero, // both lose: 50 -10 -5 = 35
    ]));
    let report = sim.run(&s, 3);
    assert_eq!(report.final_bankroll, dec!(35));
    assert_eq!(report.profit_loss, dec!(-15));
}

#[test]
fn test_house_edge_shows_over_many_games() {
    // Even-money bets on an American wheel lose ~5.26% per stake on average.
    let s = parse_strategy("bankroll: 1000000\nbet: red, 0, 1\n").unwrap();
    let mut sim = Simulator::new(Wheel::seeded(77));
    let result = sim.simulate(&s, 200_000);
    let lost = dec!(1000000) - result;
    // Expected loss ~10,526; allow a generous band.
    assert!(lost > dec!(8000) && lost < dec!(13000), "lost {lost}");
}
