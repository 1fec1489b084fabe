//! Parsing realistic strategy files and interactive input.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Cursor;

use roulette_sim::cli::{collect_strategy, read_game_count};
use roulette_sim::error::ParseError;
use roulette_sim::strategy::parse_strategy;
use roulette_sim::types::BetKind;

const MARTINGALE_ISH: &str = "\
# cover both colors and a lucky number
bankroll: 200

bet: red, 0, 10
bet: black, 0, 10
bet: number, 0, 1
notes: this line is ignored
";

#[test]
fn test_parse_commented_strategy() {
    let s = parse_strategy(MARTINGALE_ISH).unwrap();
    assert_eq!(s.initial_bankroll, dec!(200));
    assert_eq!(s.bets.len(), 3);
    assert_eq!(s.bets[2].kind, BetKind::Number);
    assert_eq!(s.bets[2].value, 0);
    assert_eq!(s.unrecognized_bets().count(), 0);
}

#[test]
fn test_interactive_session() {
    let mut stdin = Cursor::new("bankroll: 100\nbet: red, 0, 10\ndone\n250\n");
    let text = collect_strategy(&mut stdin, "done").unwrap();
    let games = read_game_count(&mut stdin).unwrap();

    let s = parse_strategy(&text).unwrap();
    assert_eq!(s.initial_bankroll, dec!(100));
    assert_eq!(s.bets.len(), 1);
    assert_eq!(games, 250);
}

#[test]
fn test_missing_bankroll_defaults_to_zero() {
    let s = parse_strategy("bet: odd, 0, 5\n").unwrap();
    assert_eq!(s.initial_bankroll, Decimal::ZERO);
    assert_eq!(s.bets.len(), 1);
}

#[test]
fn test_error_messages_name_the_line() {
    let err = parse_strategy("bankroll: 10\nbet: red, 0\n").unwrap_err();
    assert!(matches!(err, ParseError::MalformedBet { line: 2, fields: 2, .. }));
    let msg = err.to_string();
    assert!(msg.contains("line 2"), "{msg}");
    assert!(msg.contains("bet: red, 0"), "{msg}");
}

#[test]
fn test_first_error_wins() {
    let err = parse_strategy("bankroll: x\nbet: red, y, 1\n").unwrap_err();
    assert!(matches!(err, ParseError::InvalidBankroll { line: 1, .. }));
}

#[test]
fn test_demo_strategies_parse() {
    let demos = [
        include_str!("../../demos/red_black_zero.txt"),
        include_str!("../../demos/single_number.txt"),
    ];
    for text in demos {
        let s = parse_strategy(text).unwrap();
        assert!(s.initial_bankroll > Decimal::ZERO);
        assert!(!s.is_empty());
    }
}
