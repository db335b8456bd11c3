// tests/rng_tests.rs

//! RNG tests for blackjack-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отсутствие повторяющихся карт после shuffle
//! - воспроизводимость раздачи за столом при одинаковом seed

use std::collections::HashSet;

use blackjack_engine::domain::{Chips, Deck, TableConfig};
use blackjack_engine::engine::{GameTable, RandomSource};
use blackjack_engine::infra::{DeterministicRng, NoShuffle, SystemRng};

#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

#[test]
fn deterministic_rng_different_seeds_different_decks() {
    let d1 = Deck::shuffled(&mut DeterministicRng::from_seed(111));
    let d2 = Deck::shuffled(&mut DeterministicRng::from_seed(222));
    assert_ne!(d1, d2, "Different seeds must produce different decks");
}

#[test]
fn shuffle_produces_no_duplicates() {
    let mut rng = SystemRng;
    let deck = Deck::shuffled(&mut rng);
    assert_eq!(deck.remaining_cards(), 52);
    let set: HashSet<_> = deck.cards().iter().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn shuffle_on_empty_deck_does_not_panic() {
    let mut rng = DeterministicRng::from_seed(1);
    let mut deck = Deck::standard_52();
    for _ in 0..52 {
        deck.draw().unwrap();
    }
    deck.shuffle(&mut rng);
    assert!(deck.is_empty());
}

#[test]
fn no_shuffle_keeps_canonical_order() {
    let deck = Deck::shuffled(&mut NoShuffle);
    assert_eq!(deck, Deck::standard_52());
}

#[test]
fn same_seed_same_deal_at_table() {
    let deal = |seed: u64| {
        let mut t = GameTable::new(TableConfig::default(), DeterministicRng::from_seed(seed));
        let a = t.seat_player("Alice", Chips(100)).unwrap();
        let b = t.seat_player("Bob", Chips(100)).unwrap();
        t.start_game().unwrap();
        t.hit(a, 0).unwrap();
        (t.sum_of_hands(a), t.sum_of_hands(b), t.deck().cards().to_vec())
    };

    assert_eq!(deal(42), deal(42));
}
