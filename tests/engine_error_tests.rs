// tests/engine_error_tests.rs
//
// Отказы стола и ошибки движка.
//
// Мы тестируем:
//  1) Неизвестный игрок -> Rejection::PlayerNotFound для каждого действия
//  2) Неверный индекс руки -> Rejection::InvalidHandIndex
//  3) Нулевая ставка -> Rejection::InvalidBetAmount
//  4) Отказ не меняет стол (колода, баланс, руки)
//  5) EngineError оборачивает DomainError
//  6) У каждого отказа есть человекочитаемое сообщение

use blackjack_engine::domain::{Chips, DomainError, TableConfig};
use blackjack_engine::engine::{EngineError, GameTable, PlayerActionKind, PlayerAction, Rejection, TableOutcome};
use blackjack_engine::infra::NoShuffle;

fn table_with_alice() -> (GameTable<NoShuffle>, u64) {
    let mut t = GameTable::new(TableConfig::default(), NoShuffle);
    let id = t.seat_player("Alice", Chips(200)).unwrap();
    (t, id)
}

#[test]
fn unknown_player_is_rejected_for_every_action() {
    let (mut t, _) = table_with_alice();
    let ghost = 777;
    let expected = TableOutcome::Rejected(Rejection::PlayerNotFound(ghost));

    assert_eq!(t.add_pot(ghost, Chips(10), 0), Ok(expected.clone()));
    for kind in [
        PlayerActionKind::Hit,
        PlayerActionKind::Stay,
        PlayerActionKind::Double,
        PlayerActionKind::Split,
    ] {
        let outcome = t.apply_action(PlayerAction {
            player_id: ghost,
            hand_index: 0,
            kind,
        });
        assert_eq!(outcome, Ok(expected.clone()), "{kind:?}");
    }
    assert_eq!(t.deck().remaining_cards(), 52);
}

#[test]
fn invalid_hand_index_is_rejected() {
    let (mut t, alice) = table_with_alice();
    let expected = TableOutcome::Rejected(Rejection::InvalidHandIndex { index: 3, hands: 1 });

    assert_eq!(t.add_pot(alice, Chips(10), 3), Ok(expected.clone()));
    assert_eq!(t.hit(alice, 3), Ok(expected.clone()));
    assert_eq!(t.stay(alice, 3), Ok(expected.clone()));
    assert_eq!(t.double(alice, 3), Ok(expected.clone()));
    assert_eq!(t.split(alice, 3), Ok(expected));

    let p = t.player(alice).unwrap();
    assert_eq!(p.balance(), Chips(200));
    assert_eq!(p.hands().len(), 1);
    assert_eq!(t.deck().remaining_cards(), 52);
}

#[test]
fn zero_bet_is_rejected() {
    let (mut t, alice) = table_with_alice();
    assert_eq!(
        t.add_pot(alice, Chips::ZERO, 0),
        Ok(TableOutcome::Rejected(Rejection::InvalidBetAmount))
    );
    assert_eq!(t.player(alice).unwrap().balance(), Chips(200));
}

#[test]
fn split_on_empty_hand_is_rejected() {
    let (mut t, alice) = table_with_alice();
    t.add_pot(alice, Chips(10), 0).unwrap();
    assert_eq!(
        t.split(alice, 0),
        Ok(TableOutcome::Rejected(Rejection::NotSplittable))
    );
}

#[test]
fn engine_error_wraps_domain_error() {
    let err: EngineError = DomainError::EmptyDeck.into();
    assert_eq!(err, EngineError::Domain(DomainError::EmptyDeck));
    assert!(err.to_string().contains(&DomainError::EmptyDeck.to_string()));
}

#[test]
fn rejections_have_messages() {
    let all = [
        Rejection::PlayerNotFound(1),
        Rejection::DuplicatePlayer(1),
        Rejection::InvalidBetAmount,
        Rejection::InvalidHandIndex { index: 2, hands: 1 },
        Rejection::InsufficientFunds {
            needed: Chips(10),
            available: Chips(5),
        },
        Rejection::NotSplittable,
        Rejection::HandLimitReached(4),
    ];
    for r in all {
        assert!(!r.to_string().is_empty());
    }

    let msg = Rejection::InsufficientFunds {
        needed: Chips(150),
        available: Chips(50),
    }
    .to_string();
    assert!(msg.contains("150") && msg.contains("50"));
}

#[test]
fn rejection_accessors() {
    let applied = TableOutcome::Applied;
    assert!(applied.is_applied());
    assert_eq!(applied.rejection(), None);

    let rejected: TableOutcome = Rejection::NotSplittable.into();
    assert!(!rejected.is_applied());
    assert_eq!(rejected.rejection(), Some(&Rejection::NotSplittable));
}
