// tests/api_test.rs

//! Тесты внешнего API: команды, запросы, DTO и JSON.

use blackjack_engine::api::*;
use blackjack_engine::domain::{Chips, Player, TableConfig};
use blackjack_engine::engine::{GameTable, PlayerActionKind, Rejection, TableOutcome};
use blackjack_engine::infra::NoShuffle;

fn table() -> GameTable<NoShuffle> {
    GameTable::new(TableConfig::new("API"), NoShuffle)
}

#[test]
fn full_round_through_commands() {
    let mut t = table();

    let seated = execute_command(
        &mut t,
        Command::SeatPlayer {
            name: "Alice".into(),
            balance: Chips(200),
        },
    )
    .unwrap();
    assert_eq!(seated, CommandResponse::Seated(1));

    let ok = CommandResponse::Outcome(TableOutcome::Applied);
    assert_eq!(execute_command(&mut t, Command::StartGame), Ok(ok.clone()));
    assert_eq!(
        execute_command(
            &mut t,
            Command::AddPot {
                player_id: 1,
                amount: Chips(50),
                hand_index: 0,
            }
        ),
        Ok(ok.clone())
    );
    assert_eq!(
        execute_command(
            &mut t,
            Command::Action {
                player_id: 1,
                hand_index: 0,
                kind: PlayerActionKind::Double,
            }
        ),
        Ok(ok.clone())
    );

    match handle_query(&t, Query::GetPlayer { player_id: 1 }) {
        QueryResponse::Player(Some(p)) => {
            assert_eq!(p.name, "Alice");
            assert_eq!(p.balance, Chips(100));
            assert_eq!(p.hands.len(), 1);
            assert_eq!(p.hands[0].bet, Chips(100));
            assert_eq!(p.hands[0].cards.len(), 3);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    assert_eq!(execute_command(&mut t, Command::NewRound), Ok(ok));
    match handle_query(&t, Query::GetTable) {
        QueryResponse::Table(view) => {
            assert_eq!(view.name, "API");
            assert_eq!(view.remaining_cards, 52);
            assert_eq!(view.discarded_cards, 0);
            assert_eq!(view.players.len(), 1);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn rejected_command_reports_reason() {
    let mut t = table();
    let id = t.seat_player("Bob", Chips(10)).unwrap();
    let resp = execute_command(
        &mut t,
        Command::AddPot {
            player_id: id,
            amount: Chips(50),
            hand_index: 0,
        },
    )
    .unwrap();
    assert_eq!(
        resp,
        CommandResponse::Outcome(TableOutcome::Rejected(Rejection::InsufficientFunds {
            needed: Chips(50),
            available: Chips(10),
        }))
    );
}

#[test]
fn seat_command_reports_rejection_when_ids_run_out() {
    let mut t = table();
    assert!(t.add_player(Player::new(u64::MAX, "Max", Chips(10))).is_applied());

    let resp = execute_command(
        &mut t,
        Command::SeatPlayer {
            name: "Eve".into(),
            balance: Chips(10),
        },
    )
    .unwrap();
    assert_eq!(
        resp,
        CommandResponse::Outcome(TableOutcome::Rejected(Rejection::DuplicatePlayer(u64::MAX)))
    );
}

#[test]
fn queries_for_unknown_player() {
    let t = table();
    assert_eq!(
        handle_query(&t, Query::GetPlayer { player_id: 5 }),
        QueryResponse::Player(None)
    );
    assert_eq!(
        handle_query(&t, Query::SumOfHands { player_id: 5 }),
        QueryResponse::Totals(None)
    );
}

#[test]
fn hand_view_reports_totals() {
    let mut t = table();
    let id = t.seat_player("Alice", Chips(100)).unwrap();
    {
        let hand = t.player_mut(id).unwrap().hand_mut(0).unwrap();
        hand.add_card("10h".parse().unwrap());
        hand.add_card("As".parse().unwrap());
    }

    let view = build_table_view(&t);
    let h = &view.players[0].hands[0];
    assert_eq!(h.total, 21);
    assert!(h.soft);
    assert!(h.blackjack);
    assert!(!h.busted);

    assert_eq!(
        handle_query(&t, Query::SumOfHands { player_id: id }),
        QueryResponse::Totals(Some(vec![21]))
    );
}

#[test]
fn command_from_json_uses_default_hand_index() {
    let cmd: Command =
        serde_json::from_str(r#"{"AddPot":{"player_id":1,"amount":50}}"#).unwrap();
    assert_eq!(
        cmd,
        Command::AddPot {
            player_id: 1,
            amount: Chips(50),
            hand_index: 0,
        }
    );

    let cmd: Command =
        serde_json::from_str(r#"{"Action":{"player_id":2,"kind":"Split"}}"#).unwrap();
    assert_eq!(
        cmd,
        Command::Action {
            player_id: 2,
            hand_index: 0,
            kind: PlayerActionKind::Split,
        }
    );
}

#[test]
fn table_view_serializes_to_json() {
    let mut t = table();
    t.seat_player("Alice", Chips(100)).unwrap();
    t.start_game().unwrap();

    let json = serde_json::to_value(build_table_view(&t)).unwrap();
    assert_eq!(json["name"], "API");
    assert_eq!(json["remaining_cards"], 50);
    assert_eq!(json["players"][0]["balance"], 100);
    assert_eq!(json["players"][0]["hands"][0]["cards"][0]["rank"], "Ace");
    assert_eq!(json["players"][0]["hands"][0]["cards"][0]["suit"], "Hearts");
}
