// src/bin/blackjack_dev_cli.rs

use blackjack_engine::api::{build_table_view, TableViewDto};
use blackjack_engine::domain::{Chips, HandIndex, PlayerId, TableConfig};
use blackjack_engine::engine::{
    EngineError, GameTable, PlayerAction, PlayerActionKind, RandomSource, TableOutcome,
};
use blackjack_engine::infra::{DeterministicRng, SystemRng};
use clap::Parser;

/// Dev-CLI: сыграть один раунд за столом блэкджека по простому сценарию.
#[derive(Parser, Debug)]
#[command(name = "blackjack_dev_cli")]
struct Args {
    /// Seed для детерминированной колоды. Без него используется системный RNG.
    #[arg(long)]
    seed: Option<u64>,

    /// Количество игроков за столом.
    #[arg(long, default_value_t = 3)]
    players: usize,

    /// Стартовый баланс каждого игрока.
    #[arg(long, default_value_t = 200)]
    balance: u64,

    /// Ставка на основную руку.
    #[arg(long, default_value_t = 50)]
    bet: u64,

    /// Добирать, пока сумма меньше этого значения.
    #[arg(long, default_value_t = 17)]
    stand_on: u8,

    /// Имя стола.
    #[arg(long, default_value = "DEV TABLE")]
    name: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("blackjack_dev_cli: стартуем dev-CLI…");

    let config = TableConfig::new(args.name.clone());
    let result = match args.seed {
        Some(seed) => run(GameTable::new(config, DeterministicRng::from_seed(seed)), &args),
        None => run(GameTable::new(config, SystemRng), &args),
    };

    if let Err(e) = result {
        eprintln!("ошибка движка: {e}");
        std::process::exit(1);
    }
}

fn run<R: RandomSource>(mut table: GameTable<R>, args: &Args) -> Result<(), EngineError> {
    // 1. Игроки
    let mut ids: Vec<PlayerId> = Vec::with_capacity(args.players);
    for n in 0..args.players {
        match table.seat_player(format!("Player {}", n + 1), Chips::new(args.balance)) {
            Ok(id) => ids.push(id),
            Err(reason) => println!("  Player {}: не посажен: {reason}", n + 1),
        }
    }

    // 2. Раздача и ставки. Без принятой ставки игрок в раунде не играет.
    table.start_game()?;
    let mut betting = Vec::with_capacity(ids.len());
    for &id in &ids {
        match table.add_pot(id, Chips::new(args.bet), 0)? {
            TableOutcome::Applied => betting.push(id),
            TableOutcome::Rejected(reason) => {
                println!("  player {id}: ставка {} отклонена: {reason}", args.bet)
            }
        }
    }

    println!();
    println!("================ ПОСЛЕ РАЗДАЧИ =================");
    print_table(&build_table_view(&table));

    // 3. Ходы игроков
    for &id in &betting {
        play_player(&mut table, id, args.stand_on)?;
    }

    println!();
    println!("================ ИТОГ РАУНДА =================");
    print_table(&build_table_view(&table));

    for &id in &ids {
        if let Some(totals) = table.sum_of_hands(id) {
            println!("player {id}: суммы рук {totals:?}");
        }
    }

    match serde_json::to_string_pretty(&build_table_view(&table)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("не удалось сериализовать стол: {e}"),
    }
    Ok(())
}

/// Простой сценарий: сплит пары, double на 10/11, добор до `stand_on`.
fn play_player<R: RandomSource>(
    table: &mut GameTable<R>,
    player_id: PlayerId,
    stand_on: u8,
) -> Result<(), EngineError> {
    let splittable = table
        .player(player_id)
        .and_then(|p| p.hand(0))
        .is_some_and(|h| h.is_splittable());
    if splittable {
        act(table, player_id, 0, PlayerActionKind::Split)?;
    }

    let hands = table.player(player_id).map_or(0, |p| p.hands().len());
    for hand_index in 0..hands {
        let total = hand_total(table, player_id, hand_index);
        if matches!(total, 10 | 11) {
            let outcome = act(table, player_id, hand_index, PlayerActionKind::Double)?;
            if outcome.is_applied() {
                act(table, player_id, hand_index, PlayerActionKind::Stay)?;
                continue;
            }
        }

        while hand_total(table, player_id, hand_index) < stand_on {
            let before = table
                .player(player_id)
                .and_then(|p| p.hand(hand_index))
                .map_or(0, |h| h.len());
            act(table, player_id, hand_index, PlayerActionKind::Hit)?;
            let after = table
                .player(player_id)
                .and_then(|p| p.hand(hand_index))
                .map_or(0, |h| h.len());
            // колода кончилась
            if after == before {
                break;
            }
        }
        act(table, player_id, hand_index, PlayerActionKind::Stay)?;
    }
    Ok(())
}

fn act<R: RandomSource>(
    table: &mut GameTable<R>,
    player_id: PlayerId,
    hand_index: HandIndex,
    kind: PlayerActionKind,
) -> Result<TableOutcome, EngineError> {
    let outcome = table.apply_action(PlayerAction {
        player_id,
        hand_index,
        kind,
    })?;
    if let TableOutcome::Rejected(reason) = &outcome {
        println!("  player {player_id} hand {hand_index}: {kind:?} отклонён: {reason}");
    }
    Ok(outcome)
}

fn hand_total<R: RandomSource>(table: &GameTable<R>, player_id: PlayerId, hand_index: HandIndex) -> u8 {
    table
        .player(player_id)
        .and_then(|p| p.hand(hand_index))
        .map_or(0, |h| h.total())
}

fn print_table(view: &TableViewDto) {
    println!(
        "Table '{}': в колоде {}, в сбросе {}",
        view.name, view.remaining_cards, view.discarded_cards
    );
    for p in &view.players {
        println!("  #{} {} | balance={}", p.player_id, p.name, p.balance);
        for (i, h) in p.hands.iter().enumerate() {
            let cards: Vec<String> = h.cards.iter().map(|c| c.to_string()).collect();
            println!(
                "    hand {}: [{}] total={}{} bet={}{}",
                i,
                cards.join(" "),
                h.total,
                if h.soft { " (soft)" } else { "" },
                h.bet,
                if h.busted { " BUST" } else { "" }
            );
        }
    }
}
