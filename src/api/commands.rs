// src/api/commands.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{HandIndex, PlayerId};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::{EngineError, GameTable, RandomSource, TableOutcome};

/// Команда, меняющая состояние стола.
///
/// Через них внешний слой (CLI, UI) управляет игрой, не трогая
/// `GameTable` напрямую.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Посадить нового игрока (id выдаёт стол). Отказ приходит как `Outcome(Rejected)`.
    SeatPlayer { name: String, balance: Chips },

    /// Убрать игрока.
    RemovePlayer { player_id: PlayerId },

    /// Перемешать и раздать.
    StartGame,

    /// Ставка на руку.
    AddPot {
        player_id: PlayerId,
        amount: Chips,
        #[serde(default)]
        hand_index: HandIndex,
    },

    /// Действие игрока (hit/stay/double/split).
    Action {
        player_id: PlayerId,
        #[serde(default)]
        hand_index: HandIndex,
        kind: PlayerActionKind,
    },

    /// Новая колода и пустые руки.
    NewRound,
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Игрок посажен, вот его id.
    Seated(PlayerId),
    /// Результат игрового действия.
    Outcome(TableOutcome),
}

pub fn execute_command<R: RandomSource>(
    table: &mut GameTable<R>,
    command: Command,
) -> Result<CommandResponse, EngineError> {
    let outcome = match command {
        Command::SeatPlayer { name, balance } => match table.seat_player(name, balance) {
            Ok(id) => return Ok(CommandResponse::Seated(id)),
            Err(reason) => TableOutcome::Rejected(reason),
        },
        Command::RemovePlayer { player_id } => table.remove_player(player_id),
        Command::StartGame => table.start_game()?,
        Command::AddPot {
            player_id,
            amount,
            hand_index,
        } => table.add_pot(player_id, amount, hand_index)?,
        Command::Action {
            player_id,
            hand_index,
            kind,
        } => table.apply_action(PlayerAction {
            player_id,
            hand_index,
            kind,
        })?,
        Command::NewRound => {
            table.new_round();
            TableOutcome::Applied
        }
    };
    Ok(CommandResponse::Outcome(outcome))
}
