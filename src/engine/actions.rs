// src/engine/actions.rs

use serde::{Deserialize, Serialize};

use crate::domain::{HandIndex, PlayerId};

/// Тип действия игрока над рукой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    /// Взять ещё карту.
    Hit,
    /// Остановиться.
    Stay,
    /// Удвоить ставку и взять ровно одну карту.
    Double,
    /// Разбить пару на две руки.
    Split,
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какой игрок действует.
    pub player_id: PlayerId,
    /// Индекс руки, 0 = основная.
    pub hand_index: HandIndex,
    /// Само действие.
    pub kind: PlayerActionKind,
}
