// src/engine/history.rs

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{HandIndex, PlayerId};
use crate::engine::actions::PlayerActionKind;
use crate::engine::outcome::Rejection;

/// Тип события за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableEventKind {
    PlayerAdded {
        player_id: PlayerId,
        name: String,
        balance: Chips,
    },

    PlayerRemoved {
        player_id: PlayerId,
    },

    /// Колода перемешана, начинается раздача.
    GameStarted {
        players: usize,
    },

    /// Карта ушла из колоды в руку.
    CardDealt {
        player_id: PlayerId,
        hand_index: HandIndex,
        card: Card,
    },

    BetPlaced {
        player_id: PlayerId,
        hand_index: HandIndex,
        amount: Chips,
        balance_after: Chips,
    },

    /// Действие игрока применено.
    PlayerActed {
        player_id: PlayerId,
        hand_index: HandIndex,
        action: PlayerActionKind,
        total_after: u8,
        busted: bool,
    },

    /// Действие отклонено правилами.
    ActionRejected {
        player_id: PlayerId,
        reason: Rejection,
    },

    /// Новая колода и пустые руки.
    RoundReset,

    DiscardRecycled {
        remaining: usize,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableEvent {
    pub index: usize,
    pub kind: TableEventKind,
}

/// История текущего раунда. `GameTable::new_round` её очищает.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableHistory {
    pub events: Vec<TableEvent>,
}

impl TableHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: TableEventKind) {
        let index = self.events.len();
        self.events.push(TableEvent { index, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&TableEvent> {
        self.events.last()
    }
}
