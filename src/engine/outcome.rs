// src/engine/outcome.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Chips, HandIndex, PlayerId};

/// Причина, по которой стол отказал в действии. Состояние стола при этом не меняется.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rejection {
    #[error("Игрок {0} не найден за столом")]
    PlayerNotFound(PlayerId),

    #[error("Игрок {0} уже за столом")]
    DuplicatePlayer(PlayerId),

    #[error("Ставка должна быть больше нуля")]
    InvalidBetAmount,

    #[error("Невалидный индекс руки {index}: у игрока {hands} рук(и)")]
    InvalidHandIndex { index: HandIndex, hands: usize },

    #[error("Недостаточно средств: нужно {needed}, на балансе {available}")]
    InsufficientFunds { needed: Chips, available: Chips },

    #[error("Руку нельзя сплитовать: нужны ровно две карты одного достоинства")]
    NotSplittable,

    #[error("Достигнут лимит рук: {0}")]
    HandLimitReached(usize),
}

/// Единый результат действия за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableOutcome {
    /// Действие применено.
    Applied,
    /// Действие отклонено правилами игры.
    Rejected(Rejection),
}

impl TableOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TableOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            TableOutcome::Applied => None,
            TableOutcome::Rejected(r) => Some(r),
        }
    }
}

impl From<Rejection> for TableOutcome {
    fn from(r: Rejection) -> Self {
        TableOutcome::Rejected(r)
    }
}
