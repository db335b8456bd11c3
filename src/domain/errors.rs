// src/domain/errors.rs

use thiserror::Error;

use crate::domain::chips::Chips;

/// Жёсткие ошибки доменной модели.
///
/// Это ошибки использования API (невалидная карта, пустая колода и т.п.),
/// а не игровые отказы. Игровые отказы живут в `engine::Rejection`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Невалидная карта: {0}")]
    InvalidCard(String),

    #[error("Колода пуста")]
    EmptyDeck,

    #[error("Нет карт в сбросе для возврата в колоду")]
    EmptyDiscardPile,

    #[error("Невалидный индекс руки {index}: у игрока {hands} рук(и)")]
    InvalidHandIndex { index: usize, hands: usize },

    #[error("Недостаточно средств: баланс {balance}, изменение {delta}")]
    InsufficientFunds { balance: Chips, delta: i64 },
}
