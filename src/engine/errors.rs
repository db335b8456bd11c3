// src/engine/errors.rs

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Ошибки движка: нарушение внутренних инвариантов.
///
/// Игровые отказы (нет денег, неверный индекс руки) сюда не попадают,
/// для них есть `Rejection`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Ошибка домена: {0}")]
    Domain(#[from] DomainError),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
