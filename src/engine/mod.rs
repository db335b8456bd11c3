// src/engine/mod.rs

//! Движок стола блэкджека: раздача, ставки, hit/stay/double/split.
//!
//! Высокоуровневый объект: `GameTable`
//! Основные операции:
//!   - `start_game` – перемешать колоду и раздать по 2 карты в каждую руку
//!   - `add_pot` – ставка на руку
//!   - `apply_action` – действие игрока (hit, stay, double, split)
//!   - `new_round` – новая колода и пустые руки
//!
//! Игровые отказы возвращаются как `TableOutcome::Rejected`,
//! нарушения инвариантов домена как `EngineError`.

pub mod actions;
pub mod errors;
pub mod game_table;
pub mod history;
pub mod outcome;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use errors::EngineError;
pub use game_table::GameTable;
pub use history::{TableEvent, TableEventKind, TableHistory};
pub use outcome::{Rejection, TableOutcome};

/// RNG интерфейс для колоды и движка.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
