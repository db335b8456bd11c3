// src/infra/ids.rs

use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Генерация id игроков на основе монотонного счётчика.
///
/// Счётчик принадлежит конкретному столу, общего глобального состояния нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdGenerator {
    player_counter: PlayerId,
}

impl IdGenerator {
    /// Создать генератор, первый id = 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: PlayerId) -> Self {
        Self {
            player_counter: first,
        }
    }

    /// Счётчик упирается в `PlayerId::MAX` и дальше не растёт: повторный
    /// id отсечёт стол как `DuplicatePlayer`.
    #[inline]
    pub fn next_player_id(&mut self) -> PlayerId {
        let id = self.player_counter;
        self.player_counter = self.player_counter.saturating_add(1);
        id
    }

    /// Не выдавать id <= `id` (если игрока с внешним id посадили вручную).
    pub fn observe(&mut self, id: PlayerId) {
        if id >= self.player_counter {
            self.player_counter = id.saturating_add(1);
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
