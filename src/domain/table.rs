// src/domain/table.rs

use serde::{Deserialize, Serialize};

/// Конфиг стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Имя стола (для логов и вывода).
    pub name: String,
    /// Сколько карт получает каждая рука при раздаче (в блэкджеке 2).
    pub initial_cards: usize,
    /// Максимум рук у одного игрока. `None` означает без ограничения,
    /// сплитовать можно, пока хватает денег.
    #[serde(default)]
    pub max_hands_per_player: Option<usize>,
}

impl TableConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: "Blackjack".to_string(),
            initial_cards: 2,
            max_hands_per_player: None,
        }
    }
}
