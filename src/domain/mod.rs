// src/domain/mod.rs

//! Доменная модель блэкджека: карты, колода, руки, игроки, конфиг стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod table;

// Базовые идентификаторы
pub type PlayerId = u64;
pub type HandIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use errors::*;
pub use hand::*;
pub use player::*;
pub use table::*;
