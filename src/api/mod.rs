// src/api/mod.rs

//! Внешний API движка блэкджека.
//!
//! Здесь описываются:
//! - команды (commands.rs): всё, что меняет состояние (посадить игрока, ставка, действие);
//! - запросы (queries.rs): только чтение;
//! - DTO (dto.rs): удобные структуры для вывода.

pub mod commands;
pub mod dto;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use queries::*;
