// src/lib.rs

//! Движок одного стола блэкджека.
//!
//! Карты, колода со сбросом, руки со ставками, игроки и стол,
//! который управляет раздачей и действиями hit/stay/double/split.
//! Расчёт выигрышей против дилера сюда не входит.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
