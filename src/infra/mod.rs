// src/infra/mod.rs

//! Инфраструктурный слой вокруг движка:
//! - генерация id игроков;
//! - RNG-реализации для колоды.

pub mod ids;
pub mod rng;

pub use ids::*;
pub use rng::*;
