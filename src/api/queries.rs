// src/api/queries.rs

use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::{GameTable, RandomSource};

use super::dto::{PlayerViewDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние стола.
    GetTable,

    /// Получить одного игрока.
    GetPlayer { player_id: PlayerId },

    /// Суммы очков всех рук игрока.
    SumOfHands { player_id: PlayerId },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(TableViewDto),
    Player(Option<PlayerViewDto>),
    Totals(Option<Vec<u8>>),
}

pub fn handle_query<R: RandomSource>(table: &GameTable<R>, query: Query) -> QueryResponse {
    match query {
        Query::GetTable => QueryResponse::Table(build_table_view(table)),
        Query::GetPlayer { player_id } => {
            QueryResponse::Player(table.player(player_id).map(PlayerViewDto::from))
        }
        Query::SumOfHands { player_id } => QueryResponse::Totals(table.sum_of_hands(player_id)),
    }
}

/// Сформировать DTO стола: колода + все игроки в порядке раздачи.
pub fn build_table_view<R: RandomSource>(table: &GameTable<R>) -> TableViewDto {
    TableViewDto {
        name: table.config().name.clone(),
        remaining_cards: table.deck().remaining_cards(),
        discarded_cards: table.deck().discarded_cards(),
        players: table.players().map(PlayerViewDto::from).collect(),
    }
}
