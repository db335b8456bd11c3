// src/api/dto.rs

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Hand;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// DTO одной руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandViewDto {
    pub cards: Vec<Card>,
    pub total: u8,
    pub bet: Chips,
    pub busted: bool,
    /// Есть туз, который ещё считается за 11.
    pub soft: bool,
    pub blackjack: bool,
}

impl From<&Hand> for HandViewDto {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            total: hand.total(),
            bet: hand.bet,
            busted: hand.is_busted(),
            soft: hand.is_soft(),
            blackjack: hand.is_blackjack(),
        }
    }
}

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub name: String,
    pub balance: Chips,
    pub hands: Vec<HandViewDto>,
}

impl From<&Player> for PlayerViewDto {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name.clone(),
            balance: player.balance(),
            hands: player.hands().iter().map(HandViewDto::from).collect(),
        }
    }
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub name: String,
    pub remaining_cards: usize,
    pub discarded_cards: usize,
    pub players: Vec<PlayerViewDto>,
}
