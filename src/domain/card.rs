// src/domain/card.rs

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,   // ♠
    Diamonds, // ♦
    Clubs,    // ♣
    Hearts,   // ♥
}

impl Suit {
    /// Все масти в каноническом порядке колоды.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    /// Полное имя масти: `spades`, `hearts` и т.д.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
        }
    }

    fn from_name(s: &str) -> Option<Suit> {
        match s.to_ascii_lowercase().as_str() {
            "spades" | "s" => Some(Suit::Spades),
            "diamonds" | "d" => Some(Suit::Diamonds),
            "clubs" | "c" => Some(Suit::Clubs),
            "hearts" | "h" => Some(Suit::Hearts),
            _ => None,
        }
    }
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Очки ранга в блэкджеке. Туз считается как 11,
    /// понижение до 1 делает `Hand::total`.
    pub const fn value(&self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            r => *r as u8,
        }
    }

    /// Текстовое обозначение ранга: `2`..`10`, `J`, `Q`, `K`, `A`.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_label(s: &str) -> Option<Rank> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

/// Карта из стандартной 52-карточной колоды. Неизменяемое значение.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Собрать карту из текстового ранга (`"10"`, `"K"`) и имени масти (`"hearts"`).
    pub fn try_from_parts(rank: &str, suit: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidCard(format!("{rank} of {suit}"));
        let rank = Rank::from_label(rank).ok_or_else(invalid)?;
        let suit = Suit::from_name(suit).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }

    /// Все 52 карты в каноническом порядке: 2♠ 2♦ 2♣ 2♥ 3♠ … A♥.
    pub fn all() -> impl Iterator<Item = Card> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
    }

    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Формат вида `10 of hearts`.
    pub fn long_name(&self) -> String {
        format!("{} of {}", self.rank.label(), self.suit.name())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Spades => 's',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ten => write!(f, "T"),
            r => write!(f, "{}", r.label()),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "Td", "10d", "7c".
impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidCard(s.to_string());
        if !s.is_ascii() || !(2..=3).contains(&s.len()) {
            return Err(invalid());
        }
        let (rank, suit) = s.split_at(s.len() - 1);
        let rank = Rank::from_label(rank).ok_or_else(invalid)?;
        let suit = Suit::from_name(suit).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}
