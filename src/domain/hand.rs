// src/domain/hand.rs

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;

/// Максимум очков, после которого рука "сгорает".
pub const BLACKJACK: u8 = 21;

/// Одна рука игрока: карты, ставка и флаг перебора.
///
/// `busted` пересчитывается при каждом изменении карт через методы `Hand`,
/// поэтому карты снаружи менять нельзя.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub(crate) cards: Vec<Card>,
    pub bet: Chips,
    pub(crate) busted: bool,
}

impl Hand {
    pub fn new(bet: Chips) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            busted: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        if self.total() > BLACKJACK {
            self.busted = true;
        }
    }

    /// Сумма очков руки.
    ///
    /// Тузы сначала идут как 11; пока сумма больше 21 и есть туз,
    /// считающийся за 11, он понижается до 1.
    pub fn total(&self) -> u8 {
        let (total, _) = self.total_with_soft_aces();
        total
    }

    /// Сумма плюс количество тузов, которые ещё считаются как 11.
    fn total_with_soft_aces(&self) -> (u8, usize) {
        let mut total: u32 = 0;
        let mut aces = 0;
        for card in &self.cards {
            total += u32::from(card.value());
            if card.is_ace() {
                aces += 1;
            }
        }
        while total > u32::from(BLACKJACK) && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        (total.min(u32::from(u8::MAX)) as u8, aces)
    }

    pub fn is_busted(&self) -> bool {
        self.busted
    }

    /// Выставить флаг перебора, если сумма больше 21. Снять флаг нельзя.
    pub fn mark_busted(&mut self) {
        if self.total() > BLACKJACK {
            self.busted = true;
        }
    }

    /// Мягкая рука: хотя бы один туз ещё идёт за 11.
    pub fn is_soft(&self) -> bool {
        let (_, soft_aces) = self.total_with_soft_aces();
        soft_aces > 0
    }

    /// Блэкджек: ровно две карты и 21 очко.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }

    /// Руку можно сплитовать: ровно две карты одинакового достоинства
    /// (масть не важна, K и 10 тоже считаются парой).
    pub fn is_splittable(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.value() == b.value())
    }

    /// Забрать вторую карту (для сплита).
    pub(crate) fn take_second_card(&mut self) -> Option<Card> {
        if self.cards.len() < 2 {
            return None;
        }
        let card = self.cards.remove(1);
        self.busted = self.total() > BLACKJACK;
        Some(card)
    }

    /// Очистить руку: без карт, без ставки, без перебора.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.bet = Chips::ZERO;
        self.busted = false;
    }
}

impl fmt::Display for Hand {
    /// Формат вида `Hand([10 of hearts, A of spades], Bet: 50, Busted: false)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(Card::long_name).collect();
        write!(
            f,
            "Hand([{}], Bet: {}, Busted: {})",
            cards.join(", "),
            self.bet,
            self.busted
        )
    }
}
