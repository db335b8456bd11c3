// src/domain/deck.rs

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::DomainError;
use crate::engine::RandomSource;

/// Колода: стопка добора (`cards`) и сброс (`discard_pile`).
///
/// Карта, взятая через `draw`, сразу попадает в сброс. Пока колода не
/// пересобиралась, `remaining_cards() + discarded_cards() == 52`.
/// Случайность приходит снаружи через `RandomSource`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    /// Стопка добора. Верх колоды — конец вектора.
    pub(crate) cards: Vec<Card>,
    pub(crate) discard_pile: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в каноническом порядке, без перемешивания.
    pub fn standard_52() -> Self {
        Deck {
            cards: Card::all().collect(),
            discard_pile: Vec::new(),
        }
    }

    /// Стандартная колода, сразу перемешанная.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        deck.shuffle(rng);
        deck
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn discarded_cards(&self) -> usize {
        self.discard_pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Перемешать стопку добора. На пустой колоде ничего не делает.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять верхнюю карту. Карта попадает в сброс.
    pub fn draw(&mut self) -> Result<Card, DomainError> {
        let card = self.cards.pop().ok_or(DomainError::EmptyDeck)?;
        self.discard_pile.push(card);
        Ok(card)
    }

    /// Положить карту наверх стопки добора.
    /// В одном наборе из 52 карт дубликатов быть не может.
    pub fn add_card(&mut self, card: Card) -> Result<(), DomainError> {
        if self.cards.contains(&card) {
            return Err(DomainError::InvalidCard(card.long_name()));
        }
        self.cards.push(card);
        Ok(())
    }

    /// То же, что `add_card`, но карта задана строкой (`"Ah"`, `"10d"`).
    pub fn add_card_str(&mut self, card: &str) -> Result<(), DomainError> {
        let card: Card = card.parse()?;
        self.add_card(card)
    }

    /// Новая полная колода: 52 карты, пустой сброс, перемешивание.
    pub fn reset<R: RandomSource>(&mut self, rng: &mut R) {
        self.cards = Card::all().collect();
        self.discard_pile.clear();
        self.shuffle(rng);
    }

    /// Вернуть сброс в стопку добора и перемешать.
    pub fn recycle_discard_pile<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), DomainError> {
        if self.discard_pile.is_empty() {
            return Err(DomainError::EmptyDiscardPile);
        }
        self.cards.append(&mut self.discard_pile);
        self.shuffle(rng);
        Ok(())
    }
}
