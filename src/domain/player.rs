// src/domain/player.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::errors::DomainError;
use crate::domain::hand::Hand;
use crate::domain::PlayerId;

/// Игрок за столом: баланс и одна или несколько рук.
///
/// Рука с индексом 0 — основная, она есть всегда.
/// Дополнительные руки появляются после сплита.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub(crate) balance: Chips,
    pub(crate) hands: Vec<Hand>,
}

impl Player {
    /// Id выдаёт стол (`GameTable::new_player`) или вызывающий код.
    pub fn new(id: PlayerId, name: impl Into<String>, balance: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            hands: vec![Hand::default()],
        }
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    fn check_hand_index(&self, index: usize) -> Result<(), DomainError> {
        if index >= self.hands.len() {
            return Err(DomainError::InvalidHandIndex {
                index,
                hands: self.hands.len(),
            });
        }
        Ok(())
    }

    /// Добрать `count` карт из колоды в руку `hand_index`.
    ///
    /// Если колода кончилась посреди добора, останавливаемся (это не ошибка).
    /// Возвращает, сколько карт реально выдано.
    pub fn draw_cards(
        &mut self,
        deck: &mut Deck,
        count: usize,
        hand_index: usize,
    ) -> Result<usize, DomainError> {
        self.check_hand_index(hand_index)?;

        let mut dealt = 0;
        for _ in 0..count {
            if deck.is_empty() {
                log::warn!(
                    "player {} ({}): deck is empty, dealt {} of {} cards",
                    self.id,
                    self.name,
                    dealt,
                    count
                );
                break;
            }
            let card = deck.draw()?;
            log::debug!("player {} hand {} <- {}", self.id, hand_index, card);
            self.hands[hand_index].add_card(card);
            dealt += 1;
        }
        Ok(dealt)
    }

    /// Добавить новую руку с начальной ставкой. Возвращает её индекс.
    pub fn add_hand(&mut self, bet: Chips) -> usize {
        self.hands.push(Hand::new(bet));
        self.hands.len() - 1
    }

    /// Удалить руку. Последнюю оставшуюся руку не удаляем.
    pub fn delete_hand(&mut self, hand_index: usize) -> Result<(), DomainError> {
        self.check_hand_index(hand_index)?;
        if self.hands.len() == 1 {
            log::warn!(
                "player {} ({}): refusing to delete the last hand",
                self.id,
                self.name
            );
            return Ok(());
        }
        self.hands.remove(hand_index);
        Ok(())
    }

    /// Подготовка к новому раунду: остаётся только пустая основная рука.
    pub fn reset_hands(&mut self) {
        self.hands.truncate(1);
        match self.hands.first_mut() {
            Some(hand) => hand.reset(),
            None => self.hands.push(Hand::default()),
        }
    }

    /// Изменить баланс на `delta` (отрицательное — списание).
    /// Баланс в минус не уходит: в этом случае ошибка и баланс не меняется.
    pub fn add_money(&mut self, delta: i64) -> Result<Chips, DomainError> {
        let balance = self
            .balance
            .checked_add_signed(delta)
            .ok_or(DomainError::InsufficientFunds {
                balance: self.balance,
                delta,
            })?;
        self.balance = balance;
        Ok(balance)
    }

    /// Поставить `amount`: списать с баланса и вернуть сумму.
    ///
    /// `None`, если ставка нулевая или больше баланса; баланс не меняется.
    pub fn bet(&mut self, amount: Chips) -> Option<Chips> {
        if amount.is_zero() {
            log::warn!("player {}: bet amount must be greater than zero", self.id);
            return None;
        }
        match self.balance.checked_sub(amount) {
            Some(rest) => {
                self.balance = rest;
                Some(amount)
            }
            None => {
                log::warn!(
                    "player {}: insufficient funds for bet {} (balance {})",
                    self.id,
                    amount,
                    self.balance
                );
                None
            }
        }
    }

    /// Текстовое представление всех рук (для отладки и вывода).
    pub fn show_hands(&self) -> Vec<String> {
        self.hands.iter().map(|h| h.to_string()).collect()
    }
}
