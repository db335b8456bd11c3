// src/engine/validation.rs

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::HandIndex;
use crate::engine::outcome::Rejection;

/// Хватает ли у игрока денег на `amount`.
pub fn money_check(amount: Chips, player: &Player) -> Result<(), Rejection> {
    if amount > player.balance() {
        return Err(Rejection::InsufficientFunds {
            needed: amount,
            available: player.balance(),
        });
    }
    Ok(())
}

/// Есть ли у игрока рука с таким индексом.
pub fn hand_index_check(hand_index: HandIndex, player: &Player) -> Result<(), Rejection> {
    let hands = player.hands().len();
    if hand_index >= hands {
        return Err(Rejection::InvalidHandIndex {
            index: hand_index,
            hands,
        });
    }
    Ok(())
}

/// Ставка должна быть положительной.
pub fn bet_amount_check(amount: Chips) -> Result<(), Rejection> {
    if amount.is_zero() {
        return Err(Rejection::InvalidBetAmount);
    }
    Ok(())
}

/// Можно ли сплитовать руку `hand_index`. Индекс должен быть уже проверен.
pub fn split_check(player: &Player, hand_index: HandIndex) -> Result<(), Rejection> {
    match player.hand(hand_index) {
        Some(hand) if hand.is_splittable() => Ok(()),
        Some(_) => Err(Rejection::NotSplittable),
        None => hand_index_check(hand_index, player),
    }
}

/// Не превышен ли лимит рук у игрока. Без лимита проверка всегда проходит.
pub fn hand_limit_check(player: &Player, max_hands: Option<usize>) -> Result<(), Rejection> {
    match max_hands {
        Some(max) if player.hands().len() >= max => Err(Rejection::HandLimitReached(max)),
        _ => Ok(()),
    }
}
