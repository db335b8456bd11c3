// src/engine/game_table.rs

use std::collections::BTreeMap;

use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::table::TableConfig;
use crate::domain::{HandIndex, PlayerId};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::errors::EngineError;
use crate::engine::history::{TableEventKind, TableHistory};
use crate::engine::outcome::{Rejection, TableOutcome};
use crate::engine::validation::{
    bet_amount_check, hand_index_check, hand_limit_check, money_check, split_check,
};
use crate::engine::RandomSource;
use crate::infra::{IdGenerator, SystemRng};

/// Стол блэкджека:
/// - хранит игроков по PlayerId (порядок раздачи = порядок id);
/// - владеет единственной колодой на всё время жизни стола;
/// - сам выдаёт id новым игрокам;
/// - пишет историю событий.
///
/// Все игровые действия возвращают `Result<TableOutcome, EngineError>`.
/// Отказ по правилам (`Rejected`) оставляет стол без изменений.
pub struct GameTable<R: RandomSource = SystemRng> {
    config: TableConfig,
    players: BTreeMap<PlayerId, Player>,
    deck: Deck,
    rng: R,
    ids: IdGenerator,
    history: TableHistory,
}

impl GameTable<SystemRng> {
    /// Стол с системным RNG.
    pub fn with_config(config: TableConfig) -> Self {
        Self::new(config, SystemRng)
    }
}

impl Default for GameTable<SystemRng> {
    fn default() -> Self {
        Self::with_config(TableConfig::default())
    }
}

impl<R: RandomSource> GameTable<R> {
    /// Создать пустой стол. Колода сразу перемешивается.
    pub fn new(config: TableConfig, mut rng: R) -> Self {
        let deck = Deck::shuffled(&mut rng);
        Self {
            config,
            players: BTreeMap::new(),
            deck,
            rng,
            ids: IdGenerator::new(),
            history: TableHistory::new(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Прямой доступ к колоде (подкладывание карт в тестах и т.п.).
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn history(&self) -> &TableHistory {
        &self.history
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(&player_id)
    }

    pub fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&player_id)
    }

    /// Игроки в порядке раздачи.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    // ------------------------------------------------------------------
    // Игроки
    // ------------------------------------------------------------------

    /// Создать игрока с новым id, не сажая его за стол.
    pub fn new_player(&mut self, name: impl Into<String>, balance: Chips) -> Player {
        Player::new(self.ids.next_player_id(), name, balance)
    }

    /// Создать игрока и сразу посадить за стол. Возвращает его id
    /// или причину, по которой стол игрока не принял.
    pub fn seat_player(
        &mut self,
        name: impl Into<String>,
        balance: Chips,
    ) -> Result<PlayerId, Rejection> {
        let player = self.new_player(name, balance);
        let id = player.id;
        match self.add_player(player) {
            TableOutcome::Applied => Ok(id),
            TableOutcome::Rejected(reason) => Err(reason),
        }
    }

    /// Посадить игрока. Игрок с уже занятым id не добавляется.
    pub fn add_player(&mut self, player: Player) -> TableOutcome {
        let player_id = player.id;
        if self.players.contains_key(&player_id) {
            log::warn!(
                "table '{}': player {} ({}) is already in the game",
                self.config.name,
                player_id,
                player.name
            );
            return self.reject(player_id, Rejection::DuplicatePlayer(player_id));
        }

        log::info!(
            "table '{}': player {} ({}) joined with balance {}",
            self.config.name,
            player_id,
            player.name,
            player.balance()
        );
        self.ids.observe(player_id);
        self.history.push(TableEventKind::PlayerAdded {
            player_id,
            name: player.name.clone(),
            balance: player.balance(),
        });
        self.players.insert(player_id, player);
        TableOutcome::Applied
    }

    pub fn remove_player(&mut self, player_id: PlayerId) -> TableOutcome {
        if self.players.remove(&player_id).is_none() {
            return self.reject(player_id, Rejection::PlayerNotFound(player_id));
        }
        log::info!("table '{}': player {} left", self.config.name, player_id);
        self.history.push(TableEventKind::PlayerRemoved { player_id });
        TableOutcome::Applied
    }

    // ------------------------------------------------------------------
    // Раздача и раунды
    // ------------------------------------------------------------------

    /// Перемешать колоду и раздать каждой руке каждого игрока по
    /// `config.initial_cards` карт. Руки перед раздачей очищаются.
    pub fn start_game(&mut self) -> Result<TableOutcome, EngineError> {
        self.deck.shuffle(&mut self.rng);
        self.history.push(TableEventKind::GameStarted {
            players: self.players.len(),
        });
        log::info!(
            "table '{}': dealing to {} player(s), {} card(s) left",
            self.config.name,
            self.players.len(),
            self.deck.remaining_cards()
        );

        let count = self.config.initial_cards;
        let ids: Vec<PlayerId> = self.players.keys().copied().collect();
        for player_id in ids {
            let hands = self.players.get(&player_id).map_or(0, |p| p.hands().len());
            for hand_index in 0..hands {
                if let Some(hand) = self
                    .players
                    .get_mut(&player_id)
                    .and_then(|p| p.hand_mut(hand_index))
                {
                    hand.reset();
                }
                self.deal(player_id, hand_index, count)?;
            }
        }
        Ok(TableOutcome::Applied)
    }

    /// Новый раунд: свежая колода и одна пустая рука у каждого игрока.
    /// История прошлого раунда отбрасывается.
    pub fn new_round(&mut self) {
        self.deck.reset(&mut self.rng);
        for player in self.players.values_mut() {
            player.reset_hands();
        }
        log::info!("table '{}': new round, deck reset", self.config.name);
        self.history.clear();
        self.history.push(TableEventKind::RoundReset);
    }

    /// Вернуть сброс в колоду.
    pub fn recycle_discard_pile(&mut self) -> Result<(), EngineError> {
        self.deck.recycle_discard_pile(&mut self.rng)?;
        let remaining = self.deck.remaining_cards();
        log::info!(
            "table '{}': discard pile recycled, {} card(s) in deck",
            self.config.name,
            remaining
        );
        self.history
            .push(TableEventKind::DiscardRecycled { remaining });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Ставки и действия
    // ------------------------------------------------------------------

    /// Ставка на руку: списывается с баланса, ставка руки перезаписывается.
    pub fn add_pot(
        &mut self,
        player_id: PlayerId,
        amount: Chips,
        hand_index: HandIndex,
    ) -> Result<TableOutcome, EngineError> {
        let checked = self.player_checked(player_id).and_then(|p| {
            bet_amount_check(amount)?;
            money_check(amount, p)?;
            hand_index_check(hand_index, p)
        });
        if let Err(reason) = checked {
            return Ok(self.reject(player_id, reason));
        }

        let player = self.player_entry(player_id)?;
        let staked = player
            .bet(amount)
            .ok_or(EngineError::Internal("ставка отклонена после валидации"))?;
        player.hands[hand_index].bet = staked;
        let balance_after = player.balance();

        log::info!(
            "table '{}': player {} bet {} on hand {}",
            self.config.name,
            player_id,
            staked,
            hand_index
        );
        self.history.push(TableEventKind::BetPlaced {
            player_id,
            hand_index,
            amount: staked,
            balance_after,
        });
        Ok(TableOutcome::Applied)
    }

    /// Double: доставить ещё столько же, сколько стоит на руке, и взять ровно одну карту.
    pub fn double(
        &mut self,
        player_id: PlayerId,
        hand_index: HandIndex,
    ) -> Result<TableOutcome, EngineError> {
        let checked = self.player_checked(player_id).and_then(|p| {
            hand_index_check(hand_index, p)?;
            money_check(p.hands()[hand_index].bet, p)?;
            Ok(p.hands()[hand_index].bet)
        });
        let bet = match checked {
            Ok(bet) => bet,
            Err(reason) => return Ok(self.reject(player_id, reason)),
        };

        let player = self.player_entry(player_id)?;
        player.add_money(-signed(bet)?)?;
        player.hands[hand_index].bet = bet + bet;

        self.deal(player_id, hand_index, 1)?;
        Ok(self.acted(player_id, hand_index, PlayerActionKind::Double))
    }

    /// Split: пара разбивается на две руки с одинаковой ставкой,
    /// в каждую руку добирается по одной карте.
    pub fn split(
        &mut self,
        player_id: PlayerId,
        hand_index: HandIndex,
    ) -> Result<TableOutcome, EngineError> {
        let max_hands = self.config.max_hands_per_player;
        let checked = self.player_checked(player_id).and_then(|p| {
            hand_index_check(hand_index, p)?;
            split_check(p, hand_index)?;
            hand_limit_check(p, max_hands)?;
            money_check(p.hands()[hand_index].bet, p)?;
            Ok(p.hands()[hand_index].bet)
        });
        let bet = match checked {
            Ok(bet) => bet,
            Err(reason) => return Ok(self.reject(player_id, reason)),
        };

        let player = self.player_entry(player_id)?;
        player.add_money(-signed(bet)?)?;
        let new_index = player.add_hand(bet);
        let moved = player.hands[hand_index]
            .take_second_card()
            .ok_or(EngineError::Internal("в сплитуемой руке нет второй карты"))?;
        player.hands[new_index].add_card(moved);

        self.deal(player_id, hand_index, 1)?;
        self.deal(player_id, new_index, 1)?;
        Ok(self.acted(player_id, hand_index, PlayerActionKind::Split))
    }

    /// Hit: одна карта в руку. Флаг перебора, если выставлен, остаётся.
    pub fn hit(
        &mut self,
        player_id: PlayerId,
        hand_index: HandIndex,
    ) -> Result<TableOutcome, EngineError> {
        let checked = self
            .player_checked(player_id)
            .and_then(|p| hand_index_check(hand_index, p));
        if let Err(reason) = checked {
            return Ok(self.reject(player_id, reason));
        }

        self.deal(player_id, hand_index, 1)?;
        Ok(self.acted(player_id, hand_index, PlayerActionKind::Hit))
    }

    /// Stay: карты не двигаются. Рука с суммой > 21 помечается как перебор.
    pub fn stay(
        &mut self,
        player_id: PlayerId,
        hand_index: HandIndex,
    ) -> Result<TableOutcome, EngineError> {
        let checked = self
            .player_checked(player_id)
            .and_then(|p| hand_index_check(hand_index, p));
        if let Err(reason) = checked {
            return Ok(self.reject(player_id, reason));
        }

        let player = self.player_entry(player_id)?;
        player.hands[hand_index].mark_busted();
        Ok(self.acted(player_id, hand_index, PlayerActionKind::Stay))
    }

    /// Применить действие игрока.
    pub fn apply_action(&mut self, action: PlayerAction) -> Result<TableOutcome, EngineError> {
        let PlayerAction {
            player_id,
            hand_index,
            kind,
        } = action;
        match kind {
            PlayerActionKind::Hit => self.hit(player_id, hand_index),
            PlayerActionKind::Stay => self.stay(player_id, hand_index),
            PlayerActionKind::Double => self.double(player_id, hand_index),
            PlayerActionKind::Split => self.split(player_id, hand_index),
        }
    }

    /// Суммы очков всех рук игрока, по порядку рук.
    pub fn sum_of_hands(&self, player_id: PlayerId) -> Option<Vec<u8>> {
        self.players
            .get(&player_id)
            .map(|p| p.hands().iter().map(|h| h.total()).collect())
    }

    // ------------------------------------------------------------------
    // Внутреннее
    // ------------------------------------------------------------------

    fn player_checked(&self, player_id: PlayerId) -> Result<&Player, Rejection> {
        self.players
            .get(&player_id)
            .ok_or(Rejection::PlayerNotFound(player_id))
    }

    /// Игрок, уже прошедший валидацию.
    fn player_entry(&mut self, player_id: PlayerId) -> Result<&mut Player, EngineError> {
        self.players
            .get_mut(&player_id)
            .ok_or(EngineError::Internal("игрок пропал после валидации"))
    }

    /// Выдать `count` карт в руку и записать их в историю.
    /// Если колода кончилась, игрок сам остановит добор.
    fn deal(
        &mut self,
        player_id: PlayerId,
        hand_index: HandIndex,
        count: usize,
    ) -> Result<usize, EngineError> {
        let player = self
            .players
            .get_mut(&player_id)
            .ok_or(EngineError::Internal("игрок пропал после валидации"))?;

        let before = player.hands().get(hand_index).map_or(0, |h| h.len());
        let dealt = player.draw_cards(&mut self.deck, count, hand_index)?;
        for &card in &player.hands()[hand_index].cards()[before..] {
            self.history.push(TableEventKind::CardDealt {
                player_id,
                hand_index,
                card,
            });
        }
        Ok(dealt)
    }

    fn acted(
        &mut self,
        player_id: PlayerId,
        hand_index: HandIndex,
        action: PlayerActionKind,
    ) -> TableOutcome {
        let (total_after, busted) = self
            .players
            .get(&player_id)
            .and_then(|p| p.hand(hand_index))
            .map_or((0, false), |h| (h.total(), h.is_busted()));

        log::info!(
            "table '{}': player {} {:?} on hand {} -> total {}{}",
            self.config.name,
            player_id,
            action,
            hand_index,
            total_after,
            if busted { " (busted)" } else { "" }
        );
        self.history.push(TableEventKind::PlayerActed {
            player_id,
            hand_index,
            action,
            total_after,
            busted,
        });
        TableOutcome::Applied
    }

    fn reject(&mut self, player_id: PlayerId, reason: Rejection) -> TableOutcome {
        log::warn!(
            "table '{}': player {}: {}",
            self.config.name,
            player_id,
            reason
        );
        self.history.push(TableEventKind::ActionRejected {
            player_id,
            reason: reason.clone(),
        });
        TableOutcome::Rejected(reason)
    }
}

/// Сумма ставки как отрицательная дельта баланса.
fn signed(amount: Chips) -> Result<i64, EngineError> {
    i64::try_from(amount.0).map_err(|_| EngineError::Internal("сумма не помещается в i64"))
}
