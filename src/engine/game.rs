use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color, Symbol};
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::errors::GameError;
use crate::engine::RandomSource;

/// Сколько карт раздаётся каждому игроку на старте.
pub const INITIAL_HAND_SIZE: usize = 7;

/// Состояние одной партии UNO.
///
/// Партия создаётся из списка имён (порядок списка = порядок мест),
/// живёт до `game_end` и затем остаётся доступной только для чтения.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub deck: Deck,
    pub players: Vec<Player>,
    /// Направление хода: +1 или -1.
    pub direction: i8,
    /// Место игрока, чей сейчас ход.
    pub current: SeatIndex,
    pub top_card: Card,
    pub game_end: bool,
    /// Имена в порядке выбывания: кто первым опустошил руку — первый.
    /// При завершении партии дополняется оставшимися (в порядке мест).
    pub rank_list: Vec<String>,
}

impl Game {
    /// Новая партия: перемешанная колода, по 7 карт каждому,
    /// верхняя карта снимается с колоды.
    pub fn new<R: RandomSource>(usernames: &[String], rng: &mut R) -> Result<Self, GameError> {
        if usernames.len() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        let mut deck = Deck::standard_108();
        rng.shuffle(&mut deck.cards);

        let mut players: Vec<Player> = usernames
            .iter()
            .enumerate()
            .map(|(seat, name)| Player::new(name.clone(), seat))
            .collect();

        for player in players.iter_mut() {
            for _ in 0..INITIAL_HAND_SIZE {
                let card = deck.draw_one().ok_or(GameError::DeckExhausted)?;
                player.add_card(card);
            }
        }

        let top_card = deck.draw_one().ok_or(GameError::DeckExhausted)?;

        Ok(Self {
            deck,
            players,
            direction: 1,
            current: 0,
            top_card,
            game_end: false,
            rank_list: Vec::new(),
        })
    }

    /// Взять карту из колоды. Ход при этом НЕ передаётся:
    /// после взятия игрок либо играет карту, либо пропускает ход.
    pub fn draw(&mut self, seat: SeatIndex) -> Result<(), GameError> {
        self.ensure_turn(seat)?;
        if self.players[seat].drew {
            return Err(GameError::AlreadyDrew);
        }
        let card = self.deck.draw_one().ok_or(GameError::DeckExhausted)?;
        self.players[seat].add_card(card);
        self.players[seat].drew = true;
        Ok(())
    }

    /// Пропустить ход. Разрешено только после взятия карты в этом ходу.
    pub fn skip(&mut self, seat: SeatIndex) -> Result<(), GameError> {
        self.ensure_turn(seat)?;
        if !self.players[seat].drew {
            return Err(GameError::HaventDrawn);
        }
        self.current = self.next_index();
        self.players[seat].drew = false;
        Ok(())
    }

    /// Сыграть карту (цвет, символ) из руки; для wild-карт обязателен
    /// выбранный цвет `wild_color`.
    ///
    /// Порядок проверок: ход → карта в руке → совместимость с верхней
    /// картой → цвет для wild → хватает ли колоды на штраф D/D4.
    /// Любая ошибка оставляет партию нетронутой.
    pub fn play(
        &mut self,
        seat: SeatIndex,
        color: Color,
        symbol: Symbol,
        wild_color: Option<Color>,
    ) -> Result<(), GameError> {
        self.ensure_turn(seat)?;

        if !self.players[seat].has_card(color, symbol) {
            return Err(GameError::CardNotInHand);
        }
        let candidate = Card::new(color, symbol);
        if !candidate.playable(&self.top_card) {
            return Err(GameError::NotPlayable);
        }
        if color == Color::Wild && wild_color.is_none() {
            return Err(GameError::MissingWildColor);
        }
        // Штрафные карты раздаются в этой же операции; проверяем колоду
        // заранее, чтобы отказ не оставил частично применённый ход.
        if self.deck.len() < symbol.draw_penalty() {
            return Err(GameError::DeckExhausted);
        }

        let mut card = self.players[seat]
            .remove_card(color, symbol)
            .ok_or(GameError::CardNotInHand)?;
        if color == Color::Wild {
            if let Some(chosen) = wild_color {
                card.color = chosen;
            }
        }
        self.top_card = card;

        match card.symbol {
            Symbol::Reverse => {
                // В партии на двоих Reverse только меняет направление,
                // неявного пропуска хода нет. Так задумано.
                self.direction = -self.direction;
            }
            Symbol::Skip => {
                // Один дополнительный шаг: следующий игрок пропускается
                // обязательным продвижением хода в конце операции.
                self.current = self.next_index();
            }
            Symbol::DrawTwo | Symbol::DrawFour => {
                let target = self.next_index();
                for _ in 0..card.symbol.draw_penalty() {
                    let drawn = self.deck.draw_one().ok_or(GameError::DeckExhausted)?;
                    self.players[target].add_card(drawn);
                }
            }
            _ => {}
        }

        self.players[seat].drew = false;

        if !self.players[seat].still_in_game() {
            self.rank_list.push(self.players[seat].username.clone());
        }

        self.current = self.next_index();
        self.check_end_game();
        Ok(())
    }

    /// Игрок, чей сейчас ход.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Игрок, который будет ходить следующим.
    pub fn next_player(&self) -> &Player {
        &self.players[self.next_index()]
    }

    pub fn player(&self, seat: SeatIndex) -> Result<&Player, GameError> {
        self.players.get(seat).ok_or(GameError::InvalidSeat(seat))
    }

    /// Место игрока по имени (None, если такого в партии нет).
    pub fn seat_of(&self, username: &str) -> Option<SeatIndex> {
        self.players
            .iter()
            .position(|p| p.username == username)
    }

    /// Правило следующего места: шаг на `direction` по кругу,
    /// пустые руки пропускаются. Вызывается только пока в партии
    /// есть хотя бы одна непустая рука (иначе зациклится) —
    /// это гарантируется проверкой `game_end`.
    pub fn next_index(&self) -> SeatIndex {
        let n = self.players.len() as i64;
        let mut idx = self.current as i64;
        loop {
            idx = (idx + self.direction as i64).rem_euclid(n);
            if self.players[idx as usize].still_in_game() {
                return idx as usize;
            }
        }
    }

    fn ensure_turn(&self, seat: SeatIndex) -> Result<(), GameError> {
        if self.game_end {
            return Err(GameError::GameFinished);
        }
        if seat >= self.players.len() {
            return Err(GameError::InvalidSeat(seat));
        }
        if seat != self.current {
            return Err(GameError::NotCurrentPlayer);
        }
        Ok(())
    }

    /// Партия заканчивается, когда с картами остаётся не больше одного
    /// игрока; оставшиеся дописываются в rank_list в порядке мест.
    fn check_end_game(&mut self) {
        let with_cards = self.players.iter().filter(|p| p.still_in_game()).count();
        if with_cards <= 1 {
            self.game_end = true;
            for player in &self.players {
                if player.still_in_game() {
                    self.rank_list.push(player.username.clone());
                }
            }
        }
    }
}
