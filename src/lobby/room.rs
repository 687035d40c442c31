use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::dto::{GameInfoDto, GameMetaDto, LobbyRoomDto, PlayerColor, RoomInfoDto, RoomUserDto};
use crate::domain::card::{Color, Symbol};
use crate::domain::RoomNumber;
use crate::engine::{Game, RandomSource};
use crate::lobby::errors::LobbyError;

/// Максимум пользователей в одной комнате.
pub const MAX_ROOM_USERS: usize = 10;

/// Пользователь в составе комнаты. Флаг готовности живёт здесь:
/// вне комнаты он не имеет смысла и сбрасывается при входе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomUser {
    pub username: String,
    pub ready: bool,
}

/// Результат выхода пользователя из комнаты.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuitOutcome {
    /// В комнате остались люди (хост при необходимости уже сменён).
    Remaining,
    /// Комната опустела — реестр должен снести её и вернуть номер в пул.
    Empty,
}

/// Комната: состав, хост и (во время игры) партия.
///
/// Два состояния: лобби (`in_game == false`) и игра. Снэпшоты
/// `room_info` / `game_info` пересчитываются сразу после каждой
/// мутации — читатели (опрашивающие клиенты) получают клон без
/// пересчёта на пути чтения.
#[derive(Debug)]
pub struct Room {
    pub room_number: RoomNumber,
    pub users: Vec<RoomUser>,
    pub hostname: String,
    pub in_game: bool,
    /// Партия. После завершения остаётся доступной для чтения
    /// до следующего старта.
    pub game: Option<Game>,
    pub room_info: RoomInfoDto,
    pub game_info: Option<GameInfoDto>,
}

impl Room {
    /// Новая комната: создатель — единственный участник и хост.
    pub fn new(room_number: RoomNumber, hostname: String) -> Self {
        let mut room = Self {
            room_number,
            users: vec![RoomUser {
                username: hostname.clone(),
                ready: false,
            }],
            hostname,
            in_game: false,
            game: None,
            room_info: RoomInfoDto {
                room_number,
                user_number: 0,
                hostname: String::new(),
                in_game: false,
                user_info: BTreeMap::new(),
            },
            game_info: None,
        };
        room.refresh_room_info();
        room
    }

    pub fn is_host(&self, username: &str) -> bool {
        self.hostname == username
    }

    /// Короткая сводка для списка комнат в лобби.
    pub fn lobby_summary(&self) -> LobbyRoomDto {
        LobbyRoomDto {
            user_number: self.users.len(),
            hostname: self.hostname.clone(),
            in_game: self.in_game,
        }
    }

    /// Добавить пользователя. Готовность нового участника сброшена.
    pub fn join_user(&mut self, username: &str) -> Result<(), LobbyError> {
        if self.in_game {
            return Err(LobbyError::GameAlreadyStarted);
        }
        if self.users.len() >= MAX_ROOM_USERS {
            return Err(LobbyError::RoomFull);
        }
        self.users.push(RoomUser {
            username: username.to_string(),
            ready: false,
        });
        self.refresh_room_info();
        Ok(())
    }

    /// Убрать пользователя из состава. Если ушёл хост и кто-то остался,
    /// хостом становится первый в списке.
    pub fn quit_user(&mut self, username: &str) -> QuitOutcome {
        if let Some(pos) = self.users.iter().position(|u| u.username == username) {
            self.users.remove(pos);
        }
        if self.users.is_empty() {
            return QuitOutcome::Empty;
        }
        if self.hostname == username {
            self.hostname = self.users[0].username.clone();
        }
        self.refresh_room_info();
        QuitOutcome::Remaining
    }

    /// Переключить флаг готовности пользователя.
    pub fn toggle_ready(&mut self, username: &str) -> Result<(), LobbyError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.username == username)
            .ok_or(LobbyError::NotInRoom)?;
        user.ready = !user.ready;
        self.refresh_room_info();
        Ok(())
    }

    /// Запустить партию. Предусловия (хост, состав, готовность)
    /// проверяет вызывающий; порядок мест = порядок списка.
    pub fn start_game<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), LobbyError> {
        let names: Vec<String> = self.users.iter().map(|u| u.username.clone()).collect();
        let game = Game::new(&names, rng)?;
        self.game = Some(game);
        self.in_game = true;
        self.refresh_room_info();
        self.refresh_game_info();
        tracing::info!(room = self.room_number, players = names.len(), "партия началась");
        Ok(())
    }

    /// Сыграть карту от имени пользователя; при завершении партии
    /// комната возвращается в состояние лобби.
    pub fn play_card(
        &mut self,
        username: &str,
        color: Color,
        symbol: Symbol,
        wild_color: Option<Color>,
    ) -> Result<(), LobbyError> {
        let game = self.game.as_mut().ok_or(LobbyError::GameNotStarted)?;
        let seat = game.seat_of(username).ok_or(LobbyError::NotInGame)?;
        game.play(seat, color, symbol, wild_color)?;
        let ended = game.game_end;
        self.refresh_game_info();
        if ended && self.in_game {
            self.finish_game();
        }
        Ok(())
    }

    /// Взять карту из колоды.
    pub fn draw_card(&mut self, username: &str) -> Result<(), LobbyError> {
        let game = self.game.as_mut().ok_or(LobbyError::GameNotStarted)?;
        let seat = game.seat_of(username).ok_or(LobbyError::NotInGame)?;
        game.draw(seat)?;
        self.refresh_game_info();
        Ok(())
    }

    /// Пропустить ход (после взятия карты).
    pub fn skip_card(&mut self, username: &str) -> Result<(), LobbyError> {
        let game = self.game.as_mut().ok_or(LobbyError::GameNotStarted)?;
        let seat = game.seat_of(username).ok_or(LobbyError::NotInGame)?;
        game.skip(seat)?;
        self.refresh_game_info();
        Ok(())
    }

    /// Персональный снэпшот партии: общая часть плюс своя рука
    /// в порядке отображения.
    pub fn game_info_for(&self, username: &str) -> Result<GameInfoDto, LobbyError> {
        let game = self.game.as_ref().ok_or(LobbyError::GameNotStarted)?;
        let mut info = self
            .game_info
            .clone()
            .ok_or(LobbyError::GameNotStarted)?;
        let seat = game.seat_of(username).ok_or(LobbyError::NotInGame)?;
        info.cards = game.players[seat].sorted_hand();
        Ok(info)
    }

    /// Метаданные партии: имена по местам и место запрашивающего.
    pub fn game_meta_for(&self, username: &str) -> Result<GameMetaDto, LobbyError> {
        let game = self.game.as_ref().ok_or(LobbyError::GameNotStarted)?;
        let index = game.seat_of(username).ok_or(LobbyError::NotInGame)?;
        let usernames: BTreeMap<String, String> = game
            .players
            .iter()
            .map(|p| (p.seat.to_string(), p.username.clone()))
            .collect();
        Ok(GameMetaDto {
            player_num: game.players.len(),
            index,
            usernames,
        })
    }

    /// Партия закончилась: сбросить готовность, вернуть комнату в лобби.
    /// Итоговая таблица уже записана в `game_info.result`.
    fn finish_game(&mut self) {
        for user in self.users.iter_mut() {
            user.ready = false;
        }
        self.in_game = false;
        self.refresh_room_info();
        tracing::info!(room = self.room_number, "партия завершена");
    }

    fn refresh_room_info(&mut self) {
        let user_info: BTreeMap<String, RoomUserDto> = self
            .users
            .iter()
            .enumerate()
            .map(|(idx, u)| {
                (
                    idx.to_string(),
                    RoomUserDto {
                        username: u.username.clone(),
                        ready: u.ready,
                    },
                )
            })
            .collect();
        self.room_info = RoomInfoDto {
            room_number: self.room_number,
            user_number: self.users.len(),
            hostname: self.hostname.clone(),
            in_game: self.in_game,
            user_info,
        };
    }

    fn refresh_game_info(&mut self) {
        let Some(game) = self.game.as_ref() else {
            self.game_info = None;
            return;
        };

        let next_seat = game.next_index();
        let player_colors: Vec<PlayerColor> = game
            .players
            .iter()
            .map(|p| {
                if !p.still_in_game() {
                    PlayerColor::Grey
                } else if p.seat == game.current {
                    PlayerColor::Green
                } else if p.seat == next_seat {
                    PlayerColor::Yellow
                } else {
                    PlayerColor::White
                }
            })
            .collect();
        let player_card_nums: Vec<usize> = game.players.iter().map(|p| p.hand.len()).collect();

        let result = if game.game_end {
            Some(render_result(&game.rank_list))
        } else {
            None
        };

        self.game_info = Some(GameInfoDto {
            game_end: game.game_end,
            current_player: game.current_player().username.clone(),
            next_player: game.next_player().username.clone(),
            top_card: game.top_card,
            // Своя рука подставляется персонально в game_info_for.
            cards: Vec::new(),
            player_colors,
            player_card_nums,
            result,
        });
    }
}

/// Итоговая таблица мест: "1. имя\n2. имя\n…".
fn render_result(rank_list: &[String]) -> String {
    rank_list
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}
