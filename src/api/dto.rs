use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::RoomNumber;

/// Ответ на создание комнаты.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomCreatedDto {
    pub room_number: RoomNumber,
    pub hostname: String,
}

/// Строка списка комнат в лобби (room_number → эта структура).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LobbyRoomDto {
    pub user_number: usize,
    pub hostname: String,
    #[serde(rename = "inGame")]
    pub in_game: bool,
}

/// Один пользователь в комнате.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomUserDto {
    pub username: String,
    pub ready: bool,
}

/// Снэпшот комнаты в состоянии лобби.
/// Ключи `user_info` — индексы мест в виде строк ("0", "1", …),
/// как их ждёт клиент.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomInfoDto {
    pub room_number: RoomNumber,
    pub user_number: usize,
    pub hostname: String,
    #[serde(rename = "inGame")]
    pub in_game: bool,
    pub user_info: BTreeMap<String, RoomUserDto>,
}

/// Цвет подсветки игрока на клиенте: серый — выбыл, зелёный — ходит,
/// жёлтый — ходит следующим, белый — остальные.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Grey,
    Green,
    Yellow,
    White,
}

/// Снэпшот партии для опрашивающего клиента.
///
/// Общая часть пересчитывается комнатой после каждой мутации;
/// `cards` (своя рука, в порядке отображения) подставляется
/// персонально при каждом запросе.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameInfoDto {
    pub game_end: bool,
    pub current_player: String,
    pub next_player: String,
    pub top_card: Card,
    pub cards: Vec<Card>,
    pub player_colors: Vec<PlayerColor>,
    pub player_card_nums: Vec<usize>,
    /// Итоговая таблица мест, заполняется при завершении партии.
    pub result: Option<String>,
}

/// Метаданные партии: раскладка имён по местам.
/// Ключи `usernames` — индексы мест строками, значения — имена.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameMetaDto {
    pub player_num: usize,
    pub index: usize,
    #[serde(flatten)]
    pub usernames: BTreeMap<String, String>,
}
