use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::RoomNumber;
use crate::lobby::errors::LobbyError;
use crate::lobby::room::Room;

/// Минимальная длина имени пользователя.
pub const MIN_USERNAME_LEN: usize = 3;

/// Пул номеров комнат: [0, 100).
pub const ROOM_NUMBER_POOL_SIZE: u8 = 100;

/// Реестр процесса: уникальность имён, привязка пользователь → комната
/// и таблица комнат с пулом свободных номеров.
///
/// Сам реестр не потокобезопасен — фасад (`UnoService`) держит его под
/// одним глобальным мьютексом; каждая комната дополнительно живёт под
/// собственным мьютексом, чтобы независимые комнаты не тормозили друг
/// друга.
pub struct Registry {
    /// username → номер комнаты, в которой пользователь состоит.
    users: HashMap<String, Option<RoomNumber>>,
    rooms: HashMap<RoomNumber, Arc<Mutex<Room>>>,
    /// Свободные номера; выдаётся всегда наименьший.
    free_numbers: BTreeSet<RoomNumber>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            rooms: HashMap::new(),
            free_numbers: (0..ROOM_NUMBER_POOL_SIZE).collect(),
        }
    }

    /// Проверить, что имя допустимо и свободно (само ничего не меняет).
    pub fn name_available(&self, username: &str) -> Result<(), LobbyError> {
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(LobbyError::UsernameTooShort);
        }
        if self.users.contains_key(username) {
            return Err(LobbyError::UsernameTaken);
        }
        Ok(())
    }

    /// Зарегистрировать новое имя.
    pub fn register(&mut self, username: &str) -> Result<(), LobbyError> {
        self.name_available(username)?;
        self.users.insert(username.to_string(), None);
        tracing::info!(user = username, "пользователь зарегистрирован");
        Ok(())
    }

    /// Атомарно переименовать пользователя. Вызывающий обязан заранее
    /// отвязать его от комнаты: запись переносится с room = None.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), LobbyError> {
        if !self.users.contains_key(old) {
            return Err(LobbyError::UserNotFound(old.to_string()));
        }
        self.name_available(new)?;
        self.users.remove(old);
        self.users.insert(new.to_string(), None);
        tracing::info!(from = old, to = new, "пользователь переименован");
        Ok(())
    }

    /// Удалить пользователя из реестра (от комнаты он уже отвязан).
    pub fn unregister(&mut self, username: &str) -> Result<(), LobbyError> {
        self.users
            .remove(username)
            .ok_or_else(|| LobbyError::UserNotFound(username.to_string()))?;
        tracing::info!(user = username, "пользователь удалён");
        Ok(())
    }

    /// Номер комнаты пользователя (None — пользователь в лобби).
    pub fn room_of(&self, username: &str) -> Result<Option<RoomNumber>, LobbyError> {
        self.users
            .get(username)
            .copied()
            .ok_or_else(|| LobbyError::UserNotFound(username.to_string()))
    }

    pub fn set_room(&mut self, username: &str, room: Option<RoomNumber>) {
        if let Some(entry) = self.users.get_mut(username) {
            *entry = room;
        }
    }

    /// Создать комнату под наименьшим свободным номером.
    pub fn allocate_room(&mut self, hostname: &str) -> Result<(RoomNumber, Arc<Mutex<Room>>), LobbyError> {
        let number = self
            .free_numbers
            .iter()
            .next()
            .copied()
            .ok_or(LobbyError::NoFreeRooms)?;
        self.free_numbers.remove(&number);
        let room = Arc::new(Mutex::new(Room::new(number, hostname.to_string())));
        self.rooms.insert(number, room.clone());
        tracing::info!(room = number, host = hostname, "комната создана");
        Ok((number, room))
    }

    /// Снести пустую комнату и вернуть номер в пул.
    pub fn remove_room(&mut self, number: RoomNumber) {
        if self.rooms.remove(&number).is_some() {
            self.free_numbers.insert(number);
            tracing::info!(room = number, "комната удалена");
        }
    }

    pub fn room(&self, number: RoomNumber) -> Option<Arc<Mutex<Room>>> {
        self.rooms.get(&number).cloned()
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomNumber, &Arc<Mutex<Room>>)> {
        self.rooms.iter().map(|(n, r)| (*n, r))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
