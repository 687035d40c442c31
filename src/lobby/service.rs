use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::dto::{GameInfoDto, GameMetaDto, LobbyRoomDto, RoomCreatedDto, RoomInfoDto};
use crate::domain::card::{Color, Symbol};
use crate::domain::RoomNumber;
use crate::engine::RandomSource;
use crate::infra::SystemRng;
use crate::lobby::errors::LobbyError;
use crate::lobby::registry::Registry;
use crate::lobby::room::{QuitOutcome, Room};

/// Конкурентный фасад движка: один метод на одно внешнее действие.
///
/// Дисциплина блокировок:
/// - реестр (имена, таблица комнат, пул номеров) — под одним глобальным
///   мьютексом;
/// - каждая комната — под собственным мьютексом за `Arc`;
/// - порядок захвата строго «реестр → комната», обратного не бывает;
/// - игровые действия отпускают реестр до захвата комнаты, поэтому
///   независимые комнаты играют параллельно.
///
/// Каждый метод — одна атомарная операция над памятью процесса:
/// при ошибке состояние не меняется.
pub struct UnoService {
    registry: Mutex<Registry>,
}

impl UnoService {
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Registry::new()),
        }
    }

    // --- Пользователи ---------------------------------------------------

    /// Зарегистрировать имя (глобально уникальное, минимум 3 символа).
    pub fn create_username(&self, username: &str) -> Result<(), LobbyError> {
        self.registry.lock().register(username)
    }

    /// Атомарно сменить имя. Как и в случае выхода, пользователь при
    /// этом покидает свою комнату (с миграцией хоста / сносом пустой).
    pub fn change_username(&self, username: &str, new_username: &str) -> Result<(), LobbyError> {
        let mut registry = self.registry.lock();
        // Сначала все проверки, потом мутации: неудачная смена имени
        // не должна выбрасывать пользователя из комнаты.
        registry.room_of(username)?;
        registry.name_available(new_username)?;
        detach_user(&mut registry, username)?;
        registry.rename(username, new_username)
    }

    /// Полный уход пользователя: выйти из комнаты и освободить имя.
    pub fn exit_signal(&self, username: &str) -> Result<(), LobbyError> {
        let mut registry = self.registry.lock();
        detach_user(&mut registry, username)?;
        registry.unregister(username)
    }

    // --- Комнаты --------------------------------------------------------

    /// Создать комнату; создатель становится хостом.
    pub fn create_room(&self, username: &str) -> Result<RoomCreatedDto, LobbyError> {
        let mut registry = self.registry.lock();
        if registry.room_of(username)?.is_some() {
            return Err(LobbyError::AlreadyInRoom);
        }
        let (room_number, _room) = registry.allocate_room(username)?;
        registry.set_room(username, Some(room_number));
        Ok(RoomCreatedDto {
            room_number,
            hostname: username.to_string(),
        })
    }

    /// Список комнат для экрана лобби.
    pub fn lobby_info(&self) -> BTreeMap<RoomNumber, LobbyRoomDto> {
        let registry = self.registry.lock();
        registry
            .rooms()
            .map(|(number, room)| (number, room.lock().lobby_summary()))
            .collect()
    }

    /// Войти в комнату по номеру.
    pub fn join_room(&self, username: &str, room_number: RoomNumber) -> Result<(), LobbyError> {
        let mut registry = self.registry.lock();
        if registry.room_of(username)?.is_some() {
            return Err(LobbyError::AlreadyInRoom);
        }
        let room = registry
            .room(room_number)
            .ok_or(LobbyError::RoomNotFound(room_number))?;
        room.lock().join_user(username)?;
        registry.set_room(username, Some(room_number));
        Ok(())
    }

    /// Выйти из своей комнаты.
    pub fn quit_room(&self, username: &str) -> Result<(), LobbyError> {
        let mut registry = self.registry.lock();
        if !detach_user(&mut registry, username)? {
            return Err(LobbyError::NotInRoom);
        }
        Ok(())
    }

    /// Снэпшот своей комнаты.
    pub fn room_info(&self, username: &str) -> Result<RoomInfoDto, LobbyError> {
        let room = self.room_of_user(username)?;
        let info = room.lock().room_info.clone();
        Ok(info)
    }

    /// Переключить готовность.
    pub fn user_ready(&self, username: &str) -> Result<(), LobbyError> {
        let room = self.room_of_user(username)?;
        let mut room = room.lock();
        room.toggle_ready(username)
    }

    // --- Игра -----------------------------------------------------------

    /// Запустить партию в своей комнате (с системным RNG).
    pub fn start_game(&self, username: &str) -> Result<(), LobbyError> {
        self.start_game_with(username, &mut SystemRng)
    }

    /// То же с внешним RNG — для тестов и воспроизводимых раздач.
    pub fn start_game_with<R: RandomSource>(
        &self,
        username: &str,
        rng: &mut R,
    ) -> Result<(), LobbyError> {
        let room = self.room_of_user(username)?;
        let mut room = room.lock();
        if !room.is_host(username) {
            return Err(LobbyError::NotHost);
        }
        if room.in_game {
            return Err(LobbyError::GameAlreadyStarted);
        }
        if room.users.len() < 2 {
            return Err(LobbyError::NotEnoughPlayers);
        }
        let unready = room
            .users
            .iter()
            .find(|u| !u.ready && !room.is_host(&u.username))
            .map(|u| u.username.clone());
        if let Some(name) = unready {
            return Err(LobbyError::PlayerNotReady(name));
        }
        room.start_game(rng)
    }

    /// Метаданные партии: имена по местам.
    pub fn game_meta_data(&self, username: &str) -> Result<GameMetaDto, LobbyError> {
        let room = self.room_of_user(username)?;
        let meta = room.lock().game_meta_for(username)?;
        Ok(meta)
    }

    /// Персональный снэпшот партии.
    pub fn game_info(&self, username: &str) -> Result<GameInfoDto, LobbyError> {
        let room = self.room_of_user(username)?;
        let info = room.lock().game_info_for(username)?;
        Ok(info)
    }

    /// Сыграть карту.
    pub fn play_card(
        &self,
        username: &str,
        color: Color,
        symbol: Symbol,
        wild_color: Option<Color>,
    ) -> Result<(), LobbyError> {
        let room = self.room_of_user(username)?;
        let mut room = room.lock();
        room.play_card(username, color, symbol, wild_color)
    }

    /// Взять карту из колоды.
    pub fn draw_card(&self, username: &str) -> Result<(), LobbyError> {
        let room = self.room_of_user(username)?;
        let mut room = room.lock();
        room.draw_card(username)
    }

    /// Пропустить ход.
    pub fn skip_card(&self, username: &str) -> Result<(), LobbyError> {
        let room = self.room_of_user(username)?;
        let mut room = room.lock();
        room.skip_card(username)
    }

    /// Найти комнату пользователя. Мьютекс реестра отпускается до того,
    /// как вызывающий возьмёт мьютекс комнаты.
    fn room_of_user(&self, username: &str) -> Result<Arc<Mutex<Room>>, LobbyError> {
        let registry = self.registry.lock();
        let number = registry.room_of(username)?.ok_or(LobbyError::NotInRoom)?;
        registry
            .room(number)
            .ok_or(LobbyError::RoomNotFound(number))
    }
}

impl Default for UnoService {
    fn default() -> Self {
        Self::new()
    }
}

/// Отвязать пользователя от его комнаты (если он в ней состоит).
/// Пустая комната сносится, её номер возвращается в пул.
/// Возвращает, состоял ли пользователь в комнате.
fn detach_user(registry: &mut Registry, username: &str) -> Result<bool, LobbyError> {
    let Some(number) = registry.room_of(username)? else {
        return Ok(false);
    };
    if let Some(room) = registry.room(number) {
        let outcome = room.lock().quit_user(username);
        if outcome == QuitOutcome::Empty {
            registry.remove_room(number);
        }
    }
    registry.set_room(username, None);
    Ok(true)
}
