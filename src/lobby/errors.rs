use crate::domain::RoomNumber;
use crate::engine::GameError;

use thiserror::Error;

/// Ошибки уровня лобби (комнаты, регистрация имён).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LobbyError {
    #[error("Это имя пользователя уже занято")]
    UsernameTaken,

    #[error("Имя пользователя должно содержать минимум три символа")]
    UsernameTooShort,

    #[error("Пользователь {0} не найден")]
    UserNotFound(String),

    #[error("Комната {0} не найдена")]
    RoomNotFound(RoomNumber),

    #[error("Свободных номеров комнат не осталось")]
    NoFreeRooms,

    #[error("Комната заполнена")]
    RoomFull,

    #[error("Вы уже находитесь в комнате")]
    AlreadyInRoom,

    #[error("Вы не находитесь в комнате")]
    NotInRoom,

    #[error("Игра в этой комнате уже началась")]
    GameAlreadyStarted,

    #[error("Только хост может начать игру")]
    NotHost,

    #[error("Для старта нужно минимум два игрока")]
    NotEnoughPlayers,

    #[error("Игрок {0} ещё не готов")]
    PlayerNotReady(String),

    #[error("Игра ещё не началась")]
    GameNotStarted,

    #[error("Вы не участвуете в этой партии")]
    NotInGame,

    /// Проброшенная ошибка движка партии.
    #[error(transparent)]
    Game(#[from] GameError),
}
