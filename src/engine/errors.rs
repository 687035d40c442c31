use crate::domain::SeatIndex;

use thiserror::Error;

/// Ошибки движка одной партии.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Место {0} не существует в этой партии")]
    InvalidSeat(SeatIndex),

    #[error("Сейчас не ваш ход")]
    NotCurrentPlayer,

    #[error("Вы уже взяли карту в этом ходу")]
    AlreadyDrew,

    #[error("Сначала нужно взять карту из колоды")]
    HaventDrawn,

    #[error("Такой карты нет в руке")]
    CardNotInHand,

    #[error("Эту карту нельзя положить на верхнюю карту стола")]
    NotPlayable,

    #[error("Для wild-карты нужно выбрать цвет")]
    MissingWildColor,

    #[error("В колоде не осталось карт")]
    DeckExhausted,

    #[error("Партия уже завершена")]
    GameFinished,

    #[error("Недостаточно игроков для партии")]
    NotEnoughPlayers,
}
