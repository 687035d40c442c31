//! Движок одной партии UNO.
//!
//! Высокоуровневый объект: [`Game`].
//! Основные операции:
//!   - `Game::new` – создать партию из списка имён
//!   - `Game::play` – сыграть карту (с эффектами R/S/D/D4)
//!   - `Game::draw` – взять карту из колоды
//!   - `Game::skip` – пропустить ход после взятия

pub mod errors;
pub mod game;

pub use errors::GameError;
pub use game::{Game, INITIAL_HAND_SIZE};

/// RNG интерфейс для engine. Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
