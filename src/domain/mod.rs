//! Доменная модель UNO: карты, колода, игрок.

pub mod card;
pub mod deck;
pub mod player;

// Базовые идентификаторы.
pub type RoomNumber = u8;
pub type SeatIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use player::*;
