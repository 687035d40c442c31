//! Внешний контракт движка: DTO-снэпшоты и классификация ошибок.
//!
//! Транспортный слой (HTTP и т.п.) сериализует эти структуры как есть
//! и превращает `ApiError` в статус ответа.

pub mod dto;
pub mod errors;

pub use dto::*;
pub use errors::ApiError;
