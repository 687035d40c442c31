//! Движок UNO-сессий: лобби, комнаты и пошаговая игровая логика.
//!
//! Крейт не знает ничего про транспорт (HTTP и т.п.): внешний слой
//! резолвит username, парсит примитивные аргументы и вызывает методы
//! [`lobby::UnoService`], а обратно получает готовые снэпшоты из
//! `api::dto` либо ошибку.
//!
//! Слои снизу вверх:
//! - `domain` — карты, колода, игрок;
//! - `engine` — правила одной партии (`Game`);
//! - `lobby` — комнаты, регистрация имён, конкурентный фасад;
//! - `api` — DTO и классификация ошибок для транспорта;
//! - `infra` — реализации RNG.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod lobby;
