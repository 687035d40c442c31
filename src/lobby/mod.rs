//! Лобби и сессии: комнаты, реестр имён и конкурентный фасад.
//!
//! Высокоуровневый объект: [`UnoService`] — один экземпляр на процесс,
//! по одному методу на каждое внешнее действие клиента.

pub mod errors;
pub mod registry;
pub mod room;
pub mod service;

pub use errors::LobbyError;
pub use registry::{Registry, MIN_USERNAME_LEN, ROOM_NUMBER_POOL_SIZE};
pub use room::{QuitOutcome, Room, RoomUser, MAX_ROOM_USERS};
pub use service::UnoService;
