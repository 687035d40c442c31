use serde::{Deserialize, Serialize};

use crate::lobby::LobbyError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
///
/// Транспорт превращает их в статусы: `BadRequest` → 400,
/// `Forbidden` → 403, `Internal` → 500. Текст — человекочитаемое
/// сообщение нижележащей ошибки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные или отказ бизнес-правила.
    BadRequest(String),

    /// Конфликт имени пользователя (занято / слишком короткое).
    Forbidden(String),

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Forbidden(_) => 403,
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<LobbyError> for ApiError {
    fn from(err: LobbyError) -> Self {
        match err {
            LobbyError::UsernameTaken | LobbyError::UsernameTooShort => {
                ApiError::Forbidden(err.to_string())
            }
            _ => ApiError::BadRequest(err.to_string()),
        }
    }
}
