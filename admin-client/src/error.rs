use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminClientError {
    // HTTP ошибки
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    // Бизнес-логика ошибки
    #[error("Resource not found")]
    NotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // Сервер принял запрос, но вернул конверт со status != "success"
    #[error("API failure: {0}")]
    ApiFailure(String),

    // Валидация на стороне клиента, до отправки запроса
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Транспортные ошибки
    #[error("Transport error: {0}")]
    TransportError(String),

    // Ошибки сериализации/десериализации
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AdminClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminClientError::NotFound)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AdminClientError::Unauthorized(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AdminClientError::InvalidInput(_))
    }
}
