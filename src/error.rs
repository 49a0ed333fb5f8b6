use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Ocorreu um erro interno no servidor.";

/// Errors a handler can answer with. Upstream and store failures carry no
/// detail; they are logged where they happen.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Upstream provider failure")]
    Upstream,

    #[error("Vote store failure")]
    Store,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "erro": message }),
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "mensagem": message }),
            ),
            ApiError::Upstream | ApiError::Store => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "erro": INTERNAL_ERROR_MESSAGE }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
