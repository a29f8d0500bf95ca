use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::error;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            catalog,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    pub(crate) detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub(crate) type ServerError = (StatusCode, Json<ErrorResponse>);

fn server_error(status: StatusCode, detail: &str) -> ServerError {
    (status, Json(ErrorResponse { detail: detail.to_string() }))
}

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

// request bodies are parsed as json whatever their content type
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServerError> {
    serde_json::from_slice(body).map_err(json_to_server_error)
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                server_error(StatusCode::CONFLICT, err.message())
            }
            CommandError::NotFound { .. } => {
                server_error(StatusCode::NOT_FOUND, err.message())
            }
            CommandError::Serialization { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::Validation { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::Unavailable { .. } => {
                server_error(StatusCode::SERVICE_UNAVAILABLE, err.message())
            }
            CommandError::Runtime { .. } => {
                error!("request failed: {}", err);
                server_error(StatusCode::INTERNAL_SERVER_ERROR, err.message())
            }
        }
    }
}
