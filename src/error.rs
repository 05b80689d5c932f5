use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use crate::server::types::ErrorResponse;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request body could not be turned into a JSON document.
    #[error("{0}")]
    Payload(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }
}

// Every fault reaching a handler boundary becomes a 500 carrying the
// error text verbatim.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!("Request failed: {}", message);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: message }),
        )
            .into_response()
    }
}
