use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::net::AddrParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid SERVER_ADDRESS {value:?}: {source}")]
    InvalidAddress {
        value: String,
        source: AddrParseError,
    },
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    TemplateError(#[from] askama::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);

        (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", self)).into_response()
    }
}
