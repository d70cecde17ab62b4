use std::{io, path::PathBuf};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::routes::render;

/// Errors surfaced to HTTP clients of `/newsReport`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NewsError {
    #[error("news not found")]
    NotFound,

    /// Request body could not be decoded. Raised by the transport layer,
    /// never by the store.
    #[error("invalid news payload: {0}")]
    MalformedPayload(String),
}

impl NewsError {
    pub fn status(&self) -> StatusCode {
        match self {
            NewsError::NotFound => StatusCode::NOT_FOUND,
            NewsError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// `{"message": ...}` body, indented when `pretty` is set.
    pub fn render(&self, pretty: bool) -> Response {
        render::json(self.status(), &json!({ "message": self.to_string() }), pretty)
    }
}

impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        self.render(false)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Anything that stops the server from coming up or staying up.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install tracing subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },

    #[error("server error: {0}")]
    Serve(io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = NewsError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_payload_maps_to_400() {
        let resp = NewsError::MalformedPayload("EOF".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn render_follows_pretty_flag() {
        let pretty = NewsError::NotFound.render(true);
        let compact = NewsError::NotFound.render(false);

        assert_eq!(pretty.status(), StatusCode::NOT_FOUND);
        assert_eq!(compact.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_message_is_stable() {
        assert_eq!(NewsError::NotFound.to_string(), "news not found");
    }
}
