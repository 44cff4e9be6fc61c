//! Application error type shared by the store, service, and HTTP layers.
//!
//! Every error carries a stable machine-readable code and a message that is
//! safe to show to callers. The underlying fault lives in a debug field that
//! is logged but never serialized into a response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Classifies an [`AppError`] for HTTP status mapping and the wire-level
/// `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, e.g. a destination URL without an http(s) scheme.
    BadRequest,
    /// No record stored under the requested token.
    NotFound,
    /// Token collision inside the store. Recovered by the service's retry
    /// loop and never observed by clients.
    AlreadyExists,
    /// Storage, transport, or otherwise unexpected fault.
    Internal,
    /// Request body over the configured size limit.
    PayloadTooLarge,
    /// Request body was not `application/json`.
    UnsupportedMediaType,
    /// Client exceeded the rate limit.
    TooManyRequests,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorKind::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorKind::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Tag serialized as `error.type` in responses.
    pub fn as_tag(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::AlreadyExists => "CONFLICT",
            ErrorKind::Internal => "INTERNAL",
            ErrorKind::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorKind::UnsupportedMediaType => "UNSUPPORTED",
            ErrorKind::TooManyRequests => "TOO_MANY_REQUESTS",
        }
    }
}

/// Error returned by every fallible operation in the crate.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    kind: ErrorKind,
    code: String,
    message: String,
    debug: Option<String>,
}

impl AppError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, code, message)
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code, message)
    }

    pub fn already_exists(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, code, message)
    }

    /// Internal errors deliberately carry a generic message; the actual fault
    /// belongs in [`AppError::with_debug`].
    pub fn internal(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, code, "Something went wrong on our end.")
    }

    pub fn payload_too_large(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PayloadTooLarge, code, message)
    }

    pub fn unsupported_media_type(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedMediaType, code, message)
    }

    pub fn too_many_requests(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooManyRequests, code, message)
    }

    fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            debug: None,
        }
    }

    /// Attaches the underlying fault. Logged on the server, never serialized.
    pub fn with_debug(mut self, debug: impl Into<String>) -> Self {
        self.debug = Some(debug.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn debug(&self) -> Option<&str> {
        self.debug.as_deref()
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind == ErrorKind::AlreadyExists
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Consumes the error, yielding the most specific fault description
    /// available for re-wrapping into another error's debug field.
    pub fn into_debug(self) -> String {
        self.debug.unwrap_or(self.message)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    #[serde(rename = "type")]
    kind: &'static str,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind.status();

        // Server faults are logged with their debug detail; client errors are
        // expected traffic and stay quiet.
        if status.is_server_error() {
            tracing::error!(code = %self.code, debug = ?self.debug, "request failed");
        }

        let body = ErrorBody {
            error: ErrorInfo {
                kind: self.kind.as_tag(),
                code: self.code,
                message: self.message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Translates a sqlx fault into the application taxonomy.
///
/// Unique-constraint violations become the recoverable collision variant;
/// everything else is an internal fault with the driver error preserved in
/// the debug field.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::already_exists("url/token-exists", "Token already exists.")
            .with_debug(db.to_string());
    }

    if matches!(e, sqlx::Error::RowNotFound) {
        return AppError::not_found("url/not-found", "No URL stored under that token.");
    }

    AppError::internal("storage/database-error").with_debug(e.to_string())
}
