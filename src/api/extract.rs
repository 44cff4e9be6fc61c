//! Strict JSON request extraction.
//!
//! Wraps axum's [`Json`] so decode failures map onto the application error
//! taxonomy instead of axum's default plain-text rejections: wrong
//! `Content-Type` is 415, an oversized body is 413, and malformed JSON or a
//! mistyped field is 400 with a stable code.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};

use crate::error::AppError;

/// Request bodies larger than this are refused outright.
pub const MAX_REQUEST_BODY_SIZE: usize = 1_048_576;

/// JSON extractor with application-shaped rejections.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(map_json_rejection(rejection)),
        }
    }
}

fn map_json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => AppError::unsupported_media_type(
            "request/incorrect-content-type",
            r#"Content-Type header is not "application/json"."#,
        ),
        JsonRejection::JsonSyntaxError(_) => AppError::bad_request(
            "request/malformed-json",
            "Request body contains badly-formed JSON.",
        ),
        JsonRejection::JsonDataError(err) => {
            AppError::bad_request("request/invalid-field", err.body_text())
        }
        rejection if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::payload_too_large(
                "request/payload-too-large",
                "Request body must not be larger than 1MB.",
            )
        }
        rejection => AppError::bad_request("request/invalid-body", rejection.body_text()),
    }
}
