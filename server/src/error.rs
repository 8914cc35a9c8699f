//! Handler errors and their HTTP rendering.
//!
//! # Design
//! A malformed id and a missing record both render as 404; only the body
//! text differs. Store failures echo their detail with 400, except where a
//! handler explicitly escalates to `Internal`, which hides the detail.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid ID")]
    InvalidId,

    #[error("Id not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("malformed request body: {0}")]
    Body(String),

    #[error("internal server error")]
    Internal,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Body(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::InvalidId | ApiError::NotFound => (status, self.to_string()).into_response(),
            ApiError::Store(ref err) => {
                let body = json!({ "error": err.kind(), "message": err.to_string() });
                (status, Json(body)).into_response()
            }
            ApiError::Body(ref detail) => {
                let body = json!({ "error": "BadRequest", "message": detail });
                (status, Json(body)).into_response()
            }
            ApiError::Internal => {
                let body = json!({ "error": "InternalError", "message": self.to_string() });
                (status, Json(body)).into_response()
            }
        }
    }
}
