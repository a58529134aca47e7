pub mod emissions;
pub mod footprint;
pub mod health;
pub mod orders;
pub mod packaging;

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::repository::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body did not match the expected shape. Raised before the handler runs.
    #[error(transparent)]
    Rejected(#[from] JsonRejection),
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Invalid(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
            AppError::Invalid(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Store(err) => {
                tracing::error!(error = %err, "order store request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "order store unavailable".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// JSON body extractor whose rejections render through `AppError`.
/// Type mismatches such as a string where a number belongs become 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload<T>(pub T);
