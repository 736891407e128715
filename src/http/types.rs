use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::error::TodoError;

/// Body shape of every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            TodoError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            TodoError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            TodoError::Storage(e) => {
                tracing::error!(error = %e, "storage fault");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };
        (status, Json(ErrorDetail { detail })).into_response()
    }
}
