//! Map conversion outcomes onto HTTP responses.
//!
//! | Outcome              | Status | Body                                     |
//! |----------------------|--------|------------------------------------------|
//! | `Success`            | 200    | DOCX bytes as an attachment              |
//! | `Invalid`            | 400    | `{"error": <validation message>}`        |
//! | `ConversionFailed`   | 500    | `{"error": "Conversion failed: <msg>"}`  |
//! | `Unexpected`         | 500    | `{"error": "An unexpected error occurred"}` |

use crate::output::ConversionOutcome;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// MIME type of a Word (OOXML) document.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Client-facing text for internal failures. Details stay in the logs.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

/// Body of every failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub message: String,
    pub engine: String,
}

impl HealthBody {
    pub fn healthy(engine: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            message: "PDF conversion service is running".to_string(),
            engine: engine.into(),
        }
    }
}

impl IntoResponse for ConversionOutcome {
    fn into_response(self) -> Response {
        match self {
            ConversionOutcome::Success(doc) => (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, DOCX_MIME.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", doc.filename),
                    ),
                ],
                doc.bytes,
            )
                .into_response(),
            ConversionOutcome::Invalid(e) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(e.to_string()))).into_response()
            }
            ConversionOutcome::ConversionFailed { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(format!("Conversion failed: {message}"))),
            )
                .into_response(),
            ConversionOutcome::Unexpected { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(UNEXPECTED_MESSAGE)),
            )
                .into_response(),
        }
    }
}
