// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A single rejected field in a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Payload key (or deserialization path) that was rejected
    pub field: String,
    /// Machine-readable constraint name (`range`, `missing`, `invalid`)
    pub code: String,
    /// Human-readable description
    pub message: String,
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

fn summarize(fields: &[FieldViolation]) -> String {
    fields
        .iter()
        .map(|v| format!("{} ({})", v.field, v.code))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// Whether the caller can fix the request and resubmit.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::UnsupportedMediaType(_)
        )
    }

    /// Text for the `details` field; store faults are passed through verbatim.
    fn details(&self) -> String {
        match self {
            AppError::Database(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldViolation>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::debug!(error = %self, "Rejected request");
        } else {
            tracing::error!(error = %self, "Request failed");
        }

        let details = Some(self.details());
        let (status, error, fields) = match self {
            AppError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                Some(fields),
            ),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request", None),
            AppError::UnsupportedMediaType(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media_type",
                None,
            ),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
            fields,
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |err| FieldViolation {
                    field: field.clone(),
                    code: err.code.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();
        // HashMap iteration order is arbitrary
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(fields)
    }
}

const JSON_DATA_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => {
                AppError::Validation(vec![violation_from_serde_message(&text)])
            }
            JsonRejection::MissingJsonContentType(_) => AppError::UnsupportedMediaType(text),
            _ => AppError::BadRequest(text),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        let text = rejection.body_text();
        let message = text
            .strip_prefix("Failed to deserialize query string: ")
            .unwrap_or(&text);
        AppError::Validation(vec![FieldViolation {
            field: field_from_path(message).unwrap_or("query").to_string(),
            code: "invalid".to_string(),
            message: message.to_string(),
        }])
    }
}

/// Build a violation from axum's deserialization message.
///
/// axum reports `<path>: <serde error>` when the failure has a path, and the
/// bare serde error for top-level failures such as a missing field.
pub(crate) fn violation_from_serde_message(text: &str) -> FieldViolation {
    let message = text.strip_prefix(JSON_DATA_PREFIX).unwrap_or(text);

    if let Some(field) = backticked_after(message, "missing field `") {
        return FieldViolation {
            field: field.to_string(),
            code: "missing".to_string(),
            message: format!("{} is required", field),
        };
    }

    let (field, detail) = match message.split_once(": ") {
        Some((path, rest)) if field_from_path(path).is_some() => (path, rest),
        _ => ("body", message),
    };

    FieldViolation {
        field: field.to_string(),
        code: "invalid".to_string(),
        message: detail.to_string(),
    }
}

fn backticked_after<'a>(message: &'a str, marker: &str) -> Option<&'a str> {
    let start = message.find(marker)? + marker.len();
    let rest = &message[start..];
    rest.find('`').map(|end| &rest[..end])
}

fn field_from_path(path: &str) -> Option<&str> {
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));
    is_path.then_some(path)
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_reports_path() {
        let v = violation_from_serde_message(
            "Failed to deserialize the JSON body into the target type: type: unknown variant `Running`, expected one of `Cardio`, `Strength` at line 1 column 40",
        );
        assert_eq!(v.field, "type");
        assert_eq!(v.code, "invalid");
        assert!(v.message.starts_with("unknown variant `Running`"));
    }

    #[test]
    fn test_missing_field_reports_name() {
        let v = violation_from_serde_message(
            "Failed to deserialize the JSON body into the target type: missing field `duration_min` at line 1 column 22",
        );
        assert_eq!(v.field, "duration_min");
        assert_eq!(v.code, "missing");
    }

    #[test]
    fn test_top_level_type_error_falls_back_to_body() {
        let v = violation_from_serde_message(
            "Failed to deserialize the JSON body into the target type: invalid type: sequence, expected struct Workout at line 1 column 0",
        );
        assert_eq!(v.field, "body");
        assert!(v.message.starts_with("invalid type"));
    }

    #[tokio::test]
    async fn test_database_details_are_raw_message() {
        let response = AppError::Database("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "database_error");
        assert_eq!(json["details"], "connection refused");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::Validation(vec![]).is_client_error());
        assert!(AppError::BadRequest("x".into()).is_client_error());
        assert!(!AppError::Database("down".into()).is_client_error());
        assert!(!AppError::Internal(anyhow::anyhow!("boom")).is_client_error());
    }
}
