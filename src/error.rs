// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Validation and referential problems get their own enums so callers can
//! tell "bad input" apart from "input pointing at something that does not
//! exist" and pick a policy (abort vs. skip-and-continue).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Input rejected at the scoring boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Duration must not be negative (got {0} minutes)")]
    NegativeDuration(i64),

    #[error("Duration is out of range (got {0} minutes)")]
    DurationOutOfRange(i64),

    #[error("Distance must be a non-negative number (got {0} km)")]
    InvalidDistance(f64),

    #[error("Distance is out of range (got {0} km)")]
    DistanceOutOfRange(f64),

    #[error("Score does not fit in a point total ({duration} minutes, {distance_km} km)")]
    ScoreOverflow { duration: u32, distance_km: f64 },

    #[error("Unknown activity type: {0}")]
    UnknownActivityType(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

/// A record references another record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferentialError {
    #[error("Activity {activity_id} references unknown user {user_email}")]
    OrphanActivity {
        activity_id: String,
        user_email: String,
    },

    #[error("No user with email {0}")]
    UnknownUser(String),

    #[error("User {user_email} belongs to unknown team {team}")]
    UnknownTeam { user_email: String, team: String },
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Referential(#[from] ReferentialError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Destructive reset requires explicit confirmation")]
    ConfirmationRequired,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Referential(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::ConfirmationRequired => StatusCode::PRECONDITION_REQUIRED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(ValidationError::Input(errors.to_string()))
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, details) = match &self {
            AppError::Validation(e) => ("validation_error", Some(e.to_string())),
            AppError::Referential(e) => ("referential_error", Some(e.to_string())),
            AppError::NotFound(msg) => ("not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => ("bad_request", Some(msg.clone())),
            AppError::Conflict(msg) => ("conflict", Some(msg.clone())),
            AppError::Forbidden(msg) => ("forbidden", Some(msg.clone())),
            AppError::ConfirmationRequired => (
                "confirmation_required",
                Some("Set confirm_wipe to true to delete all data".to_string()),
            ),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                ("database_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                ("internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
