use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failure taxonomy shared by every service. The HTTP layer maps these to
/// status codes; services construct them with enough identifiers for the
/// client to render a specific message.
#[derive(Debug, Error)]
pub enum AppError {
	#[error("{entity} not found: {id}")]
	NotFound { entity: &'static str, id: String },

	#[error("forbidden: {0}")]
	Forbidden(String),

	#[error("conflict on {constraint}: {detail}")]
	Conflict { constraint: &'static str, detail: String },

	#[error("invalid request: {0}")]
	Validation(String),

	#[error("authentication required: {0}")]
	Unauthorized(String),

	#[error("internal error: {0}")]
	Internal(String),
}

impl AppError {
	pub fn not_found(entity: &'static str, id: impl Into<String>) -> AppError {
		AppError::NotFound { entity, id: id.into() }
	}

	pub fn forbidden(detail: impl Into<String>) -> AppError {
		AppError::Forbidden(detail.into())
	}

	pub fn conflict(constraint: &'static str, detail: impl Into<String>) -> AppError {
		AppError::Conflict {
			constraint,
			detail: detail.into(),
		}
	}

	pub fn validation(detail: impl Into<String>) -> AppError {
		AppError::Validation(detail.into())
	}

	pub fn internal(err: impl ToString) -> AppError {
		AppError::Internal(err.to_string())
	}

	pub fn status(&self) -> StatusCode {
		match self {
			AppError::NotFound { .. } => StatusCode::NOT_FOUND,
			AppError::Forbidden(_) => StatusCode::FORBIDDEN,
			AppError::Conflict { .. } => StatusCode::CONFLICT,
			AppError::Validation(_) => StatusCode::BAD_REQUEST,
			AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
			AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status == StatusCode::INTERNAL_SERVER_ERROR {
			error!("{}", self);
		}
		(status, Json(json!({ "message": self.to_string() }))).into_response()
	}
}

// Unexpected database failures propagate unchanged as internal errors.
// Uniqueness violations never reach this conversion; the store layer
// intercepts them first.
impl From<diesel::result::Error> for AppError {
	fn from(err: diesel::result::Error) -> AppError {
		AppError::Internal(err.to_string())
	}
}

impl From<diesel::r2d2::PoolError> for AppError {
	fn from(err: diesel::r2d2::PoolError) -> AppError {
		AppError::Internal(format!("Failed to get DB from pool: {err}"))
	}
}
