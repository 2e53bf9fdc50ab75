use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::models::Genre;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateGenre {
	pub name: String,
}

pub async fn create_genre(
	State(app_state): State<AppState>,
	_identity: Identity,
	Json(payload): Json<CreateGenre>,
) -> Result<(StatusCode, Json<Genre>), AppError> {
	let genre = app_state.catalog.create_genre(&payload.name)?;
	Ok((StatusCode::CREATED, Json(genre)))
}

pub async fn browse_genres(State(app_state): State<AppState>) -> Result<Json<Vec<Genre>>, AppError> {
	let genres = app_state.catalog.browse_genres()?;
	Ok(Json(genres))
}
