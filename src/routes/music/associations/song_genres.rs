use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddGenreToSong {
	pub song_id: String,
	pub genre_id: String,
}

pub async fn add_genre_to_song(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<AddGenreToSong>,
) -> Result<(StatusCode, String), AppError> {
	app_state
		.associations
		.add_genre(&identity, &payload.song_id, &payload.genre_id)?;
	Ok((StatusCode::CREATED, "Genre added to song".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct RemoveGenreFromSong {
	pub song_id: String,
	pub genre_id: String,
}

pub async fn remove_genre_from_song(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<RemoveGenreFromSong>,
) -> Result<String, AppError> {
	app_state
		.associations
		.remove_genre(&identity, &payload.song_id, &payload.genre_id)?;
	Ok(format!(
		"genre {} removed from song {}",
		payload.genre_id, payload.song_id
	))
}
