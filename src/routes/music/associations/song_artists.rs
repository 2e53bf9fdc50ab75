use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddArtistToSong {
	pub song_id: String,
	pub artist_id: String,
	pub artist_role: Option<String>,
}

pub async fn add_artist_to_song(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<AddArtistToSong>,
) -> Result<(StatusCode, String), AppError> {
	app_state
		.associations
		.add_artist(&identity, &payload.song_id, &payload.artist_id, payload.artist_role)?;
	Ok((StatusCode::CREATED, "Artist added to song".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct RemoveArtistFromSong {
	pub song_id: String,
	pub artist_id: String,
}

pub async fn remove_artist_from_song(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<RemoveArtistFromSong>,
) -> Result<String, AppError> {
	app_state
		.associations
		.remove_artist(&identity, &payload.song_id, &payload.artist_id)?;
	Ok(format!(
		"artist {} removed from song {}",
		payload.artist_id, payload.song_id
	))
}
