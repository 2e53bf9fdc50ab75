use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::models::Playlist;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

/*
post : http://127.0.0.1:8080/playlist/new

{
   "playlist_name": "late night drives"
}
*/

#[derive(Debug, Deserialize)]
pub struct CreatePlaylist {
	pub playlist_name: String,
}

pub async fn create_playlist(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<CreatePlaylist>,
) -> Result<(StatusCode, Json<Playlist>), AppError> {
	let playlist = app_state.playlists.create(&identity, &payload.playlist_name)?;
	Ok((StatusCode::CREATED, Json(playlist)))
}

// Admin only: system playlists are ownerless and readable by everyone.
pub async fn create_system_playlist(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<CreatePlaylist>,
) -> Result<(StatusCode, Json<Playlist>), AppError> {
	let playlist = app_state.playlists.create_system(&identity, &payload.playlist_name)?;
	Ok((StatusCode::CREATED, Json(playlist)))
}
