use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RemoveSongFromPlaylist {
	pub playlist_id: String,
	pub song_id: String,
}

pub async fn remove_song_from_playlist(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<RemoveSongFromPlaylist>,
) -> Result<String, AppError> {
	app_state
		.playlists
		.remove_song(&identity, &payload.playlist_id, &payload.song_id)?;
	Ok(format!(
		"song {} removed from playlist {}",
		payload.song_id, payload.playlist_id
	))
}
