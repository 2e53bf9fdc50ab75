use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RenamePlaylist {
	pub playlist_id: String,
	pub playlist_name: String,
}

pub async fn rename_playlist(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<RenamePlaylist>,
) -> Result<String, AppError> {
	app_state
		.playlists
		.rename(&identity, &payload.playlist_id, &payload.playlist_name)?;
	Ok(format!("Playlist {} renamed", payload.playlist_id))
}
