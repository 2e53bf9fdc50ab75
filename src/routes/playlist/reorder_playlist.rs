use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::services::playlist::ReorderItem;
use axum::{extract::State, Json};
use serde::Deserialize;

/*
post : http://127.0.0.1:8080/playlist/reorder

{
   "playlist_id": "4f537410-d5e0-4507-859b-88ecdabafd96",
   "items": [
      { "song_id": "b846a188-46a9-4fa4-bb7b-1b1527e7f5bd", "position": 1 },
      { "song_id": "7d2f9c6a-0b1e-4f3a-9c7d-5e8b2a4c6d0f", "position": 2 }
   ]
}
*/

#[derive(Debug, Deserialize)]
pub struct ReorderPlaylist {
	pub playlist_id: String,
	pub items: Vec<ReorderItem>,
}

pub async fn reorder_playlist(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<ReorderPlaylist>,
) -> Result<String, AppError> {
	app_state
		.playlists
		.reorder(&identity, &payload.playlist_id, &payload.items)?;
	Ok(format!("Playlist {} reordered", payload.playlist_id))
}
