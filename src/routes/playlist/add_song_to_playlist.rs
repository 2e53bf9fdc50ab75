use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

/*
post : http://127.0.0.1:8080/playlist/add_song

{
   "playlist_id": "4f537410-d5e0-4507-859b-88ecdabafd96",
   "song_id": "b846a188-46a9-4fa4-bb7b-1b1527e7f5bd",
   "position": 3
}
*/

#[derive(Debug, Deserialize)]
pub struct AddSongToPlaylist {
	pub playlist_id: String,
	pub song_id: String,
	pub position: Option<i32>,
}

pub async fn add_song_to_playlist(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<AddSongToPlaylist>,
) -> Result<(StatusCode, String), AppError> {
	app_state
		.playlists
		.add_song(&identity, &payload.playlist_id, &payload.song_id, payload.position)?;
	Ok((StatusCode::CREATED, "Song added to playlist".to_string()))
}
