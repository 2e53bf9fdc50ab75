use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::{extract::State, Json};
use serde::Deserialize;

/*
post : http://127.0.0.1:8080/music/assign_album

{
   "song_id": "b846a188-46a9-4fa4-bb7b-1b1527e7f5bd",
   "album_id": "1c9e7b2d-3f4a-4d5e-8a6b-0c1d2e3f4a5b",
   "track_number": 4
}
*/

#[derive(Debug, Deserialize)]
pub struct AssignAlbum {
	pub song_id: String,
	pub album_id: String,
	pub track_number: Option<i32>,
}

// Assigning again moves the song to the new album; it never ends up on two.
pub async fn assign_album(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<AssignAlbum>,
) -> Result<String, AppError> {
	app_state
		.associations
		.assign_album(&identity, &payload.song_id, &payload.album_id, payload.track_number)?;
	Ok(format!("Song {} assigned to album {}", payload.song_id, payload.album_id))
}
