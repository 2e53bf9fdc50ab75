use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::models::Song;
use crate::services::catalog::NewSongRequest;
use axum::{extract::State, http::StatusCode, Json};

/*
post : http://127.0.0.1:8080/save_music

{
   "title": "Night Owl",
   "duration": 214,
   "media_url": "https://cdn.example.com/audio/night-owl.mp3",
   "release_date": "2024-11-02"
}
*/

pub async fn save_music(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<NewSongRequest>,
) -> Result<(StatusCode, Json<Song>), AppError> {
	let song = app_state.catalog.register_song(&identity, payload)?;
	Ok((StatusCode::CREATED, Json(song)))
}
