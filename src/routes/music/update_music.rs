use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::models::Song;
use crate::services::catalog::UpdateSongRequest;
use axum::extract::{Path, State};
use axum::Json;

pub async fn update_music(
	State(app_state): State<AppState>,
	identity: Identity,
	Path(song_id): Path<String>,
	Json(payload): Json<UpdateSongRequest>,
) -> Result<Json<Song>, AppError> {
	let song = app_state.catalog.update_song(&identity, &song_id, payload)?;
	Ok(Json(song))
}
