use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::extract::{Path, State};

pub async fn delete_music(
	State(app_state): State<AppState>,
	identity: Identity,
	Path(song_id): Path<String>,
) -> Result<String, AppError> {
	app_state.catalog.delete_song(&identity, &song_id)?;
	Ok(format!("Song {song_id} deleted"))
}
