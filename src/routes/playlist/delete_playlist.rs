use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::extract::{Path, State};

pub async fn delete_playlist(
	State(app_state): State<AppState>,
	identity: Identity,
	Path(playlist_id): Path<String>,
) -> Result<String, AppError> {
	app_state.playlists.delete(&identity, &playlist_id)?;
	Ok(format!("Playlist {playlist_id} deleted"))
}
