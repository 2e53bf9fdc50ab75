use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::models::Playlist;
use axum::{extract::State, Json};

/// The actor's own playlists plus the system playlists everyone can see.
pub async fn get_users_playlists(
	State(app_state): State<AppState>,
	identity: Identity,
) -> Result<Json<Vec<Playlist>>, AppError> {
	let playlists = app_state.playlists.playlists_for_user(&identity)?;
	Ok(Json(playlists))
}
