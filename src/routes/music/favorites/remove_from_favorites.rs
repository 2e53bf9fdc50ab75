use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RemoveFavoriteSong {
	pub song_id: String,
}

pub async fn remove_from_favorites(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<RemoveFavoriteSong>,
) -> Result<String, AppError> {
	app_state.favorites.remove(&identity.user_id, &payload.song_id)?;
	Ok("Song removed from favorites".to_string())
}
