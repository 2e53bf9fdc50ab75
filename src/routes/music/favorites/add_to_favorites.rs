use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddFavoriteSong {
	pub song_id: String,
}

// The collection is provisioned on the first add.
pub async fn add_to_favorites(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<AddFavoriteSong>,
) -> Result<(StatusCode, String), AppError> {
	app_state.favorites.add(&identity.user_id, &payload.song_id)?;
	Ok((StatusCode::CREATED, "Song added to favorites".to_string()))
}
