use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::models::PlaylistDetailsResponse;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlaylistQueryParams {
	pub playlist_id: String,
}

pub async fn get_playlist_music(
	State(app_state): State<AppState>,
	identity: Identity,
	Query(params): Query<PlaylistQueryParams>,
) -> Result<Json<PlaylistDetailsResponse>, AppError> {
	let details = app_state.playlists.playlist_with_songs(&identity, &params.playlist_id)?;
	Ok(Json(details))
}
