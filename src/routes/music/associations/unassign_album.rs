use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UnassignAlbum {
	pub song_id: String,
}

pub async fn unassign_album(
	State(app_state): State<AppState>,
	identity: Identity,
	Json(payload): Json<UnassignAlbum>,
) -> Result<String, AppError> {
	app_state.associations.unassign_album(&identity, &payload.song_id)?;
	Ok(format!("Song {} detached from its album", payload.song_id))
}
