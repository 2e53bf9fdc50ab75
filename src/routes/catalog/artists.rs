use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::models::Artist;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateArtist {
	pub name: String,
	pub bio: Option<String>,
}

pub async fn create_artist(
	State(app_state): State<AppState>,
	_identity: Identity,
	Json(payload): Json<CreateArtist>,
) -> Result<(StatusCode, Json<Artist>), AppError> {
	let artist = app_state.catalog.create_artist(&payload.name, payload.bio)?;
	Ok((StatusCode::CREATED, Json(artist)))
}

pub async fn browse_artists(State(app_state): State<AppState>) -> Result<Json<Vec<Artist>>, AppError> {
	let artists = app_state.catalog.browse_artists()?;
	Ok(Json(artists))
}
