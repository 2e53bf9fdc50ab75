use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::models::{Album, AlbumDetailsResponse};
use axum::extract::{Path, State};
use axum::{http::StatusCode, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAlbum {
	pub title: String,
	pub release_date: Option<String>,
}

pub async fn create_album(
	State(app_state): State<AppState>,
	_identity: Identity,
	Json(payload): Json<CreateAlbum>,
) -> Result<(StatusCode, Json<Album>), AppError> {
	let album = app_state.catalog.create_album(&payload.title, payload.release_date)?;
	Ok((StatusCode::CREATED, Json(album)))
}

pub async fn browse_albums(State(app_state): State<AppState>) -> Result<Json<Vec<Album>>, AppError> {
	let albums = app_state.catalog.browse_albums()?;
	Ok(Json(albums))
}

/// The album with its tracks in track order.
pub async fn get_album(
	State(app_state): State<AppState>,
	Path(album_id): Path<String>,
) -> Result<Json<AlbumDetailsResponse>, AppError> {
	let details = app_state.catalog.album_with_tracks(&album_id)?;
	Ok(Json(details))
}
