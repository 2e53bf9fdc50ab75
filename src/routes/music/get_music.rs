use crate::core::app_state::AppState;
use crate::error::AppError;
use crate::harmonia_db::models::{Song, SongDetailsResponse};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

// /music/get_music?start_index=10&page_length=20
// /music/get_music?page_length=20
// /music/get_music
#[derive(Debug, Deserialize)]
pub struct MusicQueryParams {
	#[serde(default)]
	pub start_index: i64, //defaults to 0
	pub page_length: Option<i64>,
}

pub async fn get_music(
	State(app_state): State<AppState>,
	Query(params): Query<MusicQueryParams>,
) -> Result<Json<Vec<Song>>, AppError> {
	let songs = app_state.catalog.browse_songs(params.start_index, params.page_length)?;
	Ok(Json(songs))
}

/// One song with its album slot, artist credits and genres.
pub async fn get_song(
	State(app_state): State<AppState>,
	Path(song_id): Path<String>,
) -> Result<Json<SongDetailsResponse>, AppError> {
	let details = app_state.associations.song_details(&song_id)?;
	Ok(Json(details))
}
