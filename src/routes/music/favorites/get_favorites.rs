use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::models::FavoritesPage;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

// /music/favorites/get?page=2&page_size=20
// /music/favorites/get
#[derive(Debug, Deserialize)]
pub struct FavoritesQueryParams {
	#[serde(default = "default_page")]
	pub page: i64,
	#[serde(default = "default_page_size")]
	pub page_size: i64,
}

fn default_page() -> i64 {
	1
}

fn default_page_size() -> i64 {
	50
}

/// Most recently favorited first, with the total count for pagination.
pub async fn get_favorites(
	State(app_state): State<AppState>,
	identity: Identity,
	Query(params): Query<FavoritesQueryParams>,
) -> Result<Json<FavoritesPage>, AppError> {
	let page = app_state.favorites.list(&identity.user_id, params.page, params.page_size)?;
	Ok(Json(page))
}
