use crate::core::app_state::AppState;
use crate::core::identity::Identity;
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct IsFavoritedParams {
	pub song_id: String,
}

pub async fn is_favorited(
	State(app_state): State<AppState>,
	identity: Identity,
	Query(params): Query<IsFavoritedParams>,
) -> Result<Json<Value>, AppError> {
	let favorited = app_state.favorites.contains(&identity.user_id, &params.song_id)?;
	Ok(Json(json!({ "is_favorited": favorited })))
}
