pub mod association;
pub mod catalog;
pub mod favorites;
pub mod playlist;

use diesel::prelude::*;

use crate::core::identity::Identity;
use crate::core::ownership::{self, Visibility};
use crate::error::AppError;
use crate::harmonia_db::links::StoreError;
use crate::harmonia_db::models::Song;

/// Translates a store-reported failure into the domain taxonomy, naming the
/// link that was targeted. Unexpected database failures pass through as
/// internal errors, untouched.
pub(crate) fn link_error(err: StoreError, link: &'static str, detail: &str) -> AppError {
	match err {
		StoreError::Conflict { constraint } => AppError::conflict(constraint, format!("{link} already exists: {detail}")),
		StoreError::Missing => AppError::not_found(link, detail),
		StoreError::Database(err) => AppError::internal(err),
	}
}

pub(crate) fn song_exists(conn: &mut SqliteConnection, id: &str) -> Result<(), AppError> {
	use crate::schema::songs::dsl::*;

	let found = songs.filter(song_id.eq(id)).select(song_id).first::<String>(conn).optional()?;
	if found.is_none() {
		return Err(AppError::not_found("song", id));
	}
	Ok(())
}

/// Loads a song and checks the actor may mutate it. Songs are private to
/// their uploading owner for every write path.
pub(crate) fn owned_song(conn: &mut SqliteConnection, actor: &Identity, id: &str) -> Result<Song, AppError> {
	use crate::schema::songs::dsl::*;

	let song = songs
		.filter(song_id.eq(id))
		.first::<Song>(conn)
		.optional()?
		.ok_or_else(|| AppError::not_found("song", id))?;

	if !ownership::can_mutate(actor, Some(&song.owner_user_id), Visibility::Private) {
		return Err(AppError::forbidden(format!("song {} is not owned by {}", id, actor.user_id)));
	}
	Ok(song)
}
