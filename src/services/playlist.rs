//! Playlist CRUD, membership mutation and the reorder transaction.
//!
//! Reads of someone else's private playlist report the playlist as absent
//! so its existence is not leaked; mutations report `Forbidden`. The
//! reorder batch applies under one transaction: every position updates or
//! none do.

use std::collections::HashSet;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::identity::Identity;
use crate::core::ownership::{self, Visibility};
use crate::error::AppError;
use crate::harmonia_db::db::{DatabasePool, PooledConn};
use crate::harmonia_db::links::{PlaylistEntries, SetMembership};
use crate::harmonia_db::models::{
	Playlist, PlaylistDetailsResponse, PlaylistSong, PlaylistSongResponse, PlaylistType, Song,
};
use crate::services::{link_error, song_exists};

#[derive(Debug, Deserialize)]
pub struct ReorderItem {
	pub song_id: String,
	pub position: i32,
}

#[derive(Clone)]
pub struct PlaylistService {
	db_pool: DatabasePool,
}

impl PlaylistService {
	pub fn new(db_pool: DatabasePool) -> PlaylistService {
		PlaylistService { db_pool }
	}

	fn conn(&self) -> Result<PooledConn, AppError> {
		Ok(self.db_pool.get()?)
	}

	fn load(conn: &mut SqliteConnection, id: &str) -> Result<Playlist, AppError> {
		use crate::schema::playlists::dsl::*;

		playlists
			.filter(playlist_id.eq(id))
			.first::<Playlist>(conn)
			.optional()?
			.ok_or_else(|| AppError::not_found("playlist", id))
	}

	fn visibility(playlist: &Playlist) -> Visibility {
		match playlist.kind() {
			PlaylistType::System => Visibility::Public,
			PlaylistType::User => Visibility::Private,
		}
	}

	/// Existence is checked before the gate; a private playlist the actor
	/// may not read is then reported as absent, not forbidden.
	fn readable(conn: &mut SqliteConnection, actor: &Identity, id: &str) -> Result<Playlist, AppError> {
		let playlist = Self::load(conn, id)?;
		if !ownership::can_read(actor, playlist.owner_user_id.as_deref(), Self::visibility(&playlist)) {
			return Err(AppError::not_found("playlist", id));
		}
		Ok(playlist)
	}

	fn mutable(conn: &mut SqliteConnection, actor: &Identity, id: &str) -> Result<Playlist, AppError> {
		let playlist = Self::load(conn, id)?;
		if !ownership::can_mutate(actor, playlist.owner_user_id.as_deref(), Self::visibility(&playlist)) {
			return Err(AppError::forbidden(format!(
				"playlist {} is not mutable by {}",
				id, actor.user_id
			)));
		}
		Ok(playlist)
	}

	fn name_conflict(actor_id: &str, name: &str) -> impl FnOnce(DieselError) -> AppError {
		let detail = format!("{actor_id} already has a playlist named {name}");
		move |err| match err {
			DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
				AppError::conflict("playlists(owner_user_id, playlist_name)", detail)
			}
			other => AppError::internal(other),
		}
	}

	/// Creates a user-typed playlist owned by the actor. Names are unique
	/// per owner.
	pub fn create(&self, actor: &Identity, name: &str) -> Result<Playlist, AppError> {
		let name = name.trim();
		if name.is_empty() {
			return Err(AppError::validation("playlist name must not be empty"));
		}

		let mut conn = self.conn()?;
		let new_playlist = Playlist {
			playlist_id: Uuid::new_v4().to_string(),
			playlist_name: name.to_string(),
			playlist_type: PlaylistType::User.as_str().to_string(),
			owner_user_id: Some(actor.user_id.clone()),
			creation_date_time: Utc::now().to_rfc3339(),
		};

		diesel::insert_into(crate::schema::playlists::table)
			.values(&new_playlist)
			.execute(&mut conn)
			.map_err(Self::name_conflict(&actor.user_id, name))?;
		Ok(new_playlist)
	}

	/// System playlists are ownerless and world-readable; only privileged
	/// actors may create them.
	pub fn create_system(&self, actor: &Identity, name: &str) -> Result<Playlist, AppError> {
		if !actor.is_admin() {
			return Err(AppError::forbidden(format!(
				"system playlists cannot be created by {}",
				actor.user_id
			)));
		}
		let name = name.trim();
		if name.is_empty() {
			return Err(AppError::validation("playlist name must not be empty"));
		}

		let mut conn = self.conn()?;
		let new_playlist = Playlist {
			playlist_id: Uuid::new_v4().to_string(),
			playlist_name: name.to_string(),
			playlist_type: PlaylistType::System.as_str().to_string(),
			owner_user_id: None,
			creation_date_time: Utc::now().to_rfc3339(),
		};

		diesel::insert_into(crate::schema::playlists::table)
			.values(&new_playlist)
			.execute(&mut conn)
			.map_err(Self::name_conflict("system", name))?;
		Ok(new_playlist)
	}

	pub fn rename(&self, actor: &Identity, id: &str, new_name: &str) -> Result<(), AppError> {
		let new_name = new_name.trim();
		if new_name.is_empty() {
			return Err(AppError::validation("playlist name must not be empty"));
		}

		let mut conn = self.conn()?;
		Self::mutable(&mut conn, actor, id)?;

		use crate::schema::playlists::dsl::*;
		diesel::update(playlists.filter(playlist_id.eq(id)))
			.set(playlist_name.eq(new_name))
			.execute(&mut conn)
			.map_err(Self::name_conflict(&actor.user_id, new_name))?;
		Ok(())
	}

	/// Deletes the playlist and its membership rows as one unit.
	pub fn delete(&self, actor: &Identity, id: &str) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		Self::mutable(&mut conn, actor, id)?;

		conn.transaction::<_, AppError, _>(|conn| {
			PlaylistEntries::clear_playlist(conn, id).map_err(|err| link_error(err, "playlist song", id))?;

			use crate::schema::playlists::dsl::*;
			diesel::delete(playlists.filter(playlist_id.eq(id))).execute(conn)?;
			Ok(())
		})
	}

	/// Position is stored as provided; a missing position is legal and
	/// sorts after every positioned entry.
	pub fn add_song(&self, actor: &Identity, id: &str, song: &str, position: Option<i32>) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		Self::mutable(&mut conn, actor, id)?;
		song_exists(&mut conn, song)?;
		PlaylistEntries::add(&mut conn, id, song, position)
			.map_err(|err| link_error(err, "playlist song", &format!("playlist {id} song {song}")))
	}

	pub fn remove_song(&self, actor: &Identity, id: &str, song: &str) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		Self::mutable(&mut conn, actor, id)?;
		PlaylistEntries::remove(&mut conn, id, song)
			.map_err(|err| link_error(err, "playlist song", &format!("playlist {id} song {song}")))
	}

	/// Applies a batch of position updates atomically. The batch may only
	/// reposition current members; any unknown song fails the whole call
	/// and leaves the ordering untouched.
	pub fn reorder(&self, actor: &Identity, id: &str, items: &[ReorderItem]) -> Result<(), AppError> {
		if items.is_empty() {
			return Err(AppError::validation("reorder batch must not be empty"));
		}
		let mut seen = HashSet::new();
		for item in items {
			if !seen.insert(item.song_id.as_str()) {
				return Err(AppError::validation(format!(
					"duplicate song {} in reorder batch",
					item.song_id
				)));
			}
		}

		let mut conn = self.conn()?;
		Self::mutable(&mut conn, actor, id)?;

		conn.transaction::<_, AppError, _>(|conn| {
			let members: HashSet<String> = PlaylistEntries::member_ids(conn, id)
				.map_err(|err| link_error(err, "playlist song", id))?
				.into_iter()
				.collect();

			for item in items {
				if !members.contains(&item.song_id) {
					return Err(AppError::not_found("playlist song", &item.song_id));
				}
			}

			for item in items {
				PlaylistEntries::set_position(conn, id, &item.song_id, item.position)
					.map_err(|err| link_error(err, "playlist song", &item.song_id))?;
			}
			Ok(())
		})
	}

	/// The playlist with its songs in playback order: explicit positions
	/// first, then unpositioned entries by insertion time, then song id.
	pub fn playlist_with_songs(&self, actor: &Identity, id: &str) -> Result<PlaylistDetailsResponse, AppError> {
		use crate::schema::{playlist_songs, songs};

		let mut conn = self.conn()?;
		let playlist = Self::readable(&mut conn, actor, id)?;

		let rows = playlist_songs::table
			.filter(playlist_songs::playlist_id.eq(id))
			.inner_join(songs::table)
			.select((playlist_songs::all_columns, songs::all_columns))
			.order((
				playlist_songs::position.is_null().asc(),
				playlist_songs::position.asc(),
				playlist_songs::song_added_date_time.asc(),
				playlist_songs::song_id.asc(),
			))
			.load::<(PlaylistSong, Song)>(&mut conn)?;

		let songs = rows
			.into_iter()
			.map(|(entry, song)| PlaylistSongResponse::from_parts(entry, song))
			.collect();

		Ok(PlaylistDetailsResponse { playlist, songs })
	}

	/// The actor's own playlists plus every system playlist.
	pub fn playlists_for_user(&self, actor: &Identity) -> Result<Vec<Playlist>, AppError> {
		use crate::schema::playlists::dsl::*;

		let mut conn = self.conn()?;
		let results = playlists
			.filter(
				owner_user_id
					.eq(Some(actor.user_id.as_str()))
					.or(playlist_type.eq(PlaylistType::System.as_str()).nullable()),
			)
			.order(creation_date_time.asc())
			.load::<Playlist>(&mut conn)?;
		Ok(results)
	}
}
