//! Persistence for the link tables of the catalog.
//!
//! Two uniqueness shapes live here and must not be blurred. The song->album
//! relation is an exclusive slot: `assign` replaces whatever was there. The
//! song<->artist, song<->genre, playlist and favorites relations are set
//! membership: `add` reports a duplicate pair as a conflict, never an
//! overwrite. Uniqueness violations surface as [`StoreError::Conflict`]
//! carrying the violated constraint, so callers never inspect raw diesel
//! errors.

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

#[derive(Debug)]
pub enum StoreError {
	/// A uniqueness constraint rejected the write.
	Conflict { constraint: &'static str },
	/// The targeted row does not exist.
	Missing,
	Database(DieselError),
}

impl From<DieselError> for StoreError {
	fn from(err: DieselError) -> StoreError {
		StoreError::Database(err)
	}
}

fn conflict_on(constraint: &'static str) -> impl FnOnce(DieselError) -> StoreError {
	move |err| match err {
		DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => StoreError::Conflict { constraint },
		other => StoreError::Database(other),
	}
}

/// Relation where the owner holds at most one row at a time. Assigning
/// overwrites the previous value in place; clearing an empty slot is an
/// error so callers can tell "already detached" from "detached now".
pub trait ExclusiveSlot {
	type Slot;

	fn assign(conn: &mut SqliteConnection, owner_id: &str, slot: Self::Slot) -> Result<(), StoreError>;
	fn clear(conn: &mut SqliteConnection, owner_id: &str) -> Result<(), StoreError>;
}

/// Relation where the owner holds any number of rows. Adding a member that
/// is already present is a conflict; removing an absent one is an error.
pub trait SetMembership {
	type Attrs;

	fn add(conn: &mut SqliteConnection, owner_id: &str, member_id: &str, attrs: Self::Attrs) -> Result<(), StoreError>;
	fn remove(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<(), StoreError>;
	fn contains(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<bool, StoreError>;
}

pub struct AlbumAssignment {
	pub album_id: String,
	pub track_number: Option<i32>,
}

/// song -> album, keyed by song alone.
pub struct AlbumSlot;

impl ExclusiveSlot for AlbumSlot {
	type Slot = AlbumAssignment;

	fn assign(conn: &mut SqliteConnection, owner_id: &str, slot: AlbumAssignment) -> Result<(), StoreError> {
		use crate::schema::album_songs::dsl::*;

		diesel::insert_into(album_songs)
			.values((
				song_id.eq(owner_id),
				album_id.eq(&slot.album_id),
				track_number.eq(slot.track_number),
			))
			.on_conflict(song_id)
			.do_update()
			.set((album_id.eq(&slot.album_id), track_number.eq(slot.track_number)))
			.execute(conn)?;
		Ok(())
	}

	fn clear(conn: &mut SqliteConnection, owner_id: &str) -> Result<(), StoreError> {
		use crate::schema::album_songs::dsl::*;

		let deleted = diesel::delete(album_songs.filter(song_id.eq(owner_id))).execute(conn)?;
		if deleted == 0 {
			return Err(StoreError::Missing);
		}
		Ok(())
	}
}

/// song <-> artist, with an optional role on the link.
pub struct ArtistLinks;

impl SetMembership for ArtistLinks {
	type Attrs = Option<String>;

	fn add(conn: &mut SqliteConnection, owner_id: &str, member_id: &str, attrs: Option<String>) -> Result<(), StoreError> {
		use crate::schema::song_artists::dsl::*;

		diesel::insert_into(song_artists)
			.values((song_id.eq(owner_id), artist_id.eq(member_id), artist_role.eq(attrs)))
			.execute(conn)
			.map_err(conflict_on("song_artists(song_id, artist_id)"))?;
		Ok(())
	}

	fn remove(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<(), StoreError> {
		use crate::schema::song_artists::dsl::*;

		let deleted = diesel::delete(song_artists.filter(song_id.eq(owner_id)).filter(artist_id.eq(member_id)))
			.execute(conn)?;
		if deleted == 0 {
			return Err(StoreError::Missing);
		}
		Ok(())
	}

	fn contains(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<bool, StoreError> {
		use crate::schema::song_artists::dsl::*;

		let found = song_artists
			.filter(song_id.eq(owner_id))
			.filter(artist_id.eq(member_id))
			.select(artist_id)
			.first::<String>(conn)
			.optional()?;
		Ok(found.is_some())
	}
}

/// song <-> genre.
pub struct GenreLinks;

impl SetMembership for GenreLinks {
	type Attrs = ();

	fn add(conn: &mut SqliteConnection, owner_id: &str, member_id: &str, _attrs: ()) -> Result<(), StoreError> {
		use crate::schema::song_genres::dsl::*;

		diesel::insert_into(song_genres)
			.values((song_id.eq(owner_id), genre_id.eq(member_id)))
			.execute(conn)
			.map_err(conflict_on("song_genres(song_id, genre_id)"))?;
		Ok(())
	}

	fn remove(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<(), StoreError> {
		use crate::schema::song_genres::dsl::*;

		let deleted = diesel::delete(song_genres.filter(song_id.eq(owner_id)).filter(genre_id.eq(member_id)))
			.execute(conn)?;
		if deleted == 0 {
			return Err(StoreError::Missing);
		}
		Ok(())
	}

	fn contains(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<bool, StoreError> {
		use crate::schema::song_genres::dsl::*;

		let found = song_genres
			.filter(song_id.eq(owner_id))
			.filter(genre_id.eq(member_id))
			.select(genre_id)
			.first::<String>(conn)
			.optional()?;
		Ok(found.is_some())
	}
}

/// playlist <-> song, ordered by an explicit nullable position.
pub struct PlaylistEntries;

impl SetMembership for PlaylistEntries {
	type Attrs = Option<i32>;

	fn add(conn: &mut SqliteConnection, owner_id: &str, member_id: &str, attrs: Option<i32>) -> Result<(), StoreError> {
		use crate::schema::playlist_songs::dsl::*;

		diesel::insert_into(playlist_songs)
			.values((
				playlist_id.eq(owner_id),
				song_id.eq(member_id),
				position.eq(attrs),
				song_added_date_time.eq(Utc::now().to_rfc3339()),
			))
			.execute(conn)
			.map_err(conflict_on("playlist_songs(playlist_id, song_id)"))?;
		Ok(())
	}

	fn remove(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<(), StoreError> {
		use crate::schema::playlist_songs::dsl::*;

		let deleted = diesel::delete(playlist_songs.filter(playlist_id.eq(owner_id)).filter(song_id.eq(member_id)))
			.execute(conn)?;
		if deleted == 0 {
			return Err(StoreError::Missing);
		}
		Ok(())
	}

	fn contains(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<bool, StoreError> {
		use crate::schema::playlist_songs::dsl::*;

		let found = playlist_songs
			.filter(playlist_id.eq(owner_id))
			.filter(song_id.eq(member_id))
			.select(song_id)
			.first::<String>(conn)
			.optional()?;
		Ok(found.is_some())
	}
}

impl PlaylistEntries {
	pub fn member_ids(conn: &mut SqliteConnection, owner_id: &str) -> Result<Vec<String>, StoreError> {
		use crate::schema::playlist_songs::dsl::*;

		let ids = playlist_songs
			.filter(playlist_id.eq(owner_id))
			.select(song_id)
			.load::<String>(conn)?;
		Ok(ids)
	}

	pub fn set_position(
		conn: &mut SqliteConnection,
		owner_id: &str,
		member_id: &str,
		new_position: i32,
	) -> Result<(), StoreError> {
		use crate::schema::playlist_songs::dsl::*;

		let updated = diesel::update(playlist_songs.filter(playlist_id.eq(owner_id)).filter(song_id.eq(member_id)))
			.set(position.eq(new_position))
			.execute(conn)?;
		if updated == 0 {
			return Err(StoreError::Missing);
		}
		Ok(())
	}

	pub fn clear_playlist(conn: &mut SqliteConnection, owner_id: &str) -> Result<usize, StoreError> {
		use crate::schema::playlist_songs::dsl::*;

		let deleted = diesel::delete(playlist_songs.filter(playlist_id.eq(owner_id))).execute(conn)?;
		Ok(deleted)
	}
}

/// favorites collection <-> song.
pub struct FavoriteEntries;

impl SetMembership for FavoriteEntries {
	type Attrs = ();

	fn add(conn: &mut SqliteConnection, owner_id: &str, member_id: &str, _attrs: ()) -> Result<(), StoreError> {
		use crate::schema::favorites_songs::dsl::*;

		diesel::insert_into(favorites_songs)
			.values((
				favorites_id.eq(owner_id),
				song_id.eq(member_id),
				added_at.eq(Utc::now().to_rfc3339()),
			))
			.execute(conn)
			.map_err(conflict_on("favorites_songs(favorites_id, song_id)"))?;
		Ok(())
	}

	fn remove(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<(), StoreError> {
		use crate::schema::favorites_songs::dsl::*;

		let deleted = diesel::delete(favorites_songs.filter(favorites_id.eq(owner_id)).filter(song_id.eq(member_id)))
			.execute(conn)?;
		if deleted == 0 {
			return Err(StoreError::Missing);
		}
		Ok(())
	}

	fn contains(conn: &mut SqliteConnection, owner_id: &str, member_id: &str) -> Result<bool, StoreError> {
		use crate::schema::favorites_songs::dsl::*;

		let found = favorites_songs
			.filter(favorites_id.eq(owner_id))
			.filter(song_id.eq(member_id))
			.select(song_id)
			.first::<String>(conn)
			.optional()?;
		Ok(found.is_some())
	}
}

/// Deletes every link row that references a song. Run inside the same
/// transaction as the songs-row delete so the cascade is atomic.
pub fn purge_song_links(conn: &mut SqliteConnection, target: &str) -> Result<(), StoreError> {
	use crate::schema::{album_songs, favorites_songs, playlist_songs, song_artists, song_genres};

	diesel::delete(song_artists::table.filter(song_artists::song_id.eq(target))).execute(conn)?;
	diesel::delete(song_genres::table.filter(song_genres::song_id.eq(target))).execute(conn)?;
	diesel::delete(album_songs::table.filter(album_songs::song_id.eq(target))).execute(conn)?;
	diesel::delete(playlist_songs::table.filter(playlist_songs::song_id.eq(target))).execute(conn)?;
	diesel::delete(favorites_songs::table.filter(favorites_songs::song_id.eq(target))).execute(conn)?;
	Ok(())
}
