//! Orchestrates the song->album, song<->artist and song<->genre relations.
//!
//! Album membership is exclusive: assigning again moves the song, it never
//! produces a second row. Artist and genre membership is additive: the same
//! pair twice is a conflict. The store encodes the asymmetry in its two
//! capability traits; this service keeps the distinction visible in its
//! operation names and never upserts a set-membership link.

use diesel::prelude::*;

use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::db::{DatabasePool, PooledConn};
use crate::harmonia_db::links::{AlbumAssignment, AlbumSlot, ArtistLinks, ExclusiveSlot, GenreLinks, SetMembership};
use crate::harmonia_db::models::{Album, AlbumAssignmentResponse, Artist, ArtistCredit, Genre, Song, SongDetailsResponse};
use crate::services::{link_error, owned_song};

#[derive(Clone)]
pub struct AssociationService {
	db_pool: DatabasePool,
}

impl AssociationService {
	pub fn new(db_pool: DatabasePool) -> AssociationService {
		AssociationService { db_pool }
	}

	fn conn(&self) -> Result<PooledConn, AppError> {
		Ok(self.db_pool.get()?)
	}

	pub fn assign_album(
		&self,
		actor: &Identity,
		song_id: &str,
		album_id: &str,
		track_number: Option<i32>,
	) -> Result<(), AppError> {
		if let Some(n) = track_number {
			if n <= 0 {
				return Err(AppError::validation(format!("track number must be positive, got {n}")));
			}
		}

		let mut conn = self.conn()?;
		owned_song(&mut conn, actor, song_id)?;
		Self::album_exists(&mut conn, album_id)?;

		let slot = AlbumAssignment {
			album_id: album_id.to_string(),
			track_number,
		};
		AlbumSlot::assign(&mut conn, song_id, slot).map_err(|err| link_error(err, "album link", song_id))
	}

	pub fn unassign_album(&self, actor: &Identity, song_id: &str) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		owned_song(&mut conn, actor, song_id)?;
		AlbumSlot::clear(&mut conn, song_id).map_err(|err| link_error(err, "album link", song_id))
	}

	pub fn add_artist(
		&self,
		actor: &Identity,
		song_id: &str,
		artist_id: &str,
		role: Option<String>,
	) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		owned_song(&mut conn, actor, song_id)?;
		Self::artist_exists(&mut conn, artist_id)?;
		ArtistLinks::add(&mut conn, song_id, artist_id, role)
			.map_err(|err| link_error(err, "artist link", &format!("song {song_id} artist {artist_id}")))
	}

	pub fn remove_artist(&self, actor: &Identity, song_id: &str, artist_id: &str) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		owned_song(&mut conn, actor, song_id)?;
		ArtistLinks::remove(&mut conn, song_id, artist_id)
			.map_err(|err| link_error(err, "artist link", &format!("song {song_id} artist {artist_id}")))
	}

	pub fn add_genre(&self, actor: &Identity, song_id: &str, genre_id: &str) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		owned_song(&mut conn, actor, song_id)?;
		Self::genre_exists(&mut conn, genre_id)?;
		GenreLinks::add(&mut conn, song_id, genre_id, ())
			.map_err(|err| link_error(err, "genre link", &format!("song {song_id} genre {genre_id}")))
	}

	pub fn remove_genre(&self, actor: &Identity, song_id: &str, genre_id: &str) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		owned_song(&mut conn, actor, song_id)?;
		GenreLinks::remove(&mut conn, song_id, genre_id)
			.map_err(|err| link_error(err, "genre link", &format!("song {song_id} genre {genre_id}")))
	}

	/// A song with its album slot, artist credits and genres. Catalog reads
	/// are public; no gate applies.
	pub fn song_details(&self, id: &str) -> Result<SongDetailsResponse, AppError> {
		use crate::schema::{album_songs, albums, artists, genres, song_artists, song_genres, songs};

		let mut conn = self.conn()?;

		let song = songs::table
			.filter(songs::song_id.eq(id))
			.first::<Song>(&mut conn)
			.optional()?
			.ok_or_else(|| AppError::not_found("song", id))?;

		let album = album_songs::table
			.filter(album_songs::song_id.eq(id))
			.inner_join(albums::table)
			.select((albums::all_columns, album_songs::track_number))
			.first::<(Album, Option<i32>)>(&mut conn)
			.optional()?
			.map(|(album, track_number)| AlbumAssignmentResponse {
				album_id: album.album_id,
				title: album.title,
				track_number,
			});

		let artists = song_artists::table
			.filter(song_artists::song_id.eq(id))
			.inner_join(artists::table)
			.select((artists::all_columns, song_artists::artist_role))
			.order(artists::name.asc())
			.load::<(Artist, Option<String>)>(&mut conn)?
			.into_iter()
			.map(|(artist, artist_role)| ArtistCredit {
				artist_id: artist.artist_id,
				name: artist.name,
				artist_role,
			})
			.collect();

		let genres = song_genres::table
			.filter(song_genres::song_id.eq(id))
			.inner_join(genres::table)
			.select(genres::all_columns)
			.order(genres::name.asc())
			.load::<Genre>(&mut conn)?;

		Ok(SongDetailsResponse {
			song,
			album,
			artists,
			genres,
		})
	}

	fn album_exists(conn: &mut SqliteConnection, id: &str) -> Result<(), AppError> {
		use crate::schema::albums::dsl::*;

		let found = albums.filter(album_id.eq(id)).select(album_id).first::<String>(conn).optional()?;
		if found.is_none() {
			return Err(AppError::not_found("album", id));
		}
		Ok(())
	}

	fn artist_exists(conn: &mut SqliteConnection, id: &str) -> Result<(), AppError> {
		use crate::schema::artists::dsl::*;

		let found = artists
			.filter(artist_id.eq(id))
			.select(artist_id)
			.first::<String>(conn)
			.optional()?;
		if found.is_none() {
			return Err(AppError::not_found("artist", id));
		}
		Ok(())
	}

	fn genre_exists(conn: &mut SqliteConnection, id: &str) -> Result<(), AppError> {
		use crate::schema::genres::dsl::*;

		let found = genres.filter(genre_id.eq(id)).select(genre_id).first::<String>(conn).optional()?;
		if found.is_none() {
			return Err(AppError::not_found("genre", id));
		}
		Ok(())
	}
}
