//! Registry for the catalog entities themselves: songs, artists, genres,
//! albums. Songs are owned by their uploading user; artists, genres and
//! albums have independent lifecycles and no owner.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::identity::Identity;
use crate::error::AppError;
use crate::harmonia_db::db::{DatabasePool, PooledConn};
use crate::harmonia_db::links;
use crate::harmonia_db::models::{Album, AlbumDetailsResponse, AlbumTrackResponse, Artist, Genre, Song};
use crate::services::{link_error, owned_song};

#[derive(Debug, Deserialize)]
pub struct NewSongRequest {
	pub title: String,
	pub duration: Option<i64>,
	pub media_url: String,
	pub release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSongRequest {
	pub title: Option<String>,
	pub duration: Option<i64>,
	pub media_url: Option<String>,
	pub release_date: Option<String>,
}

#[derive(Clone)]
pub struct CatalogService {
	db_pool: DatabasePool,
}

impl CatalogService {
	pub fn new(db_pool: DatabasePool) -> CatalogService {
		CatalogService { db_pool }
	}

	fn conn(&self) -> Result<PooledConn, AppError> {
		Ok(self.db_pool.get()?)
	}

	fn check_duration(duration: Option<i64>) -> Result<(), AppError> {
		if let Some(secs) = duration {
			if secs <= 0 {
				return Err(AppError::validation(format!("duration must be positive, got {secs}")));
			}
		}
		Ok(())
	}

	pub fn register_song(&self, actor: &Identity, request: NewSongRequest) -> Result<Song, AppError> {
		let title = request.title.trim();
		if title.is_empty() {
			return Err(AppError::validation("song title must not be empty"));
		}
		if request.media_url.trim().is_empty() {
			return Err(AppError::validation("media url must not be empty"));
		}
		Self::check_duration(request.duration)?;

		let mut conn = self.conn()?;
		let new_song = Song {
			song_id: Uuid::new_v4().to_string(),
			title: title.to_string(),
			duration: request.duration,
			media_url: request.media_url,
			release_date: request.release_date,
			owner_user_id: actor.user_id.clone(),
		};

		diesel::insert_into(crate::schema::songs::table)
			.values(&new_song)
			.execute(&mut conn)?;
		Ok(new_song)
	}

	pub fn update_song(&self, actor: &Identity, id: &str, request: UpdateSongRequest) -> Result<Song, AppError> {
		Self::check_duration(request.duration)?;
		if let Some(new_title) = &request.title {
			if new_title.trim().is_empty() {
				return Err(AppError::validation("song title must not be empty"));
			}
		}

		let mut conn = self.conn()?;
		let mut song = owned_song(&mut conn, actor, id)?;

		if let Some(new_title) = request.title {
			song.title = new_title.trim().to_string();
		}
		if let Some(secs) = request.duration {
			song.duration = Some(secs);
		}
		if let Some(url) = request.media_url {
			if url.trim().is_empty() {
				return Err(AppError::validation("media url must not be empty"));
			}
			song.media_url = url;
		}
		if let Some(date) = request.release_date {
			song.release_date = Some(date);
		}

		use crate::schema::songs::dsl::*;
		diesel::update(songs.filter(song_id.eq(id)))
			.set((
				title.eq(&song.title),
				duration.eq(song.duration),
				media_url.eq(&song.media_url),
				release_date.eq(song.release_date.clone()),
			))
			.execute(&mut conn)?;
		Ok(song)
	}

	/// Removes the song and every link row that references it as one unit,
	/// so no playlist or favorites entry is left dangling.
	pub fn delete_song(&self, actor: &Identity, id: &str) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		owned_song(&mut conn, actor, id)?;

		conn.transaction::<_, AppError, _>(|conn| {
			links::purge_song_links(conn, id).map_err(|err| link_error(err, "song link", id))?;

			use crate::schema::songs::dsl::*;
			diesel::delete(songs.filter(song_id.eq(id))).execute(conn)?;
			Ok(())
		})
	}

	pub fn browse_songs(&self, start_index: i64, page_length: Option<i64>) -> Result<Vec<Song>, AppError> {
		use crate::schema::songs::dsl::*;

		let mut conn = self.conn()?;
		let mut query = songs.order(title.asc()).offset(start_index.max(0)).into_boxed();
		if let Some(length) = page_length {
			if length > 0 {
				query = query.limit(length);
			}
		}
		Ok(query.load::<Song>(&mut conn)?)
	}

	pub fn create_artist(&self, name: &str, bio: Option<String>) -> Result<Artist, AppError> {
		let name = name.trim();
		if name.is_empty() {
			return Err(AppError::validation("artist name must not be empty"));
		}

		let mut conn = self.conn()?;
		let new_artist = Artist {
			artist_id: Uuid::new_v4().to_string(),
			name: name.to_string(),
			bio,
		};
		diesel::insert_into(crate::schema::artists::table)
			.values(&new_artist)
			.execute(&mut conn)?;
		Ok(new_artist)
	}

	pub fn browse_artists(&self) -> Result<Vec<Artist>, AppError> {
		use crate::schema::artists::dsl::*;

		let mut conn = self.conn()?;
		Ok(artists.order(name.asc()).load::<Artist>(&mut conn)?)
	}

	/// Genre names are unique across the catalog.
	pub fn create_genre(&self, name: &str) -> Result<Genre, AppError> {
		let name = name.trim();
		if name.is_empty() {
			return Err(AppError::validation("genre name must not be empty"));
		}

		let mut conn = self.conn()?;
		let new_genre = Genre {
			genre_id: Uuid::new_v4().to_string(),
			name: name.to_string(),
		};
		diesel::insert_into(crate::schema::genres::table)
			.values(&new_genre)
			.execute(&mut conn)
			.map_err(|err| match err {
				DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
					AppError::conflict("genres(name)", format!("genre {name} already exists"))
				}
				other => AppError::internal(other),
			})?;
		Ok(new_genre)
	}

	pub fn browse_genres(&self) -> Result<Vec<Genre>, AppError> {
		use crate::schema::genres::dsl::*;

		let mut conn = self.conn()?;
		Ok(genres.order(name.asc()).load::<Genre>(&mut conn)?)
	}

	pub fn create_album(&self, title: &str, release_date: Option<String>) -> Result<Album, AppError> {
		let title = title.trim();
		if title.is_empty() {
			return Err(AppError::validation("album title must not be empty"));
		}

		let mut conn = self.conn()?;
		let new_album = Album {
			album_id: Uuid::new_v4().to_string(),
			title: title.to_string(),
			release_date,
		};
		diesel::insert_into(crate::schema::albums::table)
			.values(&new_album)
			.execute(&mut conn)?;
		Ok(new_album)
	}

	pub fn browse_albums(&self) -> Result<Vec<Album>, AppError> {
		use crate::schema::albums::dsl::*;

		let mut conn = self.conn()?;
		Ok(albums.order(title.asc()).load::<Album>(&mut conn)?)
	}

	/// An album with its tracks in track order; unnumbered tracks sort
	/// last, then by song id.
	pub fn album_with_tracks(&self, id: &str) -> Result<AlbumDetailsResponse, AppError> {
		use crate::schema::{album_songs, albums, songs};

		let mut conn = self.conn()?;
		let album = albums::table
			.filter(albums::album_id.eq(id))
			.first::<Album>(&mut conn)
			.optional()?
			.ok_or_else(|| AppError::not_found("album", id))?;

		let rows = album_songs::table
			.filter(album_songs::album_id.eq(id))
			.inner_join(songs::table)
			.select((album_songs::track_number, songs::all_columns))
			.order((
				album_songs::track_number.is_null().asc(),
				album_songs::track_number.asc(),
				album_songs::song_id.asc(),
			))
			.load::<(Option<i32>, Song)>(&mut conn)?;

		let tracks = rows
			.into_iter()
			.map(|(track_number, song)| AlbumTrackResponse {
				song_id: song.song_id,
				title: song.title,
				duration: song.duration,
				track_number,
			})
			.collect();

		Ok(AlbumDetailsResponse { album, tracks })
	}
}
