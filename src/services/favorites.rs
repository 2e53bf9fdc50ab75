//! The per-user favorites collection. Provisioned lazily on first use; the
//! UNIQUE constraint on the owner column arbitrates concurrent first use,
//! and the losing inserter adopts the winner's collection.

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

use crate::error::AppError;
use crate::harmonia_db::db::{DatabasePool, PooledConn};
use crate::harmonia_db::links::{FavoriteEntries, SetMembership};
use crate::harmonia_db::models::{FavoriteSongResponse, FavoritesList, FavoritesPage, Song};
use crate::services::{link_error, song_exists};

#[derive(Clone)]
pub struct FavoritesService {
	db_pool: DatabasePool,
}

impl FavoritesService {
	pub fn new(db_pool: DatabasePool) -> FavoritesService {
		FavoritesService { db_pool }
	}

	fn conn(&self) -> Result<PooledConn, AppError> {
		Ok(self.db_pool.get()?)
	}

	fn find(conn: &mut SqliteConnection, user: &str) -> Result<Option<FavoritesList>, AppError> {
		use crate::schema::favorites_lists::dsl::*;

		let existing = favorites_lists
			.filter(owner_user_id.eq(user))
			.first::<FavoritesList>(conn)
			.optional()?;
		Ok(existing)
	}

	fn get_or_create(conn: &mut SqliteConnection, user: &str) -> Result<FavoritesList, AppError> {
		if let Some(existing) = Self::find(conn, user)? {
			return Ok(existing);
		}

		let created = FavoritesList {
			favorites_id: Uuid::new_v4().to_string(),
			owner_user_id: user.to_string(),
			created_at: Utc::now().to_rfc3339(),
		};

		use crate::schema::favorites_lists::dsl::*;
		match diesel::insert_into(favorites_lists).values(&created).execute(conn) {
			Ok(_) => Ok(created),
			// A concurrent first use won the insert; adopt its collection.
			Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
				let existing = favorites_lists
					.filter(owner_user_id.eq(user))
					.first::<FavoritesList>(conn)?;
				Ok(existing)
			}
			Err(err) => Err(AppError::internal(err)),
		}
	}

	/// Idempotent: the same user always gets the same collection back.
	pub fn collection(&self, user: &str) -> Result<FavoritesList, AppError> {
		let mut conn = self.conn()?;
		Self::get_or_create(&mut conn, user)
	}

	pub fn add(&self, user: &str, song: &str) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		let list = Self::get_or_create(&mut conn, user)?;
		song_exists(&mut conn, song)?;
		FavoriteEntries::add(&mut conn, &list.favorites_id, song, ())
			.map_err(|err| link_error(err, "favorite song", song))
	}

	pub fn remove(&self, user: &str, song: &str) -> Result<(), AppError> {
		let mut conn = self.conn()?;
		let list = Self::find(&mut conn, user)?.ok_or_else(|| AppError::not_found("favorite song", song))?;
		FavoriteEntries::remove(&mut conn, &list.favorites_id, song)
			.map_err(|err| link_error(err, "favorite song", song))
	}

	pub fn contains(&self, user: &str, song: &str) -> Result<bool, AppError> {
		let mut conn = self.conn()?;
		let list = match Self::find(&mut conn, user)? {
			Some(list) => list,
			None => return Ok(false),
		};
		FavoriteEntries::contains(&mut conn, &list.favorites_id, song).map_err(|err| link_error(err, "favorite song", song))
	}

	/// Most recently favorited first, ties broken by song id descending.
	pub fn list(&self, user: &str, page: i64, page_size: i64) -> Result<FavoritesPage, AppError> {
		use crate::schema::{favorites_songs, songs};

		if page < 1 {
			return Err(AppError::validation(format!("page must be at least 1, got {page}")));
		}
		if page_size < 1 {
			return Err(AppError::validation(format!("page size must be at least 1, got {page_size}")));
		}

		let mut conn = self.conn()?;
		let list = match Self::find(&mut conn, user)? {
			Some(list) => list,
			None => {
				return Ok(FavoritesPage {
					total: 0,
					songs: vec![],
				})
			}
		};

		let total = favorites_songs::table
			.filter(favorites_songs::favorites_id.eq(&list.favorites_id))
			.count()
			.get_result::<i64>(&mut conn)?;

		let rows = favorites_songs::table
			.filter(favorites_songs::favorites_id.eq(&list.favorites_id))
			.inner_join(songs::table)
			.select((favorites_songs::added_at, songs::all_columns))
			.order((favorites_songs::added_at.desc(), favorites_songs::song_id.desc()))
			.offset((page - 1) * page_size)
			.limit(page_size)
			.load::<(String, Song)>(&mut conn)?;

		let songs = rows
			.into_iter()
			.map(|(added_at, song)| FavoriteSongResponse::from_parts(added_at, song))
			.collect();

		Ok(FavoritesPage { total, songs })
	}
}
