#![allow(dead_code)]

use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::MigrationHarness;
use uuid::Uuid;

use harmonia_backend::core::identity::{Identity, Role};
use harmonia_backend::core::migrations::MIGRATIONS;
use harmonia_backend::harmonia_db::db::DatabasePool;
use harmonia_backend::harmonia_db::models::User;

/// A single-connection pool over an in-memory database with migrations
/// applied. Capping the pool at one connection keeps every caller on the
/// same in-memory database.
pub fn test_pool() -> DatabasePool {
	let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
	let pool = Pool::builder()
		.max_size(1)
		.build(manager)
		.expect("Failed to create pool");

	let mut conn = pool.get().unwrap();
	conn.run_pending_migrations(MIGRATIONS).expect("Failed to run migrations");
	pool
}

pub fn identity(id: &str) -> Identity {
	Identity {
		user_id: id.to_string(),
		role: Role::User,
	}
}

pub fn admin_identity(id: &str) -> Identity {
	Identity {
		user_id: id.to_string(),
		role: Role::Admin,
	}
}

pub fn insert_user(pool: &DatabasePool, id: &str) {
	use harmonia_backend::schema::users::dsl::*;

	let mut conn = pool.get().unwrap();
	let user = User {
		user_id: id.to_string(),
		username: id.to_string(),
		email: format!("{id}@example.com"),
		pwd_hash: "not-a-real-hash".to_string(),
	};
	diesel::insert_into(users).values(&user).execute(&mut conn).unwrap();
}

pub fn insert_song(pool: &DatabasePool, owner: &str, song_title: &str) -> String {
	use harmonia_backend::schema::songs::dsl::*;

	let id = Uuid::new_v4().to_string();
	let mut conn = pool.get().unwrap();
	diesel::insert_into(songs)
		.values((
			song_id.eq(&id),
			title.eq(song_title),
			duration.eq(Some(180_i64)),
			media_url.eq(format!("https://cdn.example.com/audio/{id}.mp3")),
			owner_user_id.eq(owner),
		))
		.execute(&mut conn)
		.unwrap();
	id
}

pub fn insert_album(pool: &DatabasePool, album_title: &str) -> String {
	use harmonia_backend::schema::albums::dsl::*;

	let id = Uuid::new_v4().to_string();
	let mut conn = pool.get().unwrap();
	diesel::insert_into(albums)
		.values((album_id.eq(&id), title.eq(album_title)))
		.execute(&mut conn)
		.unwrap();
	id
}

pub fn insert_artist(pool: &DatabasePool, artist_name: &str) -> String {
	use harmonia_backend::schema::artists::dsl::*;

	let id = Uuid::new_v4().to_string();
	let mut conn = pool.get().unwrap();
	diesel::insert_into(artists)
		.values((artist_id.eq(&id), name.eq(artist_name)))
		.execute(&mut conn)
		.unwrap();
	id
}

pub fn insert_genre(pool: &DatabasePool, genre_name: &str) -> String {
	use harmonia_backend::schema::genres::dsl::*;

	let id = Uuid::new_v4().to_string();
	let mut conn = pool.get().unwrap();
	diesel::insert_into(genres)
		.values((genre_id.eq(&id), name.eq(genre_name)))
		.execute(&mut conn)
		.unwrap();
	id
}

pub fn insert_system_playlist(pool: &DatabasePool, name: &str) -> String {
	use harmonia_backend::schema::playlists::dsl::*;

	let id = Uuid::new_v4().to_string();
	let mut conn = pool.get().unwrap();
	diesel::insert_into(playlists)
		.values((
			playlist_id.eq(&id),
			playlist_name.eq(name),
			playlist_type.eq("system"),
			owner_user_id.eq(None::<String>),
			creation_date_time.eq(Utc::now().to_rfc3339()),
		))
		.execute(&mut conn)
		.unwrap();
	id
}

/// Inserts a favorites row directly with a fixed timestamp, for ordering
/// assertions that need controlled ties.
pub fn insert_favorite_at(pool: &DatabasePool, favorites: &str, song: &str, at: &str) {
	use harmonia_backend::schema::favorites_songs::dsl::*;

	let mut conn = pool.get().unwrap();
	diesel::insert_into(favorites_songs)
		.values((favorites_id.eq(favorites), song_id.eq(song), added_at.eq(at)))
		.execute(&mut conn)
		.unwrap();
}
