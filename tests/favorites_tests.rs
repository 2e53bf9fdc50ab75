mod common;

use common::*;
use diesel::prelude::*;
use harmonia_backend::error::AppError;
use harmonia_backend::harmonia_db::models::FavoriteSong;
use harmonia_backend::services::favorites::FavoritesService;

fn setup() -> (harmonia_backend::harmonia_db::db::DatabasePool, FavoritesService) {
	let pool = test_pool();
	let service = FavoritesService::new(pool.clone());
	(pool, service)
}

#[test]
fn collection_is_provisioned_once_and_reused() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");

	let first = service.collection("alice").unwrap();
	let second = service.collection("alice").unwrap();
	assert_eq!(first.favorites_id, second.favorites_id);
}

#[test]
fn each_user_gets_their_own_collection() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	insert_user(&pool, "bob");

	let alices = service.collection("alice").unwrap();
	let bobs = service.collection("bob").unwrap();
	assert_ne!(alices.favorites_id, bobs.favorites_id);
}

#[test]
fn add_list_remove_round_trip() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let song = insert_song(&pool, "alice", "Night Owl");

	service.add("alice", &song).unwrap();
	let page = service.list("alice", 1, 50).unwrap();
	assert_eq!(page.total, 1);
	assert_eq!(page.songs[0].song_id, song);
	assert!(service.contains("alice", &song).unwrap());

	service.remove("alice", &song).unwrap();
	let page = service.list("alice", 1, 50).unwrap();
	assert_eq!(page.total, 0);
	assert!(!service.contains("alice", &song).unwrap());

	let err = service.remove("alice", &song).unwrap_err();
	assert!(matches!(err, AppError::NotFound { .. }));
}

#[test]
fn favoriting_twice_is_a_conflict() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let song = insert_song(&pool, "alice", "Night Owl");

	service.add("alice", &song).unwrap();
	let err = service.add("alice", &song).unwrap_err();
	assert!(matches!(err, AppError::Conflict { .. }));

	use harmonia_backend::schema::favorites_songs::dsl::*;
	let mut conn = pool.get().unwrap();
	let rows = favorites_songs
		.filter(song_id.eq(&song))
		.load::<FavoriteSong>(&mut conn)
		.unwrap();
	assert_eq!(rows.len(), 1);
}

#[test]
fn favoriting_a_missing_song_is_not_found() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");

	let err = service.add("alice", "no-such-song").unwrap_err();
	assert!(matches!(err, AppError::NotFound { entity: "song", .. }));
}

#[test]
fn listing_without_a_collection_is_an_empty_page() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");

	let page = service.list("alice", 1, 50).unwrap();
	assert_eq!(page.total, 0);
	assert!(page.songs.is_empty());
	assert!(!service.contains("alice", "whatever").unwrap());
}

#[test]
fn listing_orders_most_recent_first_with_song_id_breaking_ties() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let list = service.collection("alice").unwrap();

	let early = insert_song(&pool, "alice", "Early");
	let mut tied_low = insert_song(&pool, "alice", "Tied Low");
	let mut tied_high = insert_song(&pool, "alice", "Tied High");
	// Make the song ids themselves ordered so the tie-break is observable.
	if tied_low > tied_high {
		std::mem::swap(&mut tied_low, &mut tied_high);
	}

	insert_favorite_at(&pool, &list.favorites_id, &early, "2025-01-01T00:00:00+00:00");
	insert_favorite_at(&pool, &list.favorites_id, &tied_low, "2025-02-01T00:00:00+00:00");
	insert_favorite_at(&pool, &list.favorites_id, &tied_high, "2025-02-01T00:00:00+00:00");

	let page = service.list("alice", 1, 50).unwrap();
	let order: Vec<&str> = page.songs.iter().map(|entry| entry.song_id.as_str()).collect();
	assert_eq!(order, vec![tied_high.as_str(), tied_low.as_str(), early.as_str()]);
}

#[test]
fn pagination_reports_the_full_total() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	for n in 0..3 {
		let song = insert_song(&pool, "alice", &format!("Track {n}"));
		service.add("alice", &song).unwrap();
	}

	let first = service.list("alice", 1, 2).unwrap();
	assert_eq!(first.total, 3);
	assert_eq!(first.songs.len(), 2);

	let second = service.list("alice", 2, 2).unwrap();
	assert_eq!(second.total, 3);
	assert_eq!(second.songs.len(), 1);
}

#[test]
fn page_arguments_are_validated() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");

	assert!(matches!(service.list("alice", 0, 10).unwrap_err(), AppError::Validation(_)));
	assert!(matches!(service.list("alice", 1, 0).unwrap_err(), AppError::Validation(_)));
}
