mod common;

use common::*;
use diesel::prelude::*;
use harmonia_backend::error::AppError;
use harmonia_backend::harmonia_db::models::{AlbumSong, SongArtist, SongGenre};
use harmonia_backend::services::association::AssociationService;

fn setup() -> (harmonia_backend::harmonia_db::db::DatabasePool, AssociationService) {
	let pool = test_pool();
	let service = AssociationService::new(pool.clone());
	(pool, service)
}

#[test]
fn album_slot_is_exclusive_and_latest_assignment_wins() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");
	let first = insert_album(&pool, "First Light");
	let second = insert_album(&pool, "Second Sun");

	service.assign_album(&actor, &song, &first, Some(1)).unwrap();
	service.assign_album(&actor, &song, &second, Some(7)).unwrap();

	use harmonia_backend::schema::album_songs::dsl::*;
	let mut conn = pool.get().unwrap();
	let rows = album_songs
		.filter(song_id.eq(&song))
		.load::<AlbumSong>(&mut conn)
		.unwrap();

	assert_eq!(rows.len(), 1, "repeated assignment must never produce a second row");
	assert_eq!(rows[0].album_id, second);
	assert_eq!(rows[0].track_number, Some(7));
}

#[test]
fn reassigning_same_album_updates_track_number_in_place() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");
	let album = insert_album(&pool, "First Light");

	service.assign_album(&actor, &song, &album, Some(2)).unwrap();
	service.assign_album(&actor, &song, &album, Some(9)).unwrap();

	use harmonia_backend::schema::album_songs::dsl::*;
	let mut conn = pool.get().unwrap();
	let rows = album_songs
		.filter(song_id.eq(&song))
		.load::<AlbumSong>(&mut conn)
		.unwrap();
	assert_eq!(rows.len(), 1);
	assert_eq!(rows[0].track_number, Some(9));
}

#[test]
fn unassigning_without_an_album_is_not_found() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");

	let err = service.unassign_album(&actor, &song).unwrap_err();
	assert!(matches!(err, AppError::NotFound { .. }));
}

#[test]
fn unassigning_twice_reports_the_second_as_not_found() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");
	let album = insert_album(&pool, "First Light");

	service.assign_album(&actor, &song, &album, None).unwrap();
	service.unassign_album(&actor, &song).unwrap();

	let err = service.unassign_album(&actor, &song).unwrap_err();
	assert!(matches!(err, AppError::NotFound { .. }));
}

#[test]
fn assigning_to_a_missing_album_is_not_found() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");

	let err = service.assign_album(&actor, &song, "no-such-album", None).unwrap_err();
	assert!(matches!(err, AppError::NotFound { entity: "album", .. }));
}

#[test]
fn non_owner_cannot_touch_album_assignment() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	insert_user(&pool, "bob");
	let song = insert_song(&pool, "alice", "Night Owl");
	let album = insert_album(&pool, "First Light");

	let stranger = identity("bob");
	let err = service.assign_album(&stranger, &song, &album, None).unwrap_err();
	assert!(matches!(err, AppError::Forbidden(_)));
}

#[test]
fn zero_track_number_is_rejected() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");
	let album = insert_album(&pool, "First Light");

	let err = service.assign_album(&actor, &song, &album, Some(0)).unwrap_err();
	assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn duplicate_artist_link_is_a_conflict_and_slot_is_reusable_after_removal() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");
	let artist = insert_artist(&pool, "The Owls");

	service
		.add_artist(&actor, &song, &artist, Some("featured".to_string()))
		.unwrap();

	let err = service.add_artist(&actor, &song, &artist, None).unwrap_err();
	assert!(matches!(err, AppError::Conflict { .. }));

	{
		use harmonia_backend::schema::song_artists::dsl::*;
		let mut conn = pool.get().unwrap();
		let links = song_artists
			.filter(song_id.eq(&song))
			.load::<SongArtist>(&mut conn)
			.unwrap();
		assert_eq!(links.len(), 1);
		assert_eq!(links[0].artist_role.as_deref(), Some("featured"));
	}

	service.remove_artist(&actor, &song, &artist).unwrap();
	service.add_artist(&actor, &song, &artist, None).unwrap();
}

#[test]
fn removing_an_absent_artist_link_is_not_found() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");
	let artist = insert_artist(&pool, "The Owls");

	let err = service.remove_artist(&actor, &song, &artist).unwrap_err();
	assert!(matches!(err, AppError::NotFound { .. }));
}

#[test]
fn duplicate_genre_link_is_a_conflict() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");
	let genre = insert_genre(&pool, "ambient");

	service.add_genre(&actor, &song, &genre).unwrap();
	let err = service.add_genre(&actor, &song, &genre).unwrap_err();
	assert!(matches!(err, AppError::Conflict { .. }));

	use harmonia_backend::schema::song_genres::dsl::*;
	let mut conn = pool.get().unwrap();
	let links = song_genres
		.filter(song_id.eq(&song))
		.load::<SongGenre>(&mut conn)
		.unwrap();
	assert_eq!(links.len(), 1, "the failed duplicate must not leave a second row");
}

#[test]
fn linking_a_missing_artist_or_genre_is_not_found() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");

	let err = service.add_artist(&actor, &song, "no-such-artist", None).unwrap_err();
	assert!(matches!(err, AppError::NotFound { entity: "artist", .. }));

	let err = service.add_genre(&actor, &song, "no-such-genre").unwrap_err();
	assert!(matches!(err, AppError::NotFound { entity: "genre", .. }));
}

#[test]
fn song_details_reflect_current_associations() {
	let (pool, service) = setup();
	insert_user(&pool, "alice");
	let actor = identity("alice");
	let song = insert_song(&pool, "alice", "Night Owl");
	let album = insert_album(&pool, "First Light");
	let artist = insert_artist(&pool, "The Owls");
	let genre = insert_genre(&pool, "ambient");

	service.assign_album(&actor, &song, &album, Some(3)).unwrap();
	service
		.add_artist(&actor, &song, &artist, Some("featured".to_string()))
		.unwrap();
	service.add_genre(&actor, &song, &genre).unwrap();

	let details = service.song_details(&song).unwrap();
	let slot = details.album.expect("song should carry its album slot");
	assert_eq!(slot.album_id, album);
	assert_eq!(slot.track_number, Some(3));
	assert_eq!(details.artists.len(), 1);
	assert_eq!(details.artists[0].artist_role.as_deref(), Some("featured"));
	assert_eq!(details.genres.len(), 1);
}
