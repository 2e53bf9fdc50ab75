use crate::schema::*;

use diesel::{prelude::Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = users)]
pub struct User {
	pub user_id: String,
	pub username: String,
	pub email: String,
	pub pwd_hash: String,
}

#[derive(Insertable, Queryable, Debug, Clone, Serialize, Deserialize, Selectable)]
#[diesel(table_name = songs)]
pub struct Song {
	pub song_id: String,
	pub title: String,
	pub duration: Option<i64>,
	pub media_url: String,
	pub release_date: Option<String>,
	pub owner_user_id: String,
}

#[derive(Insertable, Queryable, Debug, Clone, Serialize, Deserialize, Selectable)]
#[diesel(table_name = artists)]
pub struct Artist {
	pub artist_id: String,
	pub name: String,
	pub bio: Option<String>,
}

#[derive(Insertable, Queryable, Debug, Clone, Serialize, Deserialize, Selectable)]
#[diesel(table_name = genres)]
pub struct Genre {
	pub genre_id: String,
	pub name: String,
}

#[derive(Insertable, Queryable, Debug, Clone, Serialize, Deserialize, Selectable)]
#[diesel(table_name = albums)]
pub struct Album {
	pub album_id: String,
	pub title: String,
	pub release_date: Option<String>,
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = song_artists)]
pub struct SongArtist {
	pub song_id: String,
	pub artist_id: String,
	pub artist_role: Option<String>,
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = song_genres)]
pub struct SongGenre {
	pub song_id: String,
	pub genre_id: String,
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = album_songs)]
pub struct AlbumSong {
	pub song_id: String,
	pub album_id: String,
	pub track_number: Option<i32>,
}

#[derive(Insertable, Queryable, Debug, Clone, Serialize, Deserialize, Selectable)]
#[diesel(table_name = playlists)]
pub struct Playlist {
	pub playlist_id: String,
	pub playlist_name: String,
	pub playlist_type: String,
	pub owner_user_id: Option<String>,
	pub creation_date_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistType {
	System,
	User,
}

impl PlaylistType {
	pub fn as_str(&self) -> &'static str {
		match self {
			PlaylistType::System => "system",
			PlaylistType::User => "user",
		}
	}

	pub fn parse(raw: &str) -> Option<PlaylistType> {
		match raw {
			"system" => Some(PlaylistType::System),
			"user" => Some(PlaylistType::User),
			_ => None,
		}
	}
}

impl Playlist {
	// The CHECK constraint on playlist_type admits exactly the two variants.
	pub fn kind(&self) -> PlaylistType {
		PlaylistType::parse(&self.playlist_type).unwrap_or(PlaylistType::User)
	}
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = playlist_songs)]
pub struct PlaylistSong {
	pub playlist_id: String,
	pub song_id: String,
	pub position: Option<i32>,
	pub song_added_date_time: String,
}

#[derive(Insertable, Queryable, Debug, Clone, Serialize, Deserialize, Selectable)]
#[diesel(table_name = favorites_lists)]
pub struct FavoritesList {
	pub favorites_id: String,
	pub owner_user_id: String,
	pub created_at: String,
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = favorites_songs)]
pub struct FavoriteSong {
	pub favorites_id: String,
	pub song_id: String,
	pub added_at: String,
}

//for responses
#[derive(Debug, Serialize)]
pub struct ArtistCredit {
	pub artist_id: String,
	pub name: String,
	pub artist_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AlbumAssignmentResponse {
	pub album_id: String,
	pub title: String,
	pub track_number: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SongDetailsResponse {
	pub song: Song,
	pub album: Option<AlbumAssignmentResponse>,
	pub artists: Vec<ArtistCredit>,
	pub genres: Vec<Genre>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistSongResponse {
	pub song_id: String,
	pub title: String,
	pub duration: Option<i64>,
	pub media_url: String,
	pub position: Option<i32>,
	pub song_added_date_time: String,
}

impl PlaylistSongResponse {
	pub fn from_parts(entry: PlaylistSong, song: Song) -> PlaylistSongResponse {
		PlaylistSongResponse {
			song_id: song.song_id,
			title: song.title,
			duration: song.duration,
			media_url: song.media_url,
			position: entry.position,
			song_added_date_time: entry.song_added_date_time,
		}
	}
}

#[derive(Debug, Serialize)]
pub struct PlaylistDetailsResponse {
	pub playlist: Playlist,
	pub songs: Vec<PlaylistSongResponse>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteSongResponse {
	pub song_id: String,
	pub title: String,
	pub duration: Option<i64>,
	pub media_url: String,
	pub added_at: String,
}

impl FavoriteSongResponse {
	pub fn from_parts(added_at: String, song: Song) -> FavoriteSongResponse {
		FavoriteSongResponse {
			song_id: song.song_id,
			title: song.title,
			duration: song.duration,
			media_url: song.media_url,
			added_at,
		}
	}
}

#[derive(Debug, Serialize)]
pub struct FavoritesPage {
	pub total: i64,
	pub songs: Vec<FavoriteSongResponse>,
}

#[derive(Debug, Serialize)]
pub struct AlbumTrackResponse {
	pub song_id: String,
	pub title: String,
	pub duration: Option<i64>,
	pub track_number: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct AlbumDetailsResponse {
	pub album: Album,
	pub tracks: Vec<AlbumTrackResponse>,
}
