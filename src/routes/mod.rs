pub mod catalog {
	pub mod albums;
	pub mod artists;
	pub mod genres;
}
pub mod music {
	pub mod delete_music;
	pub mod get_music;
	pub mod save_music;
	pub mod update_music;
	pub mod associations {
		pub mod assign_album;
		pub mod song_artists;
		pub mod song_genres;
		pub mod unassign_album;
	}
	pub mod favorites {
		pub mod add_to_favorites;
		pub mod get_favorites;
		pub mod is_favorited;
		pub mod remove_from_favorites;
	}
}
pub mod playlist {
	pub mod add_song_to_playlist;
	pub mod create_new_playlist;
	pub mod delete_playlist;
	pub mod get_playlist_music;
	pub mod get_users_playlists;
	pub mod remove_song_from_playlist;
	pub mod rename_playlist;
	pub mod reorder_playlist;
}
