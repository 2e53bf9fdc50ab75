use crate::{
	core::app_state::AppState,
	routes::{
		catalog::{
			albums::{browse_albums, create_album, get_album},
			artists::{browse_artists, create_artist},
			genres::{browse_genres, create_genre},
		},
		music::{
			associations::{
				assign_album::assign_album,
				song_artists::{add_artist_to_song, remove_artist_from_song},
				song_genres::{add_genre_to_song, remove_genre_from_song},
				unassign_album::unassign_album,
			},
			delete_music::delete_music,
			favorites::{
				add_to_favorites::add_to_favorites, get_favorites::get_favorites, is_favorited::is_favorited,
				remove_from_favorites::remove_from_favorites,
			},
			get_music::{get_music, get_song},
			save_music::save_music,
			update_music::update_music,
		},
		playlist::{
			add_song_to_playlist::add_song_to_playlist,
			create_new_playlist::{create_playlist, create_system_playlist},
			delete_playlist::delete_playlist,
			get_playlist_music::get_playlist_music,
			get_users_playlists::get_users_playlists,
			remove_song_from_playlist::remove_song_from_playlist,
			rename_playlist::rename_playlist,
			reorder_playlist::reorder_playlist,
		},
	},
};
use axum::{
	routing::{get, post},
	Router,
};

pub fn configure_routes(app_state: AppState) -> Router {
	Router::new()
		.route("/", get(index))
		//music
		.route("/save_music", post(save_music))
		.route("/music/get_music", get(get_music))
		.route("/music/details/:song_id", get(get_song))
		.route("/music/update/:song_id", post(update_music))
		.route("/music/delete/:song_id", post(delete_music))
		//associations
		.route("/music/assign_album", post(assign_album))
		.route("/music/unassign_album", post(unassign_album))
		.route("/music/add_artist", post(add_artist_to_song))
		.route("/music/remove_artist", post(remove_artist_from_song))
		.route("/music/add_genre", post(add_genre_to_song))
		.route("/music/remove_genre", post(remove_genre_from_song))
		//favorites
		.route("/music/favorites/add", post(add_to_favorites))
		.route("/music/favorites/remove", post(remove_from_favorites))
		.route("/music/favorites/get", get(get_favorites))
		.route("/music/favorites/is_favorited", get(is_favorited))
		//playlist stuff
		.route("/playlist/new", post(create_playlist))
		.route("/playlist/new_system", post(create_system_playlist))
		.route("/playlist/rename", post(rename_playlist))
		.route("/playlist/add_song", post(add_song_to_playlist))
		.route("/playlist/remove_song_from_playlist", post(remove_song_from_playlist))
		.route("/playlist/reorder", post(reorder_playlist))
		.route("/playlist/get_by_uuid", get(get_playlist_music))
		.route("/playlist/get_users_playlists", get(get_users_playlists))
		.route("/playlist/delete/:playlist_id", post(delete_playlist))
		//catalog
		.route("/artist/new", post(create_artist))
		.route("/artist/browse", get(browse_artists))
		.route("/genre/new", post(create_genre))
		.route("/genre/browse", get(browse_genres))
		.route("/album/new", post(create_album))
		.route("/album/browse", get(browse_albums))
		.route("/album/:album_id", get(get_album))
		.with_state(app_state)
}

async fn index() -> String {
	"Hello from Harmonia backend".to_string()
}
