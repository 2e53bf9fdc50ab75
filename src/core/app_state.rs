use crate::harmonia_db::db::DatabasePool;
use crate::services::association::AssociationService;
use crate::services::catalog::CatalogService;
use crate::services::favorites::FavoritesService;
use crate::services::playlist::PlaylistService;

/// Global state handed to every route. Each service gets its own clone of
/// the pool handle at construction; nothing reaches for it globally.
#[derive(Clone)]
pub struct AppState {
	pub db_pool: DatabasePool,
	pub catalog: CatalogService,
	pub associations: AssociationService,
	pub playlists: PlaylistService,
	pub favorites: FavoritesService,
}

impl AppState {
	pub fn new(db_pool: DatabasePool) -> AppState {
		AppState {
			catalog: CatalogService::new(db_pool.clone()),
			associations: AssociationService::new(db_pool.clone()),
			playlists: PlaylistService::new(db_pool.clone()),
			favorites: FavoritesService::new(db_pool.clone()),
			db_pool,
		}
	}
}
