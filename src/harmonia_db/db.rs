use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

pub type DatabasePool = Pool<ConnectionManager<SqliteConnection>>;
pub type PooledConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Builds the shared connection pool. The pool handle is the only piece of
/// shared mutable state in the system; every service receives a clone of it
/// at construction instead of reaching for a global.
pub fn generate_db_pool(database_url: &str) -> DatabasePool {
	let manager = ConnectionManager::<SqliteConnection>::new(database_url);
	Pool::builder()
		.max_size(5)
		.build(manager)
		.expect("Failed to create pool")
}
