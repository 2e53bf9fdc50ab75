use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn run_migrations(db_url: &str) {
	let mut conn = SqliteConnection::establish(db_url).expect("Failed to connect to the database");

	run_pending(&mut conn);
}

pub fn run_pending(conn: &mut SqliteConnection) {
	conn.run_pending_migrations(MIGRATIONS)
		.expect("Failed to run migrations");
}
