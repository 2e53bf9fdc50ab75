use harmonia_backend::config::{IP, PORT};
use harmonia_backend::core::app_state::AppState;
use harmonia_backend::core::migrations::run_migrations;
use harmonia_backend::core::routes::configure_routes;
use harmonia_backend::core::server::{configure_cors, logger, start_server};
use harmonia_backend::harmonia_db::db::generate_db_pool;

use dotenv::dotenv;

#[tokio::main]
async fn main() {
	dotenv().ok();
	tracing_subscriber::fmt().pretty().init();

	let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env file");
	run_migrations(&db_url);

	let db_pool = generate_db_pool(&db_url);
	let app_state = AppState::new(db_pool);

	let app = configure_routes(app_state)
		.layer(axum::middleware::from_fn(logger))
		.layer(configure_cors());

	start_server(app, IP, PORT).await;
}
