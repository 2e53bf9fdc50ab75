pub mod db;
pub mod links;
pub mod models;
