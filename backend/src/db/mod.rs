pub mod activities;
pub mod connection;
pub mod migrations;
pub mod people;
pub mod users;

pub use connection::{get_db_pool, DatabaseConfig};
