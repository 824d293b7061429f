use config::Config;
use sqlx::SqlitePool;

pub mod config;
pub mod db;
pub mod error;
pub mod router;
pub mod routes;
pub mod seed;

pub use router::app;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}
