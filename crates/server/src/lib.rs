pub mod config;
pub mod db;
pub mod models;
pub mod routes;

use config::Settings;

pub struct AppState {
    pub db: sqlx::AnyPool,
    pub settings: Settings,
}
