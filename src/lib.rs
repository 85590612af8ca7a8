//! Movie-theater ticket booking backend: screens and seat grids, movies,
//! recurring showtimes with per-seat-type pricing, a per-date occurrence
//! ledger, and the seat-booking engine that sells against it.

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

use sea_orm::DatabaseConnection;

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
