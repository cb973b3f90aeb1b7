//! Book Catalog Server
//!
//! A small REST JSON service over an in-memory library catalog: CRUD on
//! books plus checkout and return bounded by each book's quantity.

use std::sync::Arc;

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use api::create_router;
pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            services: Arc::new(services::Services::new(catalog)),
        }
    }
}
