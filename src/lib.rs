//! Library Inventory
//!
//! An in-memory book catalog served over a REST JSON API: list and create
//! books, look one up by id, and check copies out and back in.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use api::create_router;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state for a configuration, seeding the catalog if asked to
    pub fn new(config: AppConfig) -> Self {
        let repository = if config.catalog.seed {
            repository::Repository::seeded()
        } else {
            repository::Repository::default()
        };

        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
