//! Data models for the library inventory

pub mod book;

// Re-export commonly used types
pub use book::{starter_catalog, Book, CirculationQuery};
