//! Repository layer for catalog storage

pub mod books;

use crate::models::book::{starter_catalog, Book};

/// Main repository struct holding the stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository over the given books
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::new(books),
        }
    }

    /// Create a repository holding the starter catalog
    pub fn seeded() -> Self {
        Self::new(starter_catalog())
    }
}
