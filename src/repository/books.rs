//! In-memory book store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Ordered sequence of books, insertion order preserved.
///
/// All access goes through this type: reads share the lock, mutations take
/// it exclusively, and lookups hand back owned copies rather than references
/// into the sequence.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// All books, in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }

    /// First book whose id matches exactly
    pub async fn find_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(AppError::book_not_found)
    }

    /// Append a book to the end of the catalog. Duplicate ids are accepted.
    pub async fn append(&self, book: Book) -> Book {
        self.books.write().await.push(book.clone());
        book
    }

    /// Apply `f` to the first book with the given id while holding the write
    /// lock. If `f` fails the book is left as it was.
    pub async fn update<F>(&self, id: &str, f: F) -> AppResult<Book>
    where
        F: FnOnce(&mut Book) -> AppResult<()>,
    {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(AppError::book_not_found)?;

        let mut updated = book.clone();
        f(&mut updated)?;
        *book = updated.clone();
        Ok(updated)
    }

    /// Add `delta` to the quantity of the first book with the given id.
    /// No floor or ceiling is enforced here.
    pub async fn adjust_quantity(&self, id: &str, delta: i64) -> AppResult<Book> {
        self.update(id, |book| {
            book.quantity = book.quantity.checked_add(delta).ok_or_else(|| {
                AppError::Internal(format!("Quantity overflow for book {}", book.id))
            })?;
            Ok(())
        })
        .await
    }
}
