//! Catalog service: listing, creation and circulation of books

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.find_by_id(id).await
    }

    pub async fn create_book(&self, book: Book) -> Book {
        let book = self.repository.books.append(book).await;
        tracing::info!("Created book id={} title={:?}", book.id, book.title);
        book
    }

    /// Take one copy off the shelf. Fails without touching the book when
    /// none are left.
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        let result = self
            .repository
            .books
            .update(id, |book| {
                if book.quantity <= 0 {
                    return Err(AppError::QuantityExhausted(book.id.clone()));
                }
                book.quantity -= 1;
                Ok(())
            })
            .await;

        match &result {
            Ok(book) => tracing::info!("Checked out book id={} quantity={}", book.id, book.quantity),
            Err(AppError::QuantityExhausted(id)) => {
                tracing::warn!("Checkout refused, no copies left of book id={}", id)
            }
            Err(_) => {}
        }

        result
    }

    /// Put one copy back on the shelf. There is no upper bound.
    pub async fn checkin(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books.adjust_quantity(id, 1).await?;
        tracing::info!("Checked in book id={} quantity={}", book.id, book.quantity);
        Ok(book)
    }

    pub async fn count(&self) -> usize {
        self.repository.books.len().await
    }
}
