//! Catalog management service
//!
//! Each call takes the catalog lock for the duration of one operation only.
//! Requests are not isolated from each other: two updates to the same book
//! race and the last writer wins.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    catalog::Catalog,
    error::AppResult,
    models::{Book, BookPayload},
};

#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<RwLock<Catalog>>,
}

impl CatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// List every book in catalog order
    pub async fn list_books(&self) -> Vec<Book> {
        self.catalog.read().await.list().to_vec()
    }

    pub async fn count(&self) -> usize {
        self.catalog.read().await.len()
    }

    /// Get book by ID
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.catalog.read().await.get(id).cloned()
    }

    /// Add a new book; ID and title must not already be present
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        let created = self.catalog.write().await.create(payload)?;
        tracing::info!(book_id = %created.id, title = %created.title, "Book created");
        Ok(created)
    }

    /// Overwrite an existing book
    pub async fn update_book(&self, id: &str, payload: BookPayload) -> AppResult<Book> {
        let updated = self.catalog.write().await.update(id, payload)?;
        tracing::info!(book_id = %id, new_id = %updated.id, "Book updated");
        Ok(updated)
    }

    pub async fn delete_book(&self, id: &str) -> AppResult<Book> {
        let deleted = self.catalog.write().await.delete(id)?;
        tracing::info!(book_id = %id, "Book deleted");
        Ok(deleted)
    }

    pub async fn checkout_book(&self, id: &str) -> AppResult<Book> {
        let book = self.catalog.write().await.checkout(id)?;
        tracing::debug!(book_id = %id, current_quantity = book.current_quantity, "Book checked out");
        Ok(book)
    }

    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let book = self.catalog.write().await.return_book(id)?;
        tracing::debug!(book_id = %id, current_quantity = book.current_quantity, "Book returned");
        Ok(book)
    }
}
