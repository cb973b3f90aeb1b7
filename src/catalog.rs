//! In-memory book catalog
//!
//! `Catalog` owns an ordered list of books and implements every catalog
//! operation synchronously. Lookups are linear scans over the list.
//! Title and ID uniqueness is only enforced on create; update overwrites the
//! record as given.

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload},
};

pub const BOOK_NOT_FOUND: &str = "Book not found.";
pub const BOOK_DOES_NOT_EXIST: &str = "Book doesn't exist.";
pub const DUPLICATE_ID: &str =
    "Book with the same ID already exists. Please create a Book with new fields or update it.";
pub const DUPLICATE_TITLE: &str =
    "Book with the same Title already exists. Please try to update it, if it is required.";
pub const NOT_AVAILABLE: &str = "Book not available";
pub const OVER_RETURN: &str = "Book quantity cannot exceed original quantity.";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the four startup records
    pub fn seeded() -> Self {
        Self::from_books(vec![
            Book::new("1", "In seaarch of Lost Time", "Mercel Proust", 2),
            Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
            Book::new("3", "War and Peace", "Leao Tolstoy", 6),
            Book::new("4", "NCERT Science", "CBSE Board", 3),
        ])
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All books in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: &str) -> AppResult<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    fn title_exists(&self, title: &str) -> bool {
        self.books.iter().any(|b| b.title == title)
    }

    /// Append a new book; the ID is checked before the title
    pub fn create(&mut self, payload: BookPayload) -> AppResult<Book> {
        if self.position(&payload.id).is_some() {
            return Err(AppError::Conflict(DUPLICATE_ID.to_string()));
        }
        if self.title_exists(&payload.title) {
            return Err(AppError::Conflict(DUPLICATE_TITLE.to_string()));
        }

        let book = Book::from(payload);
        self.books.push(book.clone());
        Ok(book)
    }

    /// Overwrite the book stored under `id`.
    ///
    /// No uniqueness re-check is done, so an update may introduce a duplicate
    /// ID or title.
    pub fn update(&mut self, id: &str, payload: BookPayload) -> AppResult<Book> {
        let idx = self
            .position(id)
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;
        let book = &mut self.books[idx];
        book.apply(payload);
        Ok(book.clone())
    }

    /// Remove the book, keeping the order of the remaining records
    pub fn delete(&mut self, id: &str) -> AppResult<Book> {
        let idx = self
            .position(id)
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;
        Ok(self.books.remove(idx))
    }

    fn get_mut_for_circulation(&mut self, id: &str) -> AppResult<&mut Book> {
        self.books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(BOOK_DOES_NOT_EXIST.to_string()))
    }

    pub fn checkout(&mut self, id: &str) -> AppResult<Book> {
        let book = self.get_mut_for_circulation(id)?;
        if !book.is_available() {
            return Err(AppError::BadRequest(NOT_AVAILABLE.to_string()));
        }
        book.current_quantity -= 1;
        Ok(book.clone())
    }

    pub fn return_book(&mut self, id: &str) -> AppResult<Book> {
        let book = self.get_mut_for_circulation(id)?;
        if book.current_quantity >= book.original_quantity {
            return Err(AppError::BadRequest(OVER_RETURN.to_string()));
        }
        book.current_quantity += 1;
        Ok(book.clone())
    }
}
