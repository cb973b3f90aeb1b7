//! Book model and request payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book record held in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-assigned identifier
    pub id: String,
    pub title: String,
    pub author: String,
    /// Total copies acquired, upper bound for `current_quantity`
    pub original_quantity: i32,
    /// Copies currently available for checkout
    pub current_quantity: i32,
}

impl Book {
    pub fn new(id: &str, title: &str, author: &str, quantity: i32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            original_quantity: quantity,
            current_quantity: quantity,
        }
    }

    /// Whether at least one copy can be checked out
    pub fn is_available(&self) -> bool {
        self.current_quantity > 0
    }

    /// Overwrite every field from a payload; both quantities take the new value
    pub fn apply(&mut self, payload: BookPayload) {
        self.id = payload.id;
        self.title = payload.title;
        self.author = payload.author;
        self.original_quantity = payload.quantity;
        self.current_quantity = payload.quantity;
    }
}

impl From<BookPayload> for Book {
    fn from(payload: BookPayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            author: payload.author,
            original_quantity: payload.quantity,
            current_quantity: payload.quantity,
        }
    }
}

/// Create / update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[validate(length(min = 1, message = "Book ID must not be empty"))]
    pub id: String,
    pub title: String,
    pub author: String,
    /// Number of copies; sets both original and current quantity
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i32,
}
