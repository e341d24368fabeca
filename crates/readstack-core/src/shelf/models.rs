use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reading status of a book
///
/// Anything outside the three known statuses deserializes to `Unknown` and is
/// kept in the store but never shown on a shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    Reading,
    Completed,
    Wishlist,
    #[serde(other)]
    Unknown,
}

impl BookStatus {
    /// Shelf display label
    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Reading => "Reading",
            BookStatus::Completed => "Completed",
            BookStatus::Wishlist => "Wishlist",
            BookStatus::Unknown => "Unknown",
        }
    }

    /// Advance to the next status in display order; `Unknown` stays put.
    pub fn cycled(&self) -> Self {
        match self {
            BookStatus::Reading => BookStatus::Completed,
            BookStatus::Completed => BookStatus::Wishlist,
            BookStatus::Wishlist => BookStatus::Reading,
            BookStatus::Unknown => BookStatus::Unknown,
        }
    }
}

/// A tracked book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub added_at: DateTime<Utc>,
}

/// Data required to add a book to the store
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

impl Book {
    /// Whether the book appears on any shelf
    pub fn is_shelved(&self) -> bool {
        self.status != BookStatus::Unknown
    }
}
