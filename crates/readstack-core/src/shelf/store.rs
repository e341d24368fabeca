use std::path::Path;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::models::{Book, BookStatus, NewBook};

/// In-memory book collection.
///
/// The store is the single owner of the books; the view layer only ever sees
/// borrowed shelves built by [`categorize`](super::categorize). Every mutation
/// bumps a generation counter so consumers know to rebuild their shelves.
#[derive(Debug)]
pub struct BookStore {
    books: Vec<Book>,
    generation: u64,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            generation: 0,
        }
    }

    /// Store seeded with a small sample shelf
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        for (title, author, status) in SAMPLE_BOOKS {
            store.add(NewBook {
                title: title.to_string(),
                author: author.to_string(),
                status: *status,
            });
        }
        store.generation = 0;
        store
    }

    /// Load a collection from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let books: Vec<Book> = serde_json::from_str(&content)?;
        info!(count = books.len(), path = %path.display(), "loaded library");
        Ok(Self {
            books,
            generation: 0,
        })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Bumped on every mutation; compare to detect collection changes
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, id: Uuid) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn add(&mut self, new: NewBook) -> Uuid {
        let id = Uuid::new_v4();
        self.books.push(Book {
            id,
            title: new.title,
            author: new.author,
            status: new.status,
            added_at: Utc::now(),
        });
        self.generation += 1;
        id
    }

    /// Advance the book's status Reading -> Completed -> Wishlist -> Reading.
    ///
    /// Returns the new status, or None if the id is unknown or the book has an
    /// unknown status (which never moves).
    pub fn cycle_status(&mut self, id: Uuid) -> Option<BookStatus> {
        let book = self.books.iter_mut().find(|b| b.id == id)?;
        if book.status == BookStatus::Unknown {
            return None;
        }
        book.status = book.status.cycled();
        self.generation += 1;
        Some(book.status)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.id == id)?;
        self.generation += 1;
        Some(self.books.remove(pos))
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::with_samples()
    }
}

const SAMPLE_BOOKS: &[(&str, &str, BookStatus)] = &[
    ("The Name of the Wind", "Patrick Rothfuss", BookStatus::Reading),
    ("Thinking in Systems", "Donella Meadows", BookStatus::Reading),
    ("Piranesi", "Susanna Clarke", BookStatus::Completed),
    ("The Left Hand of Darkness", "Ursula K. Le Guin", BookStatus::Completed),
    ("A Memory Called Empire", "Arkady Martine", BookStatus::Completed),
    ("Gödel, Escher, Bach", "Douglas Hofstadter", BookStatus::Wishlist),
    ("The Dispossessed", "Ursula K. Le Guin", BookStatus::Wishlist),
];
