use tracing::debug;

use super::models::{Book, BookStatus};

/// Books partitioned by status, in fixed display order.
///
/// Borrows from the source collection; relative order within each shelf
/// matches the source. Rebuilt from scratch on every collection change
/// rather than patched incrementally.
#[derive(Debug, Default)]
pub struct Shelves<'a> {
    pub reading: Vec<&'a Book>,
    pub completed: Vec<&'a Book>,
    pub wishlist: Vec<&'a Book>,
}

impl<'a> Shelves<'a> {
    /// Shelves in display order with their labels
    pub fn sections(&self) -> [(&'static str, &[&'a Book]); 3] {
        [
            ("Reading", self.reading.as_slice()),
            ("Completed", self.completed.as_slice()),
            ("Wishlist", self.wishlist.as_slice()),
        ]
    }

    /// Total number of shelved books
    pub fn len(&self) -> usize {
        self.reading.len() + self.completed.len() + self.wishlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Book at a flat index running Reading, then Completed, then Wishlist
    pub fn get(&self, index: usize) -> Option<&'a Book> {
        let mut idx = index;
        for (_, books) in self.sections() {
            if idx < books.len() {
                return Some(books[idx]);
            }
            idx -= books.len();
        }
        None
    }
}

/// Partition a book collection into the three shelves.
///
/// Single pass, stable, non-mutating. Books with an unknown status land on no
/// shelf; the count is logged so silently hidden entries stay discoverable.
pub fn categorize(books: &[Book]) -> Shelves<'_> {
    let mut shelves = Shelves::default();
    let mut skipped = 0usize;

    for book in books {
        match book.status {
            BookStatus::Reading => shelves.reading.push(book),
            BookStatus::Completed => shelves.completed.push(book),
            BookStatus::Wishlist => shelves.wishlist.push(book),
            BookStatus::Unknown => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "books with unknown status excluded from shelves");
    }

    shelves
}
