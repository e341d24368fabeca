pub mod categorize;
pub mod models;
pub mod store;

pub use categorize::{categorize, Shelves};
pub use models::{Book, BookStatus, NewBook};
pub use store::BookStore;
