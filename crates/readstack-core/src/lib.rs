pub mod config;
pub mod error;
pub mod greeting;
pub mod shelf;

pub use config::{AppConfig, DepthMode, EasingType, HeaderConfig, ScrollConfig};
pub use error::{Error, Result};
pub use shelf::{categorize, Book, BookStatus, BookStore, Shelves};
