use std::sync::Arc;

use anyhow::Result;
use serde_json::json;

use readstack_core::{categorize, AppConfig};

pub fn run(config: &Arc<AppConfig>, as_json: bool) -> Result<()> {
    let store = super::open_store(config)?;
    let shelves = categorize(store.books());

    if as_json {
        let out = json!({
            "reading": shelves.reading,
            "completed": shelves.completed,
            "wishlist": shelves.wishlist,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if shelves.is_empty() {
        println!("No books on any shelf yet.");
        return Ok(());
    }

    for (label, books) in shelves.sections() {
        println!("{} ({}):", label, books.len());
        for book in books {
            if book.author.is_empty() {
                println!("  {}", book.title);
            } else {
                println!("  {} · {}", book.title, book.author);
            }
        }
        println!();
    }

    Ok(())
}
