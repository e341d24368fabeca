mod header;
mod search;
mod shelves;
mod status_bar;

pub use header::HeaderWidget;
pub use search::SearchScreenWidget;
pub use shelves::ShelvesWidget;
pub use status_bar::StatusBarWidget;
