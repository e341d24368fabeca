pub mod app;
pub mod event;
pub mod header;
pub mod input;
pub mod scroll;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use themes::load_theme;
