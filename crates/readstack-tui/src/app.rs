use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;
use uuid::Uuid;

use readstack_core::shelf::{categorize, BookStore};
use readstack_core::AppConfig;

use crate::header::{EntranceTransition, HeaderLayout};
use crate::scroll::ScrollController;
use crate::theme::Theme;

/// Horizontal layout unit per terminal column
pub const UNITS_PER_COL: f64 = 1.0;

/// Vertical layout units per terminal row (cells are tall)
pub const UNITS_PER_ROW: f64 = 10.0;

/// Fixed top-bar rows the collapsed header keeps
pub const BAR_ROWS: u16 = 2;

/// Spacing unit in columns
pub const SPACING: f64 = 4.0;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Shelves under the collapsing header
    Home,
    /// Search screen pushed from the header's search pill
    BookSearch,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Resolved theme
    pub theme: Theme,
    /// The book collection
    pub store: BookStore,
    /// Current screen
    pub screen: Screen,
    /// Scroll offset producer for the home screen
    pub scroll: ScrollController,
    /// One-shot entrance fade
    pub entrance: EntranceTransition,
    /// Layout constants, re-resolved on resize
    pub layout: HeaderLayout,
    /// Selected book as a flat index over the shelves in display order
    pub selected: usize,
    /// Search input on the BookSearch screen
    pub search_query: String,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, store: BookStore) -> Self {
        let entrance = EntranceTransition::new(
            Duration::from_millis(config.ui.header.entrance_duration_ms),
            config.ui.header.entrance_easing,
        );
        let scroll = ScrollController::new(config.ui.scroll.clone());
        let layout = HeaderLayout::resolve(
            80.0 * UNITS_PER_COL,
            BAR_ROWS as f64 * UNITS_PER_ROW,
            SPACING,
            config.ui.header.depth,
            theme.dark,
        );
        Self {
            config,
            theme,
            store,
            screen: Screen::Home,
            scroll,
            entrance,
            layout,
            selected: 0,
            search_query: String::new(),
            pending_key: None,
            should_quit: false,
            status_message: None,
        }
    }

    /// Re-resolve the layout constants for a new terminal width
    pub fn resize(&mut self, width: u16) {
        self.layout = HeaderLayout::resolve(
            width as f64 * UNITS_PER_COL,
            BAR_ROWS as f64 * UNITS_PER_ROW,
            SPACING,
            self.config.ui.header.depth,
            self.theme.dark,
        );
    }

    /// Advance the time-based animations for this frame
    pub fn update_animations(&mut self, now: Instant) {
        self.entrance.tick(now);
        if self.scroll.needs_update() {
            self.scroll.tick();
        }
    }

    /// Whether the next poll should run at animation rate
    pub fn needs_fast_tick(&self) -> bool {
        self.entrance.needs_update() || self.scroll.needs_update()
    }

    /// Number of books currently on a shelf
    pub fn shelved_count(&self) -> usize {
        categorize(self.store.books()).len()
    }

    /// Id of the selected book, if any
    pub fn selected_book(&self) -> Option<Uuid> {
        categorize(self.store.books()).get(self.selected).map(|b| b.id)
    }

    pub fn move_down(&mut self) {
        let count = self.shelved_count();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn jump_to_top(&mut self) {
        self.selected = 0;
        self.scroll.jump_to_top();
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected = self.shelved_count().saturating_sub(1);
        self.scroll.jump_to_bottom();
    }

    /// Cycle the selected book's status and keep the selection valid
    pub fn cycle_selected_status(&mut self) {
        let Some(id) = self.selected_book() else {
            return;
        };
        if let Some(status) = self.store.cycle_status(id) {
            self.set_status(format!("Moved to {}", status.label()));
            let count = self.shelved_count();
            if self.selected >= count && count > 0 {
                self.selected = count - 1;
            }
        }
    }

    /// Navigation request from the search pill
    pub fn open_search(&mut self) {
        debug!(target: "nav", screen = "BookSearch", "push");
        self.screen = Screen::BookSearch;
        self.search_query.clear();
    }

    /// Pop back to the home screen
    pub fn close_search(&mut self) {
        debug!(target: "nav", screen = "Home", "pop");
        self.screen = Screen::Home;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}
