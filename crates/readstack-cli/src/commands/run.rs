use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use tracing::info;

use readstack_core::{greeting, AppConfig};
use readstack_tui::{
    app::{App, Screen, UNITS_PER_ROW},
    event::{AppEvent, EventHandler},
    header::derive_style,
    input::{handle_key_event, handle_mouse_event, Action},
    load_theme,
    widgets::{HeaderWidget, SearchScreenWidget, ShelvesWidget, StatusBarWidget},
};

/// Layout units one wheel notch adds to the scroll velocity
const WHEEL_STEP: f64 = 6.0;

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    let store = super::open_store(&config)?;
    info!("Starting readstack with {} books", store.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("readstack")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    let mut app = App::new(config.clone(), theme, store);
    app.resize(terminal.size()?.width);

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // The screen is going away; freeze the entrance fade so nothing writes
    // opacity after teardown
    app.entrance.cancel();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("Terminal restored");

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    let mut first_draw = true;
    let mut body_rows: u16 = 0;

    loop {
        app.update_animations(Instant::now());

        // One derivation per frame; the widgets only read it
        let style = derive_style(app.scroll.offset(), app.entrance.progress(), &app.layout);
        let hello = greeting::greeting();

        let mut content_rows: u16 = 0;
        let mut visible_rows: u16 = 0;

        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            match app.screen {
                Screen::Home => {
                    let header_rows =
                        HeaderWidget::render(frame, main_layout[0], app, &style, hello);
                    let body = Rect::new(
                        main_layout[0].x,
                        main_layout[0].y + header_rows,
                        main_layout[0].width,
                        main_layout[0].height.saturating_sub(header_rows),
                    );
                    visible_rows = body.height;
                    content_rows = ShelvesWidget::render(frame, body, app);
                }
                Screen::BookSearch => {
                    SearchScreenWidget::render(frame, main_layout[0], app);
                }
            }

            StatusBarWidget::render(frame, main_layout[1], app);
        })?;

        // First completed layout starts the one-shot entrance fade
        if first_draw {
            first_draw = false;
            app.entrance.begin(Instant::now());
        }

        if app.screen == Screen::Home {
            body_rows = visible_rows;
            let overflow = content_rows.saturating_sub(visible_rows) as f64 * UNITS_PER_ROW;
            // Leave the full collapse reachable even when the list is short
            let max = overflow.max(app.layout.collapse_travel() + 30.0);
            app.scroll.set_max_offset(max);
        }

        match event_handler.next(app.needs_fast_tick())? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                dispatch(app, action, body_rows);
            }
            Some(AppEvent::Mouse(mouse)) => {
                let action = handle_mouse_event(mouse);
                dispatch(app, action, body_rows);
            }
            Some(AppEvent::Resize(w, _)) => {
                app.resize(w);
            }
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn dispatch(app: &mut App, action: Action, body_rows: u16) {
    // Any action other than the first 'g' clears the pending sequence
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if !matches!(action, Action::None) {
        app.clear_status();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::MoveDown => app.move_down(),
        Action::MoveUp => app.move_up(),
        Action::ScrollDown => app.scroll.scroll_by(WHEEL_STEP),
        Action::ScrollUp => app.scroll.scroll_by(-WHEEL_STEP),
        Action::ScrollHalfPageDown => {
            app.scroll
                .scroll_by((body_rows as f64 / 2.0).max(1.0) * UNITS_PER_ROW);
        }
        Action::ScrollHalfPageUp => {
            app.scroll
                .scroll_by(-(body_rows as f64 / 2.0).max(1.0) * UNITS_PER_ROW);
        }
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::CycleStatus => app.cycle_selected_status(),
        Action::OpenSearch => app.open_search(),
        Action::Back => {
            if app.screen == Screen::BookSearch {
                app.close_search();
            }
        }
        Action::InputChar(c) => {
            app.search_query.push(c);
        }
        Action::Backspace => {
            app.search_query.pop();
        }
        Action::None => {}
    }
}
