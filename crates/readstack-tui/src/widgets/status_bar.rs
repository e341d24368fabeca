use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Screen};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let screen_str = match app.screen {
            Screen::Home => "SHELVES",
            Screen::BookSearch => "SEARCH",
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | Books: {} | Shelved: {}",
                screen_str,
                app.store.len(),
                app.shelved_count()
            )
        };

        let help_hint = match app.screen {
            Screen::Home => " q:quit j/k:move ⏎:shelve /:search ",
            Screen::BookSearch => " Esc:back type to filter ",
        };

        let padding_len = padding(area.width, &status_text, help_hint);

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Filler cells between the status text and the right-aligned hint.
///
/// Measured in display columns, not bytes; the hints carry multibyte glyphs.
fn padding(area_width: u16, left: &str, right: &str) -> usize {
    (area_width as usize).saturating_sub(left.width() + right.width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_counts_columns_not_bytes() {
        // "⏎" and "·" are 3 and 2 bytes but one column each
        let hint = " q:quit j/k:move ⏎:shelve /:search ";
        assert!(hint.len() > hint.width());
        assert_eq!(padding(80, "status", hint), 80 - 6 - hint.width());
    }

    #[test]
    fn test_padding_saturates_when_cramped() {
        assert_eq!(padding(10, "a long status line", "hint"), 0);
    }
}
