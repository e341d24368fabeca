use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use readstack_core::shelf::{categorize, Book};

use crate::app::{App, UNITS_PER_ROW};

pub struct ShelvesWidget;

impl ShelvesWidget {
    /// Render the three shelves in fixed order under the header.
    ///
    /// Returns the total content height in rows so the caller can bound the
    /// scroll offset. The shelves are rebuilt from the store on every draw;
    /// the partition is cheap and never patched incrementally.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) -> u16 {
        let theme = &app.theme;
        let shelves = categorize(app.store.books());

        let mut lines: Vec<Line> = Vec::new();
        let mut flat_idx = 0usize;

        for (label, books) in shelves.sections() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("── {} ({}) ", label, books.len()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));

            if books.is_empty() {
                lines.push(Line::from(Span::styled(
                    "   nothing here yet",
                    Style::default().fg(theme.grey0),
                )));
            }

            for &book in books {
                lines.push(Self::book_line(app, book, flat_idx == app.selected));
                flat_idx += 1;
            }
        }

        let total_rows = lines.len() as u16;
        let scrolled = (app.scroll.offset().max(0.0) / UNITS_PER_ROW).round() as u16;

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.bg0))
            .scroll((scrolled.min(total_rows.saturating_sub(1)), 0));
        frame.render_widget(paragraph, area);

        total_rows
    }

    fn book_line<'a>(app: &'a App, book: &'a Book, selected: bool) -> Line<'a> {
        let theme = &app.theme;

        let base = if selected {
            Style::default().fg(theme.fg0).bg(theme.selection)
        } else {
            Style::default().fg(theme.fg1)
        };

        let marker = if selected { "▸ " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(theme.yellow)),
            Span::styled(book.title.as_str(), base),
        ];

        if app.config.ui.show_author && !book.author.is_empty() {
            spans.push(Span::styled(
                format!("  · {}", book.author),
                if selected {
                    base
                } else {
                    Style::default().fg(theme.grey1)
                },
            ));
        }

        Line::from(spans)
    }
}
