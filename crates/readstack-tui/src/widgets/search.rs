use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// The screen pushed by the header's search pill.
///
/// Filters the collection by title or author as the query is typed; Esc pops
/// back to the shelves.
pub struct SearchScreenWidget;

impl SearchScreenWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let block = Block::default()
            .title(" Book search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(theme.accent)),
                Span::styled(
                    app.search_query.as_str(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled("▏", Style::default().fg(theme.grey1)),
            ]),
            Line::default(),
        ];

        let query = app.search_query.to_lowercase();
        let matches: Vec<_> = app
            .store
            .books()
            .iter()
            .filter(|b| {
                query.is_empty()
                    || b.title.to_lowercase().contains(&query)
                    || b.author.to_lowercase().contains(&query)
            })
            .collect();

        if matches.is_empty() {
            lines.push(Line::from(Span::styled(
                "  no matches",
                Style::default().fg(theme.grey0),
            )));
        }

        for book in matches {
            lines.push(Line::from(vec![
                Span::styled("  ", Style::default()),
                Span::styled(book.title.as_str(), Style::default().fg(theme.fg1)),
                Span::styled(
                    format!("  · {}", book.author),
                    Style::default().fg(theme.grey1),
                ),
                Span::styled(
                    format!("  [{}]", book.status.label()),
                    Style::default().fg(theme.info),
                ),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme.bg0)),
            inner,
        );
    }
}
