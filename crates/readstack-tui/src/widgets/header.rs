use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, BAR_ROWS, UNITS_PER_ROW};
use crate::header::{HeaderDepth, HeaderStyle};

/// Decorative logo, drawn while the header is expanded
const LOGO: &str = "▂▃▅▇ readstack ▇▅▃▂";

const SEARCH_PLACEHOLDER: &str = "⌕  Search books";

pub struct HeaderWidget;

impl HeaderWidget {
    /// Render the collapsing header into the top of `area`.
    ///
    /// Returns the number of rows consumed, so the caller can lay the body
    /// out underneath. Everything drawn here is a direct readout of the
    /// derived `HeaderStyle`; no state lives in the widget.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        style: &HeaderStyle,
        greeting: &str,
    ) -> u16 {
        let theme = &app.theme;
        let entrance = style.screen_opacity;

        // Visible extent = height plus (negative) shift, in layout units
        let visible_units = (style.header_height + style.header_shift).max(0.0);
        let max_rows = area.height.saturating_sub(2).max(BAR_ROWS);
        let rows = ((visible_units / UNITS_PER_ROW).round() as u16).clamp(BAR_ROWS, max_rows);

        let surface = theme.fade(theme.bg1, theme.bg0, entrance);
        let header_area = Rect::new(area.x, area.y, area.width, rows);
        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(surface)),
            header_area,
        );

        // Logo drifts down during overscroll and fades over the collapse
        if rows > BAR_ROWS + 1 {
            let drift_rows = ((-style.logo_shift) / UNITS_PER_ROW).round() as u16;
            let logo_row = header_area.y + drift_rows.min(rows.saturating_sub(3));
            let logo_color = theme.fade(theme.accent, surface, style.logo_opacity * entrance);
            let logo_line = Line::from(Span::styled(LOGO, Style::default().fg(logo_color)))
                .centered();
            frame.render_widget(
                Paragraph::new(logo_line).style(Style::default().bg(surface)),
                Rect::new(area.x, logo_row, area.width, 1),
            );
        }

        // Greeting; its opacity is the one unclamped derivation, the fade
        // clamps only at this final color blend
        if rows > BAR_ROWS {
            let text_color = theme.fade(theme.fg0, surface, style.welcome_opacity * entrance);
            let greeting_line =
                Line::from(Span::styled(greeting, Style::default().fg(text_color))).centered();
            frame.render_widget(
                Paragraph::new(greeting_line).style(Style::default().bg(surface)),
                Rect::new(area.x, header_area.y + rows - 2, area.width, 1),
            );
        }

        // Search pill; hangs one row below the header while the bottom
        // margin is negative, docks into the bar once it collapses
        let hang = if style.search.margin_bottom < 0.0 { 1 } else { 0 };
        let pill_row = header_area.y + rows - 1 + hang;
        if pill_row < area.y + area.height {
            Self::render_search_pill(frame, area, app, style, pill_row, surface);
        }

        // Depth edge under the header
        let edge_row = pill_row + 1;
        if edge_row < area.y + area.height {
            let edge_area = Rect::new(area.x, edge_row, area.width, 1);
            match style.depth {
                HeaderDepth::ShadowOpacity(opacity) => {
                    let shadow = theme.fade(theme.grey0, theme.bg0, opacity * entrance);
                    frame.render_widget(
                        Paragraph::new("▔".repeat(area.width as usize))
                            .style(Style::default().fg(shadow).bg(theme.bg0)),
                        edge_area,
                    );
                }
                HeaderDepth::Elevation(elevation) => {
                    // Elevation renders as a hard edge once past half strength
                    let glyph = if elevation >= 5.0 { "━" } else { "─" };
                    let edge = theme.fade(theme.grey1, theme.bg0, (elevation / 10.0) * entrance);
                    frame.render_widget(
                        Paragraph::new(glyph.repeat(area.width as usize))
                            .style(Style::default().fg(edge).bg(theme.bg0)),
                        edge_area,
                    );
                }
            }
        }

        rows + hang + 1
    }

    fn render_search_pill(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        style: &HeaderStyle,
        row: u16,
        surface: ratatui::style::Color,
    ) {
        let theme = &app.theme;
        let entrance = style.screen_opacity;

        let width = (style.search.width.round() as u16).min(area.width);
        let x = area.x + (area.width.saturating_sub(width)) / 2;

        let pill_bg = theme.fade(theme.bg2, surface, entrance);
        let text_color = theme.fade(theme.fg1, pill_bg, 0.4 * entrance);

        let bordered = style.search.border_width >= 0.5;
        let inner = width.saturating_sub(if bordered { 2 } else { 0 }) as usize;
        let label = if SEARCH_PLACEHOLDER.width() > inner {
            String::new()
        } else {
            format!(
                " {:<width$}",
                SEARCH_PLACEHOLDER,
                width = inner.saturating_sub(1)
            )
        };

        let mut spans = Vec::new();
        if bordered {
            spans.push(Span::styled("▕", Style::default().fg(theme.grey0).bg(pill_bg)));
        }
        spans.push(Span::styled(label, Style::default().fg(text_color).bg(pill_bg)));
        if bordered {
            spans.push(Span::styled("▏", Style::default().fg(theme.grey0).bg(pill_bg)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x, row, width, 1),
        );
    }
}
