//! Top navigation bar: site title plus the view tabs.

use crate::app::state::{AppState, View};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);

    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .bg(Theme::BG_ELEVATED)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                label,
                Style::default().fg(Theme::TEXT_SECONDARY).bg(Theme::BG_ELEVATED),
            )
        }
    };

    let line = Line::from(vec![
        Span::styled(
            " ◆ mintdesk ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED)),
        tab("[1] Events", state.view == View::Events),
        Span::styled("  ", bg),
        tab("[2] Help", state.view == View::Help),
        Span::styled("  │ ", Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED)),
        Span::styled(
            "m",
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Mint event",
            Style::default().fg(Theme::TEXT_SECONDARY).bg(Theme::BG_ELEVATED),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).style(bg), area);
}
