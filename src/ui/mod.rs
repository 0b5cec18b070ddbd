mod event_list;
mod header;
mod layout;
mod mint_dialog;
mod status_bar;
mod theme;
mod toast;

use crate::app::state::{AppState, View};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    match state.view {
        View::Events => event_list::render(frame, app_layout.content, state),
        View::Help => render_help(frame, app_layout.content),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlays last: the modal, then toasts on top of everything
    mint_dialog::render(frame, state);
    toast::render(frame, state);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_SURFACE));

    let lines = vec![
        Line::from(""),
        help_line("m / F2", "Open the mint-event dialog"),
        help_line("1 / 2", "Switch between Events and Help"),
        help_line("↑ / ↓", "Select an event in the listing"),
        help_line("w", "Connect or disconnect the configured wallet"),
        help_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        help_line("Tab / Shift+Tab", "Next / previous form field"),
        help_line("Enter", "Next field, or activate the focused button"),
        help_line("Space", "Toggle visibility, or press the focused button"),
        help_line("Esc", "Close the dialog (keeps what you typed)"),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn help_line(keys: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", keys),
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(Theme::TEXT_PRIMARY)),
    ])
}
