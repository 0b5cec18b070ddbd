use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Wallet session
    match (state.wallet.short_account(), state.wallet.network_id) {
        (Some(account), Some(network_id)) => {
            parts.push(Span::styled(
                format!(" {} @ net {} ", account, network_id),
                Style::default().fg(Theme::ACCENT_GREEN).bg(Color::DarkGray),
            ));
        }
        _ => {
            parts.push(Span::styled(
                " no wallet ",
                Style::default().fg(Theme::ACCENT_RED).bg(Color::DarkGray),
            ));
        }
    }

    // Auth session
    let (auth_text, auth_color) = if state.auth.is_authenticated() {
        ("│ signed in ", Theme::ACCENT_GREEN)
    } else {
        ("│ signed out ", Theme::ACCENT_RED)
    };
    parts.push(Span::styled(
        auth_text,
        Style::default().fg(auth_color).bg(Color::DarkGray),
    ));

    if state.mint.in_flight {
        parts.push(Span::styled(
            "│ minting… ",
            Style::default().fg(Theme::ACCENT_AMBER).bg(Color::DarkGray),
        ));
    }

    // Key hints, right-aligned
    let hints = " m Mint  w Wallet  q Quit ";
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        hints,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)).style(Theme::status_bar()), area);
}
