//! Event listing panel. Events minted this session appear here; the panel
//! shows placeholder copy until the first mint lands.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Events ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_SURFACE));

    let mut items: Vec<ListItem> = Vec::new();

    if state.events.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No events yet — press m to mint one.",
            Theme::muted().add_modifier(Modifier::ITALIC),
        )));
    } else {
        for (i, event) in state.events.iter().enumerate() {
            let visibility = if event.is_public { "public" } else { "managed" };
            let text = format!(
                " #{:<5} {:<30} {:<18} {} → {}  ×{:<4} {}",
                event.id,
                truncate(&event.title, 30),
                truncate(&event.location, 18),
                event.date_start,
                event.date_end,
                event.token_count,
                visibility,
            );
            let style = if i == state.selected_event {
                Theme::selected_row()
            } else {
                Style::default().fg(Theme::TEXT_PRIMARY)
            };
            items.push(ListItem::new(Span::styled(text, style)));
        }
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
