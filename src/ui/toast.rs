//! Transient notification surface. Toasts stack in the top-right corner and
//! are dropped by the tick handler once their TTL passes.

use crate::app::state::{AppState, Severity};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, state: &AppState) {
    if state.toasts.is_empty() {
        return;
    }

    let area = frame.area();
    let mut y = area.y + 1;

    for toast in state.toasts.iter().rev() {
        let width = (toast.message.width() as u16 + 4)
            .min(area.width.saturating_sub(2))
            .max(10);
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 3);

        let (accent, icon) = match toast.severity {
            Severity::Success => (Theme::ACCENT_GREEN, "✓"),
            Severity::Error => (Theme::ACCENT_RED, "✗"),
        };

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(Theme::BG_ELEVATED));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let line = Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(accent)),
            Span::styled(toast.message.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        y += 3;
    }
}
