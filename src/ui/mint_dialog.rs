//! Modal mint-event form.
//!
//! Rendered as a centered popup over the listing; visible only while the
//! shared active-dialog selector names it. Inline errors track the draft's
//! cached validation state.

use crate::app::state::{AppState, DialogId};
use crate::mint::form::FormFocus;
use crate::mint::validate::FormField;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

const FIELDS: [FormField; 7] = [
    FormField::Title,
    FormField::Description,
    FormField::Location,
    FormField::ImageUrl,
    FormField::TokenCount,
    FormField::DateStart,
    FormField::DateEnd,
];

const LABEL_WIDTH: usize = 13;

pub fn render(frame: &mut Frame, state: &AppState) {
    if state.active_dialog != Some(DialogId::MintEvent) {
        return;
    }

    let area = frame.area();

    // Center the popup: 7 field rows + error rows + toggle, buttons, hint
    let popup_w = (area.width * 70 / 100)
        .max(56)
        .min(area.width.saturating_sub(4));
    let popup_h = 20u16.min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Mint Event — Tab to navigate, Esc to close ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 12 || inner.width < 30 {
        return;
    }

    let draft = &state.mint.draft;
    let mut y = inner.y;

    for field in FIELDS {
        if y >= inner.bottom().saturating_sub(1) {
            break;
        }
        let focused = draft.focus == FormFocus::Field(field);
        let input = draft.field(field);

        let label_style = if focused {
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Theme::label()
        };
        let marker = if focused { "❯ " } else { "  " };

        let row = Line::from(vec![
            Span::styled(format!("{}{:<width$}", marker, field.label(), width = LABEL_WIDTH), label_style),
            Span::styled(input.text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(row), Rect::new(inner.x, y, inner.width, 1));

        if focused {
            let prefix = 2 + LABEL_WIDTH;
            let cursor_x = inner.x + (prefix + input.text[..input.cursor].width()) as u16;
            frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), y));
        }
        y += 1;

        // Inline error line under the field
        if y < inner.bottom() {
            if let Some(message) = draft.errors.get(&field) {
                let err = Line::from(vec![
                    Span::styled(" ".repeat(2 + LABEL_WIDTH), Style::default()),
                    Span::styled(format!("└ {}", message), Theme::error_text()),
                ]);
                frame.render_widget(Paragraph::new(err), Rect::new(inner.x, y, inner.width, 1));
            }
        }
        y += 1;
    }

    // Visibility toggle
    if y < inner.bottom().saturating_sub(1) {
        let focused = draft.focus == FormFocus::Visibility;
        let marker = if focused { "❯ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Theme::label()
        };
        let value = if draft.is_public {
            "[x] Public — anyone can join"
        } else {
            "[ ] Managed — joining is restricted"
        };
        let row = Line::from(vec![
            Span::styled(format!("{}{:<width$}", marker, "Visibility", width = LABEL_WIDTH), label_style),
            Span::styled(value, Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(row), Rect::new(inner.x, y, inner.width, 1));
        y += 1;
    }

    // Buttons
    if y < inner.bottom().saturating_sub(1) {
        let can_submit = state.can_submit();
        let submit_label = if state.mint.in_flight {
            "[ Minting… ]"
        } else {
            "[ Mint ]"
        };
        let submit_style = if draft.focus == FormFocus::Submit {
            Theme::selected_row()
        } else if state.mint.in_flight {
            Style::default().fg(Theme::ACCENT_AMBER)
        } else if can_submit {
            Theme::success_text()
        } else {
            Theme::muted()
        };
        let cancel_style = if draft.focus == FormFocus::Cancel {
            Theme::selected_row()
        } else {
            Style::default().fg(Theme::TEXT_PRIMARY)
        };

        let row = Line::from(vec![
            Span::styled(" ".repeat(2 + LABEL_WIDTH), Style::default()),
            Span::styled(submit_label, submit_style),
            Span::styled("  ", Style::default()),
            Span::styled("[ Cancel ]", cancel_style),
        ]);
        frame.render_widget(Paragraph::new(row), Rect::new(inner.x, y, inner.width, 1));
    }

    // Hint line: why the submit affordance is disabled, if it is
    let hint = if state.mint.in_flight {
        "Waiting for the platform…"
    } else if !state.wallet.is_connected() {
        "Connect a wallet (w) to mint"
    } else if !state.auth.is_authenticated() {
        "Add an auth token to config.toml to mint"
    } else if !draft.is_valid() {
        "Fill in the fields above to enable minting"
    } else {
        "Enter on [ Mint ] to submit"
    };
    if y < inner.bottom() {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", hint), Theme::muted())),
            Rect::new(inner.x, inner.bottom() - 1, inner.width, 1),
        );
    }
}
