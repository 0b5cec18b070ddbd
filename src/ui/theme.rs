use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(16, 18, 24);
    pub const BG_SURFACE: Color = Color::Rgb(24, 27, 35);
    pub const BG_ELEVATED: Color = Color::Rgb(32, 36, 46);
    pub const BORDER_DIM: Color = Color::Rgb(60, 65, 80);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(140, 146, 160);
    pub const TEXT_MUTED: Color = Color::Rgb(95, 100, 115);
    pub const ACCENT_TEAL: Color = Color::Rgb(64, 190, 180);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 200, 120);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_RED: Color = Color::Rgb(225, 95, 95);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn error_text() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn success_text() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Color::DarkGray)
    }
}
