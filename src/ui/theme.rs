use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_PURPLE: Color = Color::Rgb(147, 51, 234);
    pub const ACCENT_TEAL: Color = Color::Rgb(45, 212, 191);
    pub const ACCENT_AMBER: Color = Color::Rgb(251, 191, 36);
    pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);
    pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
    pub const BORDER_DIM: Color = Color::Rgb(55, 65, 81);
    pub const BG_SURFACE: Color = Color::Rgb(17, 24, 39);
    pub const SKELETON: Color = Color::Rgb(75, 85, 99);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_PURPLE)
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
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn success_message() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_PURPLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BORDER_DIM)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn badge_free() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn badge_paid() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn skeleton() -> Style {
        Style::default().fg(Self::SKELETON)
    }

    pub fn strength(strength: crate::forms::strength::Strength) -> Style {
        use crate::forms::strength::Strength;
        let color = match strength {
            Strength::Weak => Color::Red,
            Strength::Medium => Self::ACCENT_AMBER,
            Strength::Strong => Color::Green,
        };
        Style::default().fg(color)
    }

    pub fn header_bar() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_PURPLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Self::BORDER_DIM)
    }
}
