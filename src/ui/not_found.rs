use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, path: &str) {
    let panel = centered(area, 50, 4);
    let lines = vec![
        Line::from(Span::styled("404 - Page Not Found", Theme::error_message().add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(Span::styled(format!("No screen at {}", path), Theme::hint())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), panel);
}
