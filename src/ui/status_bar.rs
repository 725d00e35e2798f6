use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.is_busy() {
        let frame_idx = (state.tick_count / 2) as usize % SPINNER.len();
        parts.push(Span::styled(
            format!(" {} ", SPINNER[frame_idx]),
            Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BORDER_DIM),
        ));
    }

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Session indicator, right-aligned
    let session = if state.session.is_signed_in() {
        " [signed in] "
    } else {
        " [guest] "
    };
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + session.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        session,
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BORDER_DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
