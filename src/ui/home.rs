use crate::app::state::{HomeMenu, HOME_ENTRIES};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, menu: &HomeMenu) {
    let height = HOME_ENTRIES.len() as u16 + 6;
    let panel = centered(area, 44, height);

    let block = Block::default()
        .title(" Event Hive ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines = vec![
        Line::from(Span::styled("Discover, create and join events.", Theme::hint())),
        Line::default(),
    ];
    for (i, (label, route)) in HOME_ENTRIES.iter().enumerate() {
        let line = if i == menu.selected {
            Line::from(vec![
                Span::styled("❯ ", Theme::selected()),
                Span::styled(*label, Theme::selected()),
                Span::styled(format!("  {}", route.path()), Theme::hint()),
            ])
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(*label, Theme::input_text()),
            ])
        };
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}
