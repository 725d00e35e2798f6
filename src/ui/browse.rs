use crate::app::state::BrowseState;
use crate::config::model::UiConfig;
use crate::events::filters::FilterKind;
use crate::ui::event_list;
use crate::ui::layout::rows;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub const EMPTY_TEXT: &str = "No events found matching your criteria.";

pub fn render(frame: &mut Frame, area: Rect, browse: &BrowseState, ui: &UiConfig) {
    let r = rows(area, &[1, 4, area.height.saturating_sub(5)]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Upcoming Events", Theme::title()),
            Span::styled("   l: sign in  s: sign up", Theme::hint()),
        ])),
        r[0],
    );
    render_filters(frame, r[1], browse);
    event_list::render_list(frame, r[2], &browse.list, ui, EMPTY_TEXT);
}

fn render_filters(frame: &mut Frame, area: Rect, browse: &BrowseState) {
    let block = Block::default()
        .title(if browse.filters.is_default() {
            " Filters "
        } else {
            " Filters (c to clear) "
        })
        .title_style(Theme::label())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focused = browse.focused_filter();
    let mut labels = Vec::new();
    let mut values = Vec::new();
    for kind in FilterKind::ORDER {
        let selected = browse.filters.selected_label(kind);
        let (label_style, value_style) = if kind == focused {
            (Theme::selected(), Theme::selected())
        } else {
            (Theme::label(), Theme::input_text())
        };
        let width = kind.label().chars().count().max(selected.chars().count() + 4) + 2;
        labels.push(Span::styled(format!("{:<width$}", kind.label()), label_style));
        let value = if kind == focused {
            format!("‹ {} ›", selected)
        } else {
            format!("  {}  ", selected)
        };
        values.push(Span::styled(format!("{:<width$}", value), value_style));
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(labels), Line::from(values)]),
        inner,
    );
}
