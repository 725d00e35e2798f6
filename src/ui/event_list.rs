use crate::api::models::Event;
use crate::app::state::DashboardState;
use crate::config::model::UiConfig;
use crate::events::list::{
    badge_label, image_data_url, image_payload_bytes, is_free, EventList, ListStatus,
};
use crate::ui::layout::{centered, rows};
use crate::ui::theme::Theme;
use chrono::NaiveDate;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap};
use std::fmt::Write;

pub const CARD_HEIGHT: u16 = 6;

pub fn render_dashboard(frame: &mut Frame, area: Rect, dashboard: &DashboardState, ui: &UiConfig) {
    let [heading, list_area] = split_heading(area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Your Events", Theme::title()),
            Span::styled("   n: create a new event", Theme::hint()),
        ])),
        heading,
    );
    render_list(frame, list_area, &dashboard.list, ui, "No events found.");
}

fn split_heading(area: Rect) -> [Rect; 2] {
    let r = rows(area, &[2, area.height.saturating_sub(2)]);
    [r[0], r[1]]
}

/// Draw an event list in whichever state it is in.
pub fn render_list(frame: &mut Frame, area: Rect, list: &EventList, ui: &UiConfig, empty_text: &str) {
    match &list.status {
        ListStatus::Loading => render_skeletons(frame, area, ui.skeleton_cards),
        ListStatus::Empty => render_notice(frame, area, empty_text, Theme::hint()),
        ListStatus::Failed(msg) => render_notice(frame, area, msg, Theme::error_message()),
        ListStatus::Loaded(events) => render_cards(frame, area, events, list.scroll, ui),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let notice_area = centered(area, area.width, 3);
    frame.render_widget(
        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        notice_area,
    );
}

fn render_skeletons(frame: &mut Frame, area: Rect, count: usize) {
    let visible = (area.height / CARD_HEIGHT) as usize;
    let heights = vec![CARD_HEIGHT; count.min(visible)];
    for card in rows(area, &heights) {
        let block = card_block(Theme::skeleton());
        let inner = block.inner(card);
        frame.render_widget(block, card);
        let width = inner.width as usize;
        let lines = vec![
            Line::from(Span::styled("▇".repeat(width * 2 / 3), Theme::skeleton())),
            Line::from(Span::styled("▇".repeat(width / 2), Theme::skeleton())),
            Line::from(Span::styled("▇".repeat(width / 3), Theme::skeleton())),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn render_cards(frame: &mut Frame, area: Rect, events: &[Event], scroll: usize, ui: &UiConfig) {
    let visible = ((area.height / CARD_HEIGHT) as usize).max(1);
    let start = scroll.min(events.len().saturating_sub(1));
    let shown = &events[start..(start + visible).min(events.len())];

    let list_area = Rect::new(area.x, area.y, area.width.saturating_sub(1), area.height);
    let heights = vec![CARD_HEIGHT; shown.len()];
    for (event, card) in shown.iter().zip(rows(list_area, &heights)) {
        render_card(frame, card, event, ui);
    }

    if events.len() > visible {
        let mut scrollbar_state = ScrollbarState::new(events.len()).position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

fn card_block(border: Style) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border)
}

fn render_card(frame: &mut Frame, area: Rect, event: &Event, ui: &UiConfig) {
    let badge_style = if is_free(&event.cost_type) {
        Theme::badge_free()
    } else {
        Theme::badge_paid()
    };
    let block = card_block(Theme::border())
        .title_top(Line::from(Span::styled(format!(" {} ", event.title), Theme::title())))
        .title_top(
            Line::from(Span::styled(format!(" {} ", badge_label(&event.cost_type)), badge_style))
                .right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut when = vec![
        Span::styled("📅 ", Theme::hint()),
        Span::styled(
            date_range(&event.start_date, &event.end_date, &ui.date_format),
            Theme::input_text(),
        ),
    ];
    if !event.start_time.is_empty() {
        when.push(Span::styled(
            format!("  {} - {}", event.start_time, event.end_time),
            Theme::hint(),
        ));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled("📍 ", Theme::hint()),
            Span::styled(event.venue.as_str(), Theme::input_text()),
        ]),
        Line::from(when),
    ];
    let mut detail = Vec::new();
    if let Some(image) = event.image.as_deref().filter(|i| !i.is_empty()) {
        let bytes = image_payload_bytes(&image_data_url(image));
        detail.push(Span::styled(
            format!("[image {} KB] ", bytes.div_ceil(1024)),
            Style::default().fg(Theme::ACCENT_TEAL),
        ));
    }
    if let Some(description) = event.description.as_deref() {
        detail.push(Span::styled(description.replace('\n', " "), Theme::hint()));
    }
    lines.push(Line::from(detail));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Format a card's date span; unparsable dates are shown as sent.
pub fn date_range(start: &str, end: &str, format: &str) -> String {
    let start_fmt = format_date(start, format);
    if end.is_empty() || end == start {
        return start_fmt;
    }
    format!("{} → {}", start_fmt, format_date(end, format))
}

fn format_date(raw: &str, format: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return raw.to_string();
    };
    // A bad format string from config surfaces as a fmt error, not a panic.
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => raw.to_string(),
    }
}
