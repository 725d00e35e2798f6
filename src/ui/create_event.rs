use crate::forms::event::{EventField, EventForm};
use crate::ui::input_box::{self, FieldView, FIELD_HEIGHT};
use crate::ui::layout::{centered, rows};
use crate::ui::theme::Theme;
use crate::ui::{button, submission_message};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const PANEL_WIDTH: u16 = 72;

pub fn render(frame: &mut Frame, area: Rect, form: &EventForm) {
    let heights = [
        FIELD_HEIGHT, // title
        FIELD_HEIGHT, // venue
        FIELD_HEIGHT, // start/end date
        FIELD_HEIGHT, // start/end time
        FIELD_HEIGHT, // cost
        FIELD_HEIGHT, // description
        FIELD_HEIGHT, // image path
        1,            // image status
        2,            // messages
        1,            // buttons
    ];
    let total: u16 = heights.iter().sum::<u16>() + 2;
    let panel = centered(area, PANEL_WIDTH, total);

    let block = Block::default()
        .title(" Create Event ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let r = rows(inner, &heights);
    render_field(frame, r[0], form, EventField::Title);
    render_field(frame, r[1], form, EventField::Venue);
    render_pair(frame, r[2], form, EventField::StartDate, EventField::EndDate);
    render_pair(frame, r[3], form, EventField::StartTime, EventField::EndTime);
    render_field(frame, r[4], form, EventField::CostType);
    render_field(frame, r[5], form, EventField::Description);
    render_field(frame, r[6], form, EventField::Image);

    let image_status = match &form.image {
        Some(selection) => Line::from(vec![
            Span::styled("✔ ", Theme::success_message()),
            Span::styled(
                format!(
                    "{} ({}, {} KB)",
                    selection.file_name(),
                    selection.mime,
                    selection.size.div_ceil(1024)
                ),
                Theme::input_text(),
            ),
        ]),
        None => Line::from(Span::styled("No image attached", Theme::hint())),
    };
    frame.render_widget(Paragraph::new(image_status), r[7]);

    if let Some(message) = submission_message(&form.submission) {
        frame.render_widget(message, r[8]);
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(r[9]);
    let generate = if form.generating {
        "Generating..."
    } else {
        "AI Generate Description (Ctrl+G)"
    };
    frame.render_widget(button(generate, form.can_submit()), buttons[0]);
    let submit = if form.submission.in_flight {
        "Creating..."
    } else {
        "Create Event (Enter)"
    };
    frame.render_widget(button(submit, form.can_submit() && form.is_complete()), buttons[1]);
}

fn render_field(frame: &mut Frame, area: Rect, form: &EventForm, field: EventField) {
    let view = FieldView {
        label: field.label(),
        field: form.field(field),
        placeholder: field.placeholder(),
        focused: form.focused() == field,
        masked: false,
    };
    input_box::render(frame, area, &view);
}

fn render_pair(frame: &mut Frame, area: Rect, form: &EventForm, left: EventField, right: EventField) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    render_field(frame, halves[0], form, left);
    render_field(frame, halves[1], form, right);
}
