use crate::forms::auth::{AuthForm, AuthField};
use crate::ui::input_box::{self, FieldView, FIELD_HEIGHT};
use crate::ui::layout::{centered, rows};
use crate::ui::theme::Theme;
use crate::ui::{button, submission_message};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const PANEL_WIDTH: u16 = 56;

pub fn render(frame: &mut Frame, area: Rect, form: &AuthForm) {
    let fields = form.kind.fields();
    let mut heights = vec![2];
    heights.extend(std::iter::repeat(FIELD_HEIGHT).take(fields.len()));
    heights.extend([1, 2, 1, 1]);
    let total: u16 = heights.iter().sum::<u16>() + 2;

    let panel = centered(area, PANEL_WIDTH, total);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let areas = rows(inner, &heights);
    let mut areas = areas.into_iter();
    let mut next = || areas.next().unwrap_or_default();

    frame.render_widget(
        Paragraph::new(Span::styled(form.kind.title(), Theme::title())).alignment(Alignment::Center),
        next(),
    );

    let focused = form.focused();
    for &field in fields {
        let view = FieldView {
            label: field.label(),
            field: form.field(field),
            placeholder: placeholder(field),
            focused: field == focused,
            masked: field.is_secret() && !form.show_password,
        };
        input_box::render(frame, next(), &view);
    }

    let strength_area = next();
    if let Some(strength) = form.strength {
        let meter = "■".repeat(strength.bars() * 4);
        let empty = "□".repeat((3 - strength.bars()) * 4);
        let line = Line::from(vec![
            Span::styled(meter, Theme::strength(strength)),
            Span::styled(empty, Theme::skeleton()),
            Span::styled(format!(" {}", strength.label()), Theme::strength(strength)),
        ]);
        frame.render_widget(Paragraph::new(line), strength_area);
    } else if fields.contains(&AuthField::Password) && form.show_password {
        frame.render_widget(
            Paragraph::new(Span::styled("password visible", Theme::hint())),
            strength_area,
        );
    }

    let message_area = next();
    if let Some(message) = submission_message(&form.submission) {
        frame.render_widget(message, message_area);
    }

    let label = if form.submission.in_flight {
        "Please wait..."
    } else {
        form.kind.submit_label()
    };
    frame.render_widget(button(label, !form.submission.in_flight), next());

    let switch = if form.kind.is_register() {
        "Already have an account? Ctrl+N to sign in"
    } else {
        "Don't have an account? Ctrl+N to sign up"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(switch, Theme::hint())).alignment(Alignment::Center),
        next(),
    );
}

fn placeholder(field: AuthField) -> &'static str {
    match field {
        AuthField::Name => "Enter your name",
        AuthField::Email => "Enter your email",
        AuthField::Password => "Enter your password",
        AuthField::Confirm => "Confirm your password",
    }
}
