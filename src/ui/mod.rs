mod auth;
mod browse;
mod create_event;
mod event_list;
mod home;
mod input_box;
mod layout;
mod not_found;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Screen};
use crate::forms::Submission;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header, state);
    match &state.screen {
        Screen::Home(menu) => home::render(frame, app_layout.content, menu),
        Screen::Auth(form) => auth::render(frame, app_layout.content, form),
        Screen::CreateEvent(form) => create_event::render(frame, app_layout.content, form),
        Screen::Dashboard(dashboard) => {
            event_list::render_dashboard(frame, app_layout.content, dashboard, &state.config.ui)
        }
        Screen::Browse(browse) => {
            browse::render(frame, app_layout.content, browse, &state.config.ui)
        }
        Screen::NotFound(path) => not_found::render(frame, app_layout.content, path),
    }
    render_help(frame, app_layout.help, &state.screen);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(vec![
        Span::styled(" Event Hive ", Theme::header_bar()),
        Span::styled(format!(" {} ", state.route.title()), Theme::title()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame, area: Rect, screen: &Screen) {
    let keys = match screen {
        Screen::Home(_) => "↑/↓ select  Enter open  q quit",
        Screen::Auth(_) => "Tab next field  Enter submit  Ctrl+S show password  Ctrl+N switch  Esc home",
        Screen::CreateEvent(_) => "Tab next field  Ctrl+G generate  Ctrl+O attach image  Enter create  Esc home",
        Screen::Dashboard(_) => "n new event  r reload  l logout  ↑/↓ scroll  Esc home",
        Screen::Browse(_) => "Tab filter  ←/→ change  c clear  r reload  l sign in  s sign up  ↑/↓ scroll  Esc home",
        Screen::NotFound(_) => "Enter home  q quit",
    };
    frame.render_widget(Paragraph::new(Span::styled(keys, Theme::hint())), area);
}

/// The submission's current message, styled as error or success.
fn submission_message(submission: &Submission) -> Option<Paragraph<'_>> {
    let (text, style) = match (&submission.error, &submission.success) {
        (Some(err), _) => (err.as_str(), Theme::error_message()),
        (None, Some(ok)) => (ok.as_str(), Theme::success_message()),
        (None, None) => return None,
    };
    Some(
        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
    )
}

/// A one-line button that dims while disabled.
fn button(label: &str, enabled: bool) -> Paragraph<'_> {
    let style = if enabled {
        Theme::button()
    } else {
        Theme::button_disabled()
    };
    Paragraph::new(Span::styled(format!(" {} ", label), style)).alignment(Alignment::Center)
}
