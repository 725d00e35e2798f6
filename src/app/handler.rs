use crate::api::fallback;
use crate::app::action::Action;
use crate::app::event::{ApiEvent, AppEvent, CreateEventError};
use crate::app::route::Route;
use crate::app::state::*;
use crate::events::filters::FilterSet;
use crate::forms::auth::AuthRequest;
use crate::forms::validate::ValidationError;
use crate::forms::TextField;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const CREATE_EVENT_NO_TOKEN: &str = "Unauthorized: Please login first.";
pub const EVENT_CREATED: &str = "Event created successfully!";
pub const DESCRIPTION_ADDED: &str =
    "AI-generated description added. You can edit it before submitting.";
const EVENT_CREATED_REDIRECT: Duration = Duration::from_millis(1500);

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Api { epoch, result } => {
            if epoch != state.epoch {
                debug!(epoch, current = state.epoch, "dropping result for a screen no longer shown");
                return vec![];
            }
            state.dirty = true;
            handle_api(state, result)
        }
        AppEvent::SessionChanged { signed_in } => {
            info!(signed_in, "session changed");
            state.dirty = true;
            vec![]
        }
        AppEvent::Navigate { epoch, route } => {
            if epoch != state.epoch {
                debug!(to = route.path(), "dropping delayed navigation");
                return vec![];
            }
            state.navigate(route)
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Keep spinners moving while a request is outstanding.
            if state.is_busy() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Esc {
        if state.route == Route::Home {
            return vec![];
        }
        return state.navigate(Route::Home);
    }

    let handler: fn(&mut AppState, KeyEvent) -> Vec<Action> = match state.screen {
        Screen::Home(_) => handle_home_key,
        Screen::Auth(_) => handle_auth_key,
        Screen::CreateEvent(_) => handle_create_event_key,
        Screen::Dashboard(_) => handle_dashboard_key,
        Screen::Browse(_) => handle_browse_key,
        Screen::NotFound(_) => handle_not_found_key,
    };
    handler(state, key)
}

/// A line-editing keystroke, applicable to any text field.
#[derive(Debug, Clone, Copy)]
enum EditOp {
    Insert(char),
    DeleteBack,
    DeleteForward,
    DeleteWordBack,
    Left,
    Right,
    Home,
    End,
}

impl EditOp {
    fn from_key(key: &KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('w') if ctrl => Some(EditOp::DeleteWordBack),
            KeyCode::Char(c) if !ctrl => Some(EditOp::Insert(c)),
            KeyCode::Backspace if alt => Some(EditOp::DeleteWordBack),
            KeyCode::Backspace => Some(EditOp::DeleteBack),
            KeyCode::Delete => Some(EditOp::DeleteForward),
            KeyCode::Left => Some(EditOp::Left),
            KeyCode::Right => Some(EditOp::Right),
            KeyCode::Home => Some(EditOp::Home),
            KeyCode::End => Some(EditOp::End),
            _ => None,
        }
    }

    fn apply(self, field: &mut TextField) {
        match self {
            EditOp::Insert(c) => field.insert_char(c),
            EditOp::DeleteBack => field.delete_back(),
            EditOp::DeleteForward => field.delete_forward(),
            EditOp::DeleteWordBack => field.delete_word_back(),
            EditOp::Left => field.move_left(),
            EditOp::Right => field.move_right(),
            EditOp::Home => field.move_home(),
            EditOp::End => field.move_end(),
        }
    }
}

fn handle_home_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Screen::Home(menu) = &mut state.screen else {
        return vec![];
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => menu.move_up(),
        KeyCode::Down | KeyCode::Char('j') => menu.move_down(),
        KeyCode::Enter => {
            let route = menu.route();
            return state.navigate(route);
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_auth_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let Screen::Auth(form) = &mut state.screen else {
        return vec![];
    };
    match key.code {
        KeyCode::Enter => return submit_auth(state),
        KeyCode::Char('n') if ctrl => {
            let route = form.kind.switch_route();
            return state.navigate(route);
        }
        KeyCode::Char('s') if ctrl => form.toggle_password_visibility(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        _ => {
            if let Some(op) = EditOp::from_key(&key) {
                form.edit(|field| op.apply(field));
            }
        }
    }
    vec![]
}

fn submit_auth(state: &mut AppState) -> Vec<Action> {
    let epoch = state.epoch;
    let Screen::Auth(form) = &mut state.screen else {
        return vec![];
    };
    if form.submission.in_flight {
        debug!(kind = ?form.kind, "submit ignored, request outstanding");
        return vec![];
    }
    let request = match form.validate() {
        Ok(request) => request,
        Err(e) => {
            form.submission.fail(e.to_string());
            return vec![];
        }
    };
    form.submission.begin();
    let role = form.kind.role();
    info!(kind = ?form.kind, "submitting credentials");
    let action = match request {
        AuthRequest::Register(request) => Action::Register { epoch, role, request },
        AuthRequest::Login(request) => Action::Login { epoch, role, request },
    };
    vec![action]
}

fn handle_create_event_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let epoch = state.epoch;
    let Screen::CreateEvent(form) = &mut state.screen else {
        return vec![];
    };
    match key.code {
        KeyCode::Enter => return submit_event(state),
        KeyCode::Char('g') if ctrl => {
            if !form.can_submit() {
                debug!("description generation ignored, request outstanding");
                return vec![];
            }
            form.submission.reset_messages();
            form.generating = true;
            return vec![Action::GenerateDescription {
                epoch,
                request: form.description_request(),
            }];
        }
        KeyCode::Char('o') if ctrl => match form.image_path() {
            Some(path) => return vec![Action::InspectImage { epoch, path }],
            None => form.reject_image(ValidationError::ImageRequired.to_string()),
        },
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        _ => {
            if let Some(op) = EditOp::from_key(&key) {
                form.edit(|field| op.apply(field));
            }
        }
    }
    vec![]
}

fn submit_event(state: &mut AppState) -> Vec<Action> {
    let epoch = state.epoch;
    let token = state.session.get().map(str::to_string);
    let Screen::CreateEvent(form) = &mut state.screen else {
        return vec![];
    };
    if !form.can_submit() {
        debug!("create event ignored, request outstanding");
        return vec![];
    }
    let event = match form.validate() {
        Ok(event) => event,
        Err(e) => {
            form.submission.fail(e.to_string());
            return vec![];
        }
    };
    let Some(token) = token else {
        form.submission.fail(CREATE_EVENT_NO_TOKEN);
        return vec![];
    };
    form.submission.begin();
    info!(title = %event.title, "creating event");
    vec![Action::CreateEvent { epoch, token, event }]
}

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Screen::Dashboard(dashboard) = &mut state.screen else {
        return vec![];
    };
    match key.code {
        KeyCode::Char('n') => return state.navigate(Route::AdminCreateEvent),
        KeyCode::Char('l') => {
            info!("admin logged out");
            return state.sign_out(None);
        }
        KeyCode::Char('r') => return state.refetch_dashboard(),
        KeyCode::Up | KeyCode::Char('k') => dashboard.list.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => dashboard.list.scroll_down(),
        _ => {}
    }
    vec![]
}

fn handle_browse_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Screen::Browse(browse) = &mut state.screen else {
        return vec![];
    };
    match key.code {
        KeyCode::Tab => browse.focus_next(),
        KeyCode::BackTab => browse.focus_prev(),
        KeyCode::Left | KeyCode::Right => {
            let kind = browse.focused_filter();
            if browse.filters.cycle(kind, key.code == KeyCode::Right) {
                debug!(filter = kind.key(), value = browse.filters.get(kind), "filter changed");
                return state.refetch_browse();
            }
        }
        KeyCode::Char('c') if !browse.filters.is_default() => {
            browse.filters = FilterSet::default();
            return state.refetch_browse();
        }
        KeyCode::Char('r') => return state.refetch_browse(),
        KeyCode::Char('l') => return state.navigate(Route::UserLogin),
        KeyCode::Char('s') => return state.navigate(Route::UserRegister),
        KeyCode::Up | KeyCode::Char('k') => browse.list.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => browse.list.scroll_down(),
        _ => {}
    }
    vec![]
}

fn handle_not_found_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => state.navigate(Route::Home),
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_api(state: &mut AppState, result: ApiEvent) -> Vec<Action> {
    match result {
        ApiEvent::Authenticated(result) => {
            let Screen::Auth(form) = &mut state.screen else {
                return vec![];
            };
            let kind = form.kind;
            match result {
                Ok(response) => {
                    if let Some(token) = response.token {
                        if let Err(e) = state.session.set(token) {
                            warn!(error = %e, "failed to persist session token");
                        }
                    }
                    form.clear();
                    form.submission.succeed(kind.success_message());
                    info!(kind = ?kind, "authenticated");
                    let (route, delay) = kind.redirect();
                    vec![state.navigate_after(route, delay)]
                }
                Err(e) => {
                    warn!(kind = ?kind, error = %e, "authentication failed");
                    form.submission.fail(e.user_message(kind.fallback_message()));
                    vec![]
                }
            }
        }
        ApiEvent::DashboardLoaded { seq, result } => {
            if matches!(&result, Err(e) if e.is_unauthorized()) {
                warn!("dashboard request unauthorized, signing out");
                return state.sign_out(Some(DASHBOARD_EXPIRED));
            }
            let Screen::Dashboard(dashboard) = &mut state.screen else {
                return vec![];
            };
            let result = result.map_err(|e| {
                warn!(error = %e, "dashboard fetch failed");
                e.user_message(fallback::FETCH_EVENTS)
            });
            if !dashboard.list.apply(seq, result) {
                debug!(seq, "dropping superseded dashboard result");
            }
            vec![]
        }
        ApiEvent::BrowseLoaded { seq, result } => {
            let Screen::Browse(browse) = &mut state.screen else {
                return vec![];
            };
            let result = result.map_err(|e| {
                warn!(error = %e, "browse fetch failed");
                e.user_message(fallback::FETCH_EVENTS)
            });
            if !browse.list.apply(seq, result) {
                debug!(seq, "dropping superseded browse result");
            }
            vec![]
        }
        ApiEvent::DescriptionGenerated(result) => {
            let Screen::CreateEvent(form) = &mut state.screen else {
                return vec![];
            };
            form.generating = false;
            match result {
                Ok(description) => {
                    form.description.set(&description);
                    form.submission.succeed(DESCRIPTION_ADDED);
                }
                Err(e) => {
                    warn!(error = %e, "description generation failed");
                    form.submission
                        .fail(e.user_message(fallback::GENERATE_DESCRIPTION));
                }
            }
            vec![]
        }
        ApiEvent::ImageInspected { path, result } => {
            let Screen::CreateEvent(form) = &mut state.screen else {
                return vec![];
            };
            // The path may have been edited while the file was inspected.
            if form.image_path().as_deref() != Some(path.as_path()) {
                debug!(path = %path.display(), "ignoring inspection of an outdated path");
                return vec![];
            }
            match result {
                Ok(selection) => {
                    debug!(path = %selection.path.display(), size = selection.size, "image attached");
                    form.select_image(selection);
                }
                Err(e) => {
                    warn!(error = %e, "image rejected");
                    form.reject_image(e.to_string());
                }
            }
            vec![]
        }
        ApiEvent::EventCreated(result) => {
            let Screen::CreateEvent(form) = &mut state.screen else {
                return vec![];
            };
            match result {
                Ok(()) => {
                    form.clear();
                    form.submission.succeed(EVENT_CREATED);
                    info!("event created");
                    vec![state.navigate_after(Route::AdminDashboard, EVENT_CREATED_REDIRECT)]
                }
                Err(e) => {
                    warn!(error = %e, "event creation failed");
                    let message = match e {
                        CreateEventError::Image(e) => e.to_string(),
                        CreateEventError::Api(e) => e.user_message(fallback::CREATE_EVENT),
                    };
                    form.submission.fail(message);
                    vec![]
                }
            }
        }
    }
}
