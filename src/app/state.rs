use crate::app::action::Action;
use crate::app::event::Epoch;
use crate::app::route::Route;
use crate::config::AppConfig;
use crate::events::filters::{FilterKind, FilterSet};
use crate::events::list::EventList;
use crate::forms::auth::{AuthForm, AuthKind};
use crate::forms::event::EventForm;
use crate::session::SessionStore;
use std::time::Duration;
use tracing::{info, warn};

pub const DASHBOARD_NO_TOKEN: &str = "Unauthorized: Please login.";
pub const DASHBOARD_EXPIRED: &str = "Session expired or unauthorized. Please login again.";

/// Entries of the home menu, in display order.
pub const HOME_ENTRIES: [(&str, Route); 7] = [
    ("Browse events", Route::BrowseEvents),
    ("Sign in", Route::UserLogin),
    ("Sign up", Route::UserRegister),
    ("Admin sign in", Route::AdminLogin),
    ("Admin sign up", Route::AdminRegister),
    ("Admin dashboard", Route::AdminDashboard),
    ("Create event", Route::AdminCreateEvent),
];

#[derive(Debug, Default)]
pub struct HomeMenu {
    pub selected: usize,
}

impl HomeMenu {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < HOME_ENTRIES.len() {
            self.selected += 1;
        }
    }

    pub fn route(&self) -> Route {
        HOME_ENTRIES[self.selected.min(HOME_ENTRIES.len() - 1)].1.clone()
    }
}

#[derive(Debug, Default)]
pub struct DashboardState {
    pub list: EventList,
}

#[derive(Debug, Default)]
pub struct BrowseState {
    pub filters: FilterSet,
    pub focus: usize,
    pub list: EventList,
}

impl BrowseState {
    pub fn focused_filter(&self) -> FilterKind {
        FilterKind::ORDER[self.focus.min(FilterKind::ORDER.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FilterKind::ORDER.len();
    }

    pub fn focus_prev(&mut self) {
        let len = FilterKind::ORDER.len();
        self.focus = (self.focus + len - 1) % len;
    }
}

/// The screen currently mounted. Each navigation builds a fresh one.
#[derive(Debug)]
pub enum Screen {
    Home(HomeMenu),
    Auth(AuthForm),
    CreateEvent(EventForm),
    Dashboard(DashboardState),
    Browse(BrowseState),
    NotFound(String),
}

pub struct AppState {
    pub config: AppConfig,
    pub session: SessionStore,
    pub route: Route,
    pub screen: Screen,
    pub epoch: Epoch,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig, session: SessionStore) -> Self {
        Self {
            config,
            session,
            route: Route::Home,
            screen: Screen::Home(HomeMenu::default()),
            epoch: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_count: 0,
        }
    }

    /// Mount the screen for `route`, returning the actions it issues on mount.
    pub fn navigate(&mut self, route: Route) -> Vec<Action> {
        info!(from = self.route.path(), to = route.path(), "navigate");
        self.epoch += 1;
        self.dirty = true;
        self.status_message = None;
        self.route = route.clone();
        let epoch = self.epoch;

        let (screen, actions) = match route {
            Route::Home => (Screen::Home(HomeMenu::default()), vec![]),
            Route::AdminRegister => (Screen::Auth(AuthForm::new(AuthKind::AdminRegister)), vec![]),
            Route::AdminLogin => (Screen::Auth(AuthForm::new(AuthKind::AdminLogin)), vec![]),
            Route::UserRegister => (Screen::Auth(AuthForm::new(AuthKind::UserRegister)), vec![]),
            Route::UserLogin => (Screen::Auth(AuthForm::new(AuthKind::UserLogin)), vec![]),
            Route::AdminCreateEvent => (Screen::CreateEvent(EventForm::new()), vec![]),
            Route::AdminDashboard => {
                let mut dashboard = DashboardState::default();
                match self.session.get() {
                    Some(token) => {
                        let seq = dashboard.list.begin_fetch();
                        let action = Action::FetchDashboard {
                            epoch,
                            seq,
                            token: token.to_string(),
                        };
                        (Screen::Dashboard(dashboard), vec![action])
                    }
                    None => {
                        warn!("dashboard opened without a session token");
                        let actions = self.navigate(Route::AdminLogin);
                        self.status_message = Some(DASHBOARD_NO_TOKEN.to_string());
                        return actions;
                    }
                }
            }
            Route::BrowseEvents => {
                let mut browse = BrowseState::default();
                let seq = browse.list.begin_fetch();
                let action = Action::BrowseEvents {
                    epoch,
                    seq,
                    filters: browse.filters.clone(),
                };
                (Screen::Browse(browse), vec![action])
            }
            Route::NotFound(path) => (Screen::NotFound(path), vec![]),
        };
        self.screen = screen;
        actions
    }

    /// Schedule navigation away from the current screen visit.
    pub fn navigate_after(&self, route: Route, delay: Duration) -> Action {
        Action::NavigateAfter {
            epoch: self.epoch,
            route,
            delay,
        }
    }

    /// Clear the session and go to the admin login screen.
    pub fn sign_out(&mut self, message: Option<&str>) -> Vec<Action> {
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "failed to clear session file");
        }
        let actions = self.navigate(Route::AdminLogin);
        self.status_message = message.map(str::to_string);
        actions
    }

    /// Begin a fresh fetch on the browse screen with the current filters.
    pub fn refetch_browse(&mut self) -> Vec<Action> {
        let epoch = self.epoch;
        match &mut self.screen {
            Screen::Browse(browse) => {
                let seq = browse.list.begin_fetch();
                vec![Action::BrowseEvents {
                    epoch,
                    seq,
                    filters: browse.filters.clone(),
                }]
            }
            _ => vec![],
        }
    }

    pub fn refetch_dashboard(&mut self) -> Vec<Action> {
        let epoch = self.epoch;
        let token = match self.session.get() {
            Some(t) => t.to_string(),
            None => return self.sign_out(Some(DASHBOARD_NO_TOKEN)),
        };
        match &mut self.screen {
            Screen::Dashboard(dashboard) => {
                let seq = dashboard.list.begin_fetch();
                vec![Action::FetchDashboard { epoch, seq, token }]
            }
            _ => vec![],
        }
    }

    /// Whether any request started by the current screen is outstanding.
    pub fn is_busy(&self) -> bool {
        match &self.screen {
            Screen::Auth(form) => form.submission.in_flight,
            Screen::CreateEvent(form) => form.submission.in_flight || form.generating,
            Screen::Dashboard(d) => d.list.is_loading(),
            Screen::Browse(b) => b.list.is_loading(),
            Screen::Home(_) | Screen::NotFound(_) => false,
        }
    }

    pub fn status_line(&self) -> String {
        match self.status_message {
            Some(ref msg) => msg.clone(),
            None => self.route.path().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::open(dir.path().join("session.toml")).unwrap();
        (dir, AppState::new(AppConfig::default(), session))
    }

    #[test]
    fn test_navigate_bumps_epoch_and_mounts_screen() {
        let (_dir, mut state) = state();
        let actions = state.navigate(Route::UserLogin);
        assert!(actions.is_empty());
        assert_eq!(state.epoch, 1);
        assert!(matches!(state.screen, Screen::Auth(ref f) if f.kind == AuthKind::UserLogin));
    }

    #[test]
    fn test_browse_fetches_on_mount() {
        let (_dir, mut state) = state();
        let actions = state.navigate(Route::BrowseEvents);
        assert_eq!(
            actions,
            vec![Action::BrowseEvents {
                epoch: 1,
                seq: 1,
                filters: FilterSet::default(),
            }]
        );
    }

    #[test]
    fn test_dashboard_without_token_redirects_to_login() {
        let (_dir, mut state) = state();
        let actions = state.navigate(Route::AdminDashboard);
        assert!(actions.is_empty());
        assert_eq!(state.route, Route::AdminLogin);
        assert_eq!(state.status_message.as_deref(), Some(DASHBOARD_NO_TOKEN));
    }

    #[test]
    fn test_dashboard_with_token_fetches() {
        let (_dir, mut state) = state();
        state.session.set("tok".into()).unwrap();
        let actions = state.navigate(Route::AdminDashboard);
        assert!(matches!(
            actions.as_slice(),
            [Action::FetchDashboard { token, seq: 1, .. }] if token == "tok"
        ));
        assert!(state.is_busy());
    }

    #[test]
    fn test_unknown_route() {
        let (_dir, mut state) = state();
        state.navigate(Route::from_path("/missing"));
        assert!(matches!(state.screen, Screen::NotFound(ref p) if p == "/missing"));
    }

    #[test]
    fn test_home_menu_bounds() {
        let mut menu = HomeMenu::default();
        menu.move_up();
        assert_eq!(menu.route(), Route::BrowseEvents);
        for _ in 0..20 {
            menu.move_down();
        }
        assert_eq!(menu.route(), Route::AdminCreateEvent);
    }
}
