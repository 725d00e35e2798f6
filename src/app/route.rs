/// Navigable screens, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    AdminRegister,
    AdminDashboard,
    AdminCreateEvent,
    AdminLogin,
    BrowseEvents,
    UserRegister,
    UserLogin,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/HomePage" => Route::Home,
            "/admin/register" => Route::AdminRegister,
            "/admin/dashboard" => Route::AdminDashboard,
            "/admin/create-event" => Route::AdminCreateEvent,
            "/login" => Route::AdminLogin,
            "/browse-events" => Route::BrowseEvents,
            "/user/register" => Route::UserRegister,
            "/user/login" => Route::UserLogin,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::AdminRegister => "/admin/register",
            Route::AdminDashboard => "/admin/dashboard",
            Route::AdminCreateEvent => "/admin/create-event",
            Route::AdminLogin => "/login",
            Route::BrowseEvents => "/browse-events",
            Route::UserRegister => "/user/register",
            Route::UserLogin => "/user/login",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AdminRegister => "Admin Sign Up",
            Route::AdminDashboard => "Admin Dashboard",
            Route::AdminCreateEvent => "Create Event",
            Route::AdminLogin => "Admin Sign In",
            Route::BrowseEvents => "Browse Events",
            Route::UserRegister => "Sign Up",
            Route::UserLogin => "Sign In",
            Route::NotFound(_) => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_round_trip() {
        for route in [
            Route::Home,
            Route::AdminRegister,
            Route::AdminDashboard,
            Route::AdminCreateEvent,
            Route::AdminLogin,
            Route::BrowseEvents,
            Route::UserRegister,
            Route::UserLogin,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_home_aliases() {
        assert_eq!(Route::from_path("/HomePage"), Route::Home);
        assert_eq!(Route::from_path("/"), Route::Home);
    }

    #[test]
    fn test_catch_all() {
        assert_eq!(
            Route::from_path("/admin/settings"),
            Route::NotFound("/admin/settings".into())
        );
        assert_eq!(Route::from_path("/nope").path(), "/nope");
    }
}
