use crate::api::models::{Event, TokenResponse};
use crate::api::ApiError;
use crate::app::route::Route;
use crate::forms::image::{ImageError, ImageSelection};
use crossterm::event::Event as CrosstermEvent;
use std::path::PathBuf;
use thiserror::Error;

/// Identifies one visit to a screen. Bumped on every navigation so results
/// of requests issued by a screen the user has left can be recognized.
pub type Epoch = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A request issued from screen visit `epoch` finished
    Api { epoch: Epoch, result: ApiEvent },

    /// The session token was stored or cleared
    SessionChanged { signed_in: bool },

    /// Delayed navigation, dropped if the user already left the screen
    Navigate { epoch: Epoch, route: Route },

    /// Tick for UI refresh
    Tick,
}

#[derive(Debug)]
pub enum ApiEvent {
    Authenticated(Result<TokenResponse, ApiError>),
    DashboardLoaded {
        seq: u64,
        result: Result<Vec<Event>, ApiError>,
    },
    BrowseLoaded {
        seq: u64,
        result: Result<Vec<Event>, ApiError>,
    },
    DescriptionGenerated(Result<String, ApiError>),
    ImageInspected {
        path: PathBuf,
        result: Result<ImageSelection, ImageError>,
    },
    EventCreated(Result<(), CreateEventError>),
}

/// Failure of the read-encode-send chain behind event creation.
#[derive(Debug, Error)]
pub enum CreateEventError {
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
