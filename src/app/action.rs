use crate::api::models::{DescriptionRequest, LoginRequest, RegisterRequest};
use crate::app::event::Epoch;
use crate::app::route::Route;
use crate::events::filters::FilterSet;
use crate::forms::auth::Role;
use crate::forms::validate::ValidEvent;
use std::path::PathBuf;
use std::time::Duration;

/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Register { epoch: Epoch, role: Role, request: RegisterRequest },
    Login { epoch: Epoch, role: Role, request: LoginRequest },
    FetchDashboard { epoch: Epoch, seq: u64, token: String },
    BrowseEvents { epoch: Epoch, seq: u64, filters: FilterSet },
    GenerateDescription { epoch: Epoch, request: DescriptionRequest },
    InspectImage { epoch: Epoch, path: PathBuf },
    CreateEvent { epoch: Epoch, token: String, event: ValidEvent },
    NavigateAfter { epoch: Epoch, route: Route, delay: Duration },
    Quit,
}
