use crate::api::client::ApiClient;
use crate::api::models::{DescriptionRequest, LoginRequest, RegisterRequest};
use crate::app::event::{ApiEvent, AppEvent, CreateEventError, Epoch};
use crate::events::filters::FilterSet;
use crate::forms::auth::Role;
use crate::forms::image;
use crate::forms::validate::ValidEvent;
use std::future::Future;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::debug;

/// Runs each request on its own task and reports the outcome on the event
/// channel, tagged with the epoch of the screen that issued it.
pub struct ApiManager {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ApiManager {
    pub fn new(client: ApiClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }

    fn spawn<F>(&self, epoch: Epoch, fut: F)
    where
        F: Future<Output = ApiEvent> + Send + 'static,
    {
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = fut.await;
            if tx.send(AppEvent::Api { epoch, result }).is_err() {
                debug!("event loop gone, dropping request result");
            }
        });
    }

    pub fn register(&self, epoch: Epoch, role: Role, request: RegisterRequest) {
        let client = self.client.clone();
        self.spawn(epoch, async move {
            let result = match role {
                Role::Admin => client.admin_register(&request).await,
                Role::User => client.user_register(&request).await,
            };
            ApiEvent::Authenticated(result)
        });
    }

    pub fn login(&self, epoch: Epoch, role: Role, request: LoginRequest) {
        let client = self.client.clone();
        self.spawn(epoch, async move {
            let result = match role {
                Role::Admin => client.admin_login(&request).await,
                Role::User => client.user_login(&request).await,
            };
            ApiEvent::Authenticated(result)
        });
    }

    pub fn fetch_dashboard(&self, epoch: Epoch, seq: u64, token: String) {
        let client = self.client.clone();
        self.spawn(epoch, async move {
            let result = client.admin_dashboard(&token).await;
            ApiEvent::DashboardLoaded { seq, result }
        });
    }

    pub fn browse_events(&self, epoch: Epoch, seq: u64, filters: FilterSet) {
        let client = self.client.clone();
        self.spawn(epoch, async move {
            let result = client.browse_events(&filters).await;
            ApiEvent::BrowseLoaded { seq, result }
        });
    }

    pub fn generate_description(&self, epoch: Epoch, request: DescriptionRequest) {
        let client = self.client.clone();
        self.spawn(epoch, async move {
            ApiEvent::DescriptionGenerated(client.generate_description(&request).await)
        });
    }

    pub fn inspect_image(&self, epoch: Epoch, path: PathBuf) {
        self.spawn(epoch, async move {
            let result = image::inspect(path.clone()).await;
            ApiEvent::ImageInspected { path, result }
        });
    }

    /// Read and encode the image, then send the event.
    pub fn create_event(&self, epoch: Epoch, token: String, event: ValidEvent) {
        let client = self.client.clone();
        self.spawn(epoch, async move {
            ApiEvent::EventCreated(create_event(&client, &token, event).await)
        });
    }
}

async fn create_event(
    client: &ApiClient,
    token: &str,
    event: ValidEvent,
) -> Result<(), CreateEventError> {
    let image = image::read_data_url(&event.image).await?;
    let request = event.into_request(image);
    client.create_event(token, &request).await?;
    Ok(())
}
