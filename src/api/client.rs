use super::error::ApiError;
use super::models::*;
use crate::config::model::ApiConfig;
use crate::events::filters::FilterSet;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const ADMIN_REGISTER: &str = "/api/admin/register/";
pub const ADMIN_LOGIN: &str = "/api/login/";
pub const ADMIN_DASHBOARD: &str = "/api/admin/dashboard/";
pub const ADMIN_CREATE_EVENT: &str = "/api/admin/create-event/";
pub const GENERATE_DESCRIPTION: &str = "/api/events/generate-description/";
pub const BROWSE_EVENTS: &str = "/api/events/browse/";
pub const USER_REGISTER: &str = "/api/user/register/";
pub const USER_LOGIN: &str = "/api/user/login/";

/// HTTP client for the Event Hive API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        let base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Url(format!("{}: {}", config.base_url, e)))?;
        Ok(Self { http, base })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Url(format!("{}: {}", path, e)))
    }

    /// Browse URL with one query parameter per non-default filter.
    pub fn browse_url(&self, filters: &FilterSet) -> Result<Url, ApiError> {
        let mut url = self.endpoint(BROWSE_EVENTS)?;
        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    pub async fn admin_register(&self, req: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        let url = self.endpoint(ADMIN_REGISTER)?;
        self.send(self.http.post(url).json(req)).await
    }

    pub async fn admin_login(&self, req: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let url = self.endpoint(ADMIN_LOGIN)?;
        self.send(self.http.post(url).json(req)).await
    }

    pub async fn user_register(&self, req: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        let url = self.endpoint(USER_REGISTER)?;
        self.send(self.http.post(url).json(req)).await
    }

    pub async fn user_login(&self, req: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let url = self.endpoint(USER_LOGIN)?;
        self.send(self.http.post(url).json(req)).await
    }

    pub async fn admin_dashboard(&self, token: &str) -> Result<Vec<Event>, ApiError> {
        let url = self.endpoint(ADMIN_DASHBOARD)?;
        let resp: EventsResponse = self.send(self.http.get(url).bearer_auth(token)).await?;
        Ok(resp.events)
    }

    pub async fn create_event(&self, token: &str, req: &CreateEventRequest) -> Result<(), ApiError> {
        let url = self.endpoint(ADMIN_CREATE_EVENT)?;
        let _: serde_json::Value = self
            .send(self.http.post(url).bearer_auth(token).json(req))
            .await?;
        Ok(())
    }

    pub async fn generate_description(&self, req: &DescriptionRequest) -> Result<String, ApiError> {
        let url = self.endpoint(GENERATE_DESCRIPTION)?;
        let resp: DescriptionResponse = self.send(self.http.post(url).json(req)).await?;
        Ok(resp.description)
    }

    pub async fn browse_events(&self, filters: &FilterSet) -> Result<Vec<Event>, ApiError> {
        let url = self.browse_url(filters)?;
        let resp: EventsResponse = self.send(self.http.get(url)).await?;
        Ok(resp.events)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.bytes().await?;
        debug!(%status, path = %url, bytes = body.len(), "API response");

        if !status.is_success() {
            return Err(ApiError::from_response(status, &body));
        }
        // Some endpoints answer 201 with an empty body.
        let body: &[u8] = if body.is_empty() { b"null" } else { &body };
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
