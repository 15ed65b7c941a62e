use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{ApiError, Backend};
use crate::{
    auth::{Credentials, Registration, Session},
    config::Config,
    plans::Plan,
    profile::Profile,
};

/// Thin JSON client over the remote API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("canopy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base: config.api_url.clone(),
        })
    }

    /// `segments` are appended to the base URL, each one percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        debug!("{method} {url}");
        self.http.request(method, url)
    }

    async fn checked(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let body = Self::checked(request).await?.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| ApiError::Malformed(err.to_string()))
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn fetch_profile(&self, handle: &str) -> Result<Profile, ApiError> {
        Self::json(self.request(Method::GET, &["profiles", handle])).await
    }

    async fn track_click(&self, link_id: &str) -> Result<(), ApiError> {
        Self::checked(self.request(Method::POST, &["links", link_id, "click"])).await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        Self::json(self.request(Method::POST, &["auth", "login"]).json(credentials)).await
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        Self::checked(self.request(Method::POST, &["auth", "register"]).json(registration))
            .await?;
        Ok(())
    }

    async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
        Self::json(self.request(Method::GET, &["plans"])).await
    }
}
