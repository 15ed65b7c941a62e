//! Boundary to the external HTTP API.

mod error;

#[cfg(feature = "client")]
mod client;

pub use error::ApiError;

#[cfg(feature = "client")]
pub use client::ApiClient;

#[cfg(feature = "client")]
pub use backend::Backend;

#[cfg(feature = "client")]
mod backend {
    use async_trait::async_trait;

    use super::ApiError;
    use crate::{
        auth::{Credentials, Registration, Session},
        plans::Plan,
        profile::Profile,
    };

    /// Everything the site asks of the remote API.
    #[async_trait]
    pub trait Backend: Send + Sync {
        /// Profile snapshot for a handle (case-sensitive). Page-view counting
        /// happens on the API side as part of this request.
        async fn fetch_profile(&self, handle: &str) -> Result<Profile, ApiError>;

        /// Fire-and-forget click notification; the response body is ignored.
        async fn track_click(&self, link_id: &str) -> Result<(), ApiError>;

        async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;

        async fn register(&self, registration: &Registration) -> Result<(), ApiError>;

        async fn list_plans(&self) -> Result<Vec<Plan>, ApiError>;
    }
}
