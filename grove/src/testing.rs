//! In-memory backend for exercising routes and server functions.

use std::sync::Arc;

use async_trait::async_trait;
use canopy::{
    api::{ApiError, Backend},
    auth::{Credentials, Registration, Session, User},
    plans::Plan,
    profile::Profile,
};
use leptos::{create_runtime, provide_context, RuntimeId};
use tokio::sync::mpsc;

use crate::state::GroveState;

pub struct FakeBackend {
    pub profile: Result<Profile, ApiError>,
    pub session: Result<Session, ApiError>,
    pub registration: Result<(), ApiError>,
    pub plans: Result<Vec<Plan>, ApiError>,
    clicks: mpsc::UnboundedSender<String>,
}

impl FakeBackend {
    /// Knows nobody, accepts nothing. Tracked clicks come out of the receiver.
    pub fn new() -> (FakeBackend, mpsc::UnboundedReceiver<String>) {
        let (clicks, rx) = mpsc::unbounded_channel();
        let backend = FakeBackend {
            profile: Err(ApiError::NotFound { message: None }),
            session: Err(ApiError::Rejected {
                status: 401,
                message: None,
            }),
            registration: Ok(()),
            plans: Ok(vec![]),
            clicks,
        };
        (backend, rx)
    }

    pub fn into_state(self) -> Arc<GroveState> {
        Arc::new(GroveState::new(Arc::new(self), 8))
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn fetch_profile(&self, _handle: &str) -> Result<Profile, ApiError> {
        self.profile.clone()
    }

    async fn track_click(&self, link_id: &str) -> Result<(), ApiError> {
        self.clicks.send(link_id.to_owned()).ok();
        Ok(())
    }

    async fn login(&self, _credentials: &Credentials) -> Result<Session, ApiError> {
        self.session.clone()
    }

    async fn register(&self, _registration: &Registration) -> Result<(), ApiError> {
        self.registration.clone()
    }

    async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
        self.plans.clone()
    }
}

pub fn session(role: &str) -> Session {
    Session {
        token: "t0k3n".into(),
        user: User {
            id: "u1".into(),
            username: "alex".into(),
            email: "alex@example.com".into(),
            role: role.into(),
        },
    }
}

/// Reactive runtime with the backend in context, the way each request sees it.
/// Dispose it at the end of the test.
pub fn serve(backend: FakeBackend) -> RuntimeId {
    let runtime = create_runtime();
    provide_context(backend.into_state());
    runtime
}
