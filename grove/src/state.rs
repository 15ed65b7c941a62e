use std::sync::Arc;

use axum::extract::FromRef;
use canopy::{api::Backend, tracking::ClickTracker};
use leptos::{provide_context, use_context, LeptosOptions, ServerFnError};
use leptos_router::RouteListing;

/// Router state. The Leptos handlers pull `leptos_options` out of it, the
/// beacon routes pull `grove_state`.
#[derive(FromRef, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub grove_state: Arc<GroveState>,
    pub routes: Vec<RouteListing>,
}

#[derive(Clone)]
pub struct GroveState {
    pub backend: Arc<dyn Backend>,
    pub tracker: ClickTracker,
}

impl GroveState {
    /// Must be called inside a tokio runtime: the click tracker worker starts here.
    pub fn new(backend: Arc<dyn Backend>, click_queue_capacity: usize) -> GroveState {
        let tracker = ClickTracker::spawn(backend.clone(), click_queue_capacity);
        GroveState { backend, tracker }
    }
}

impl AppState {
    /// Context every server function and SSR render runs with.
    pub fn provide_grove_state(&self) -> impl Fn() + Clone + Send + 'static {
        let grove_state = self.grove_state.clone();
        move || provide_context(grove_state.clone())
    }
}

pub fn grove_state() -> Result<Arc<GroveState>, ServerFnError> {
    use_context::<Arc<GroveState>>()
        .ok_or_else(|| ServerFnError::ServerError("GroveState missing.".into()))
}
