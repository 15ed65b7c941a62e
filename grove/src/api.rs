use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use canopy::tracking::ClickSink as _;

use crate::state::GroveState;

/// Plain HTTP endpoints next to the Leptos server functions.
///
/// `/click/:link_id` accepts `navigator.sendBeacon` style pings and answers
/// before the API has heard about the click.
pub fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Arc<GroveState>: FromRef<S>,
{
    async fn health() -> &'static str {
        "ok"
    }

    Router::new()
        .route("/healthz", get(health))
        .route("/click/:link_id", post(click_beacon))
}

async fn click_beacon(
    State(state): State<Arc<GroveState>>,
    Path(link_id): Path<String>,
) -> StatusCode {
    state.tracker.notify(&link_id);
    StatusCode::ACCEPTED
}
