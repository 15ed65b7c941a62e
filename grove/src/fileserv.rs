use std::path::Path;

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
    Router,
};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::app::App;

/// Files living at the site root. Their paths look like profile handles, so
/// they need explicit routes ahead of `/:handle`.
pub const ROOT_ASSETS: &[&str] = &["robots.txt", "favicon.ico"];

pub fn root_asset_routes<S>(site_root: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    ROOT_ASSETS.iter().fold(Router::new(), |router, name| {
        router.route_service(
            &format!("/{name}"),
            ServeFile::new(Path::new(site_root).join(name)),
        )
    })
}

/// Serves compiled assets from the site root, and renders the app for anything else.
pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();
    match get_static_file(uri, &root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        _ => {
            let handler = leptos_axum::render_app_to_stream(options.to_owned(), App);
            handler(req).await.into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}
