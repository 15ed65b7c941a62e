#[cfg(feature = "ssr")]
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
#[cfg(feature = "ssr")]
use axum::{body::Body as AxumBody, http::Request};

#[cfg(feature = "ssr")]
use grove::state::AppState;

#[cfg(feature = "ssr")]
use grove::app::App;

#[cfg(feature = "ssr")]
use leptos_axum::handle_server_fns_with_context;

/// Canopy public site server
#[cfg(feature = "ssr")]
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the profile API, overrides CANOPY_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Address to listen on, overrides the Leptos site address
    #[arg(long)]
    site_addr: Option<std::net::SocketAddr>,
}

#[cfg(feature = "ssr")]
async fn server_fn_handler(
    State(app_state): State<AppState>,
    request: Request<AxumBody>,
) -> impl IntoResponse {
    handle_server_fns_with_context(app_state.provide_grove_state(), request).await
}

#[cfg(feature = "ssr")]
async fn leptos_routes_handler(
    State(app_state): State<AppState>,
    request: Request<AxumBody>,
) -> Response {
    let render = leptos_axum::render_route_with_context(
        app_state.leptos_options.clone(),
        app_state.routes.clone(),
        app_state.provide_grove_state(),
        App,
    );
    render(request).await.into_response()
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use axum::routing::get;
    use axum::Router;
    use canopy::{api::ApiClient, config::Config};
    use clap::Parser;
    use grove::api::api_routes;
    use grove::fileserv::{file_and_error_handler, root_asset_routes};
    use grove::state::GroveState;
    use leptos::get_configuration;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = Config::from_env().context("Invalid configuration")?;
    if let Some(api_url) = &args.api_url {
        config.set_api_url(api_url).context("Invalid --api-url")?;
    }

    // cargo-leptos metadata, overridable through LEPTOS_* env vars
    let conf = get_configuration(None)
        .await
        .context("Failed to read Leptos configuration")?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_addr) = args.site_addr {
        leptos_options.site_addr = site_addr;
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);
    let site_root = leptos_options.site_root.clone();

    let backend = ApiClient::new(&config).context("Failed to build API client")?;
    info!("Using profile API at {}", config.api_url);

    let app_state = AppState {
        leptos_options,
        grove_state: Arc::new(GroveState::new(
            Arc::new(backend),
            config.click_queue_capacity,
        )),
        routes: routes.clone(),
    };

    let app = Router::new()
        .route(
            "/api/*fn_name",
            get(server_fn_handler).post(server_fn_handler),
        )
        .merge(root_asset_routes(&site_root))
        .leptos_routes_with_handler(routes, get(leptos_routes_handler))
        .merge(api_routes())
        .fallback(file_and_error_handler)
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser bundle starts from `grove::hydrate`
}
