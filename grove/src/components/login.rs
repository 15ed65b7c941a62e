use canopy::{
    auth::{LOGIN_FAILED, REGISTERED},
    notice::Notice,
};
use leptos::{
    component, create_effect, create_server_action, logging, server, view, window, IntoView,
    ServerFnError, SignalGet, SignalSet, SignalWith, SignalWithUntracked,
};
use leptos_router::{use_query_map, ActionForm};
use leptos_use::{use_cookie, utils::FromToStringCodec};
use serde::{Deserialize, Serialize};

use super::{server_message, top_bar::TOKEN_COOKIE, top_bar::TopBar, NoticeBanner};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SessionView {
    pub token: String,
    pub destination: String,
}

#[server(Login, "/api")]
pub async fn login(email: String, password: String) -> Result<SessionView, ServerFnError> {
    use crate::components::server_error;
    use crate::state::grove_state;
    use canopy::{api::Backend as _, auth::Credentials};
    use tracing::{info, warn};

    let credentials = Credentials::new(&email, &password);
    credentials
        .validate()
        .map_err(|err| server_error(err.to_string()))?;

    let grove_state = grove_state()?;
    let session = grove_state
        .backend
        .login(&credentials)
        .await
        .map_err(|err| {
            warn!("Login failed: {err}");
            server_error(err.user_message(LOGIN_FAILED))
        })?;

    let destination = session.destination();
    info!("User {:?} logged in, routing to {destination:?}", session.user.username);

    Ok(SessionView {
        token: session.token,
        destination: destination.path().to_owned(),
    })
}

#[component]
pub fn LoginScreen() -> impl IntoView {
    let login = create_server_action::<Login>();
    let pending = login.pending();
    let result = login.value();

    let (_token, set_token) = use_cookie::<String, FromToStringCodec>(TOKEN_COOKIE);

    let query = use_query_map();
    let just_registered = query.with_untracked(|query| query.get("registered").is_some());

    create_effect(move |_| {
        if let Some(Ok(session)) = result.get() {
            set_token.set(Some(session.token.clone()));
            // Both destinations are served outside this app
            if let Err(err) = window().location().set_href(&session.destination) {
                logging::warn!("Redirect to {} failed: {err:?}", session.destination);
            }
        }
    });

    let notice = move || {
        result.with(|result| match result {
            Some(Err(err)) => Some(Notice::failure(server_message(err), LOGIN_FAILED)),
            Some(Ok(_)) => None,
            None => just_registered.then(|| Notice::success(REGISTERED)),
        })
    };

    view! {
        <TopBar/>
        <section class="auth-card">
            <h1>"Welcome back"</h1>
            {move || notice().map(|notice| view! { <NoticeBanner notice=notice/> })}
            <ActionForm action=login>
                <label>
                    "Email"
                    <input type="email" name="email" autocomplete="email" required/>
                </label>
                <label>
                    "Password"
                    <input type="password" name="password" autocomplete="current-password" required/>
                </label>
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Log in" }}
                </button>
            </ActionForm>
            <p class="auth-switch">
                "No account yet? " <a href="/register">"Sign up"</a>
            </p>
        </section>
    }
}
