use canopy::{auth::REGISTER_FAILED, notice::Notice};
use leptos::{
    component, create_effect, create_server_action, server, view, IntoView, ServerFnError,
    SignalGet, SignalWith, SignalWithUntracked,
};
use leptos_router::{use_navigate, use_query_map, ActionForm};

use super::{server_message, top_bar::TopBar, NoticeBanner};

#[server(Register, "/api")]
pub async fn register(
    username: String,
    email: String,
    password: String,
) -> Result<(), ServerFnError> {
    use crate::components::server_error;
    use crate::state::grove_state;
    use canopy::{api::Backend as _, auth::Registration};
    use tracing::{info, warn};

    let registration = Registration::new(&username, &email, &password);
    registration
        .validate()
        .map_err(|err| server_error(err.to_string()))?;

    grove_state()?
        .backend
        .register(&registration)
        .await
        .map_err(|err| {
            warn!("Registration of {:?} failed: {err}", registration.username);
            server_error(err.user_message(REGISTER_FAILED))
        })?;

    info!("Registered {:?}", registration.username);
    Ok(())
}

#[component]
pub fn RegisterScreen() -> impl IntoView {
    let register = create_server_action::<Register>();
    let pending = register.pending();
    let result = register.value();

    // Landing page and not-found page both send visitors here with a handle in mind
    let query = use_query_map();
    let wanted_handle =
        query.with_untracked(|query| query.get("handle").cloned().unwrap_or_default());

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(Ok(())) = result.get() {
            navigate("/login?registered=1", Default::default());
        }
    });

    let notice = move || {
        result.with(|result| match result {
            Some(Err(err)) => Some(Notice::failure(server_message(err), REGISTER_FAILED)),
            _ => None,
        })
    };

    view! {
        <TopBar/>
        <section class="auth-card">
            <h1>"Claim your Canopy"</h1>
            {move || notice().map(|notice| view! { <NoticeBanner notice=notice/> })}
            <ActionForm action=register>
                <label>
                    "Handle"
                    <div class="handle-input">
                        <span>"canopy/"</span>
                        <input
                            type="text"
                            name="username"
                            value=wanted_handle
                            autocomplete="username"
                            required
                        />
                    </div>
                </label>
                <label>
                    "Email"
                    <input type="email" name="email" autocomplete="email" required/>
                </label>
                <label>
                    "Password"
                    <input type="password" name="password" autocomplete="new-password" required/>
                </label>
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating account..." } else { "Create account" }}
                </button>
            </ActionForm>
            <p class="auth-switch">
                "Already have an account? " <a href="/login">"Log in"</a>
            </p>
        </section>
    }
}
