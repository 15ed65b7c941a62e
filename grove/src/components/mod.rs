use canopy::notice::Notice;
use leptos::{component, view, IntoView, ServerFnError};

use top_bar::TopBar;

pub mod landing;
pub mod login;
pub mod pricing;
pub mod profile;
pub mod register;
pub mod top_bar;

#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    view! {
        <div class=notice.class() role="alert">
            {notice.message}
        </div>
    }
}

#[component]
pub fn NotFoundScreen() -> impl IntoView {
    view! {
        <TopBar/>
        <section class="page-not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back home"</a>
        </section>
    }
}

/// Message a server function chose to show the visitor, if it chose one.
pub fn server_message(err: &ServerFnError) -> Option<&str> {
    match err {
        ServerFnError::ServerError(message) => Some(message.as_str()),
        _ => None,
    }
}

#[cfg(feature = "ssr")]
pub fn server_error(message: impl Into<String>) -> ServerFnError {
    ServerFnError::ServerError(message.into())
}
