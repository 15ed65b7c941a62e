use leptos::SignalSet;
use leptos::SignalWith;
use leptos::{component, view, IntoView};
use leptos_use::{use_cookie, utils::FromToStringCodec};

pub const TOKEN_COOKIE: &str = "token";

#[component]
pub fn TopBar() -> impl IntoView {
    let (token, set_token) = use_cookie::<String, FromToStringCodec>(TOKEN_COOKIE);

    let account_area = move || {
        token.with(|val| if val.is_some() {
            view! {
                <div class="account-area">
                    <a href="/dashboard" rel="external">"Dashboard"</a>
                    <button on:click=move |_| set_token.set(None)>"Logout"</button>
                </div>
            }
        } else {
            view! {
                <div class="account-area">
                    <a href="/login">"Log in"</a>
                    <a href="/register" class="cta">"Sign up free"</a>
                </div>
            }
        })
    };

    view! {
        <nav class="top-bar">
            <a href="/" class="brand">"Canopy"</a>
            <a href="/pricing">"Pricing"</a>
            { account_area }
        </nav>
    }
}
