use canopy::{
    button::{resolve, ButtonStyle},
    ThemeKind,
};
use leptos::{component, view, CollectView, IntoView};
use strum::IntoEnumIterator;

use super::top_bar::TopBar;

const FEATURES: &[(&str, &str)] = &[
    ("One link for everything", "Share a single address that points at all of your content."),
    ("Themes that fit you", "Pick a look for your page and change it whenever you like."),
    ("Know what works", "See which links your visitors actually click."),
];

#[component]
pub fn LandingScreen() -> impl IntoView {
    view! {
        <TopBar/>
        <main class="landing">
            <section class="hero">
                <h1>"Everything you are, in one simple link"</h1>
                <p>"Create a page for your links in seconds. Free forever for the basics."</p>
                <ClaimForm/>
            </section>
            <section class="features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| view! {
                        <article class="feature">
                            <h2>{*title}</h2>
                            <p>{*body}</p>
                        </article>
                    })
                    .collect_view()}
            </section>
            <ThemeShowcase/>
        </main>
    }
}

/// Submits to the registration page with the handle prefilled.
#[component]
fn ClaimForm() -> impl IntoView {
    view! {
        <form class="claim-form" action="/register" method="get">
            <span>"canopy/"</span>
            <input type="text" name="handle" placeholder="yourname" required/>
            <button type="submit" class="cta">"Claim your Canopy"</button>
        </form>
    }
}

#[component]
fn ThemeShowcase() -> impl IntoView {
    view! {
        <section class="theme-showcase">
            <h2>"Make it yours"</h2>
            <ul class="grid grid-cols-2 gap-4 md:grid-cols-4">
                {ThemeKind::iter()
                    .map(|kind| {
                        let theme = kind.theme();
                        let class = format!("theme-swatch {} {}", theme.background, theme.text);
                        let button = resolve(&theme.button, ButtonStyle::default()).class();
                        view! {
                            <li class=class>
                                <span class="font-semibold">{kind.label()}</span>
                                <span class=button>"My link"</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
