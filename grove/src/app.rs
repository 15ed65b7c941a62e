use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Meta, Stylesheet, Title};
use leptos_router::{Route, Router, Routes};

use crate::components::{
    landing::LandingScreen, login::LoginScreen, pricing::PricingScreen, profile::ProfileScreen,
    register::RegisterScreen, NotFoundScreen,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/grove.css"/>
        <Title text="Canopy - one link for everything you make"/>
        <Meta name="description" content="Share all your links from a single, themed page."/>

        <Router fallback=|| view! { <NotFoundScreen/> }.into_view()>
            <main>
                <Routes>
                    <Route path="/" view=LandingScreen/>
                    <Route path="/login" view=LoginScreen/>
                    <Route path="/register" view=RegisterScreen/>
                    <Route path="/pricing" view=PricingScreen/>
                    <Route path="/:handle" view=ProfileScreen/>
                </Routes>
            </main>
        </Router>
    }
}
