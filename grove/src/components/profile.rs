use canopy::{
    page::{claim_href, FOOTER_TEXT, NOT_FOUND_TITLE},
    profile::{Avatar, Profile},
    tracking::{activate, ClickSink},
    LinkButton, ProfilePage, ProfileState,
};
use leptos::{
    component, create_resource, ev, logging, server, spawn_local, view, CollectView,
    IntoView, ServerFnError, SignalGet, SignalWith, Suspense,
};
use leptos_router::use_params_map;

/// `None` when the API does not know the handle. View counting happens on the
/// API side as part of this fetch.
#[server(GetProfile, "/api")]
pub async fn get_profile(handle: String) -> Result<Option<Profile>, ServerFnError> {
    use crate::components::server_error;
    use crate::state::grove_state;
    use canopy::api::Backend as _;
    use tracing::warn;

    let grove_state = grove_state()?;

    match grove_state.backend.fetch_profile(&handle).await {
        Ok(profile) => Ok(Some(profile)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => {
            warn!("Profile fetch for {handle:?} failed: {err}");
            Err(server_error("Profile unavailable"))
        }
    }
}

#[server(TrackClick, "/api")]
pub async fn track_click(link_id: String) -> Result<(), ServerFnError> {
    use crate::state::grove_state;

    grove_state()?.tracker.notify(&link_id);
    Ok(())
}

/// Browser-side sink: each click becomes a detached `track_click` call.
struct RemoteClickSink;

impl ClickSink for RemoteClickSink {
    fn notify(&self, link_id: &str) {
        let link_id = link_id.to_owned();
        spawn_local(async move {
            if let Err(err) = track_click(link_id.clone()).await {
                logging::warn!("Click tracking for link {link_id} failed: {err}");
            }
        });
    }
}

#[component]
pub fn ProfileScreen() -> impl IntoView {
    let params = use_params_map();
    let handle = move || params.with(|params| params.get("handle").cloned().unwrap_or_default());

    let profile = create_resource(handle, get_profile);

    let state = move || match profile.get() {
        None => ProfileState::Loading,
        Some(fetched) => ProfileState::settle(&handle(), fetched),
    };

    view! {
        <Suspense fallback=move || view! { <LoadingTree/> }>
            {move || match state() {
                ProfileState::Loading => view! { <LoadingTree/> }.into_view(),
                ProfileState::Found(page) => view! { <Tree page=page/> }.into_view(),
                ProfileState::NotFound { handle } => view! { <TreeNotFound handle=handle/> }.into_view(),
            }}
        </Suspense>
    }
}

#[component]
fn LoadingTree() -> impl IntoView {
    view! {
        <div class="tree-loading" aria-busy="true">
            <span class="spinner"></span>
        </div>
    }
}

#[component]
fn Tree(page: ProfilePage) -> impl IntoView {
    let class = page.class();
    let ProfilePage {
        handle,
        display_name,
        bio,
        avatar,
        buttons,
        ..
    } = page;

    view! {
        <div class=class>
            <div class="mx-auto flex max-w-md flex-col items-center px-4 py-12">
                <TreeAvatar avatar=avatar alt=display_name.clone()/>
                <h1 class="mt-4 text-2xl font-bold">{display_name}</h1>
                <p class="text-sm opacity-75">"@"{handle}</p>
                {bio.map(|bio| view! { <p class="mt-3 text-center">{bio}</p> })}
                <ul class="mt-8 w-full space-y-4">
                    {buttons
                        .into_iter()
                        .map(|button| view! { <li><TreeLink button=button/></li> })
                        .collect_view()}
                </ul>
                <footer class="mt-12 text-xs opacity-75">
                    <a href="/" rel="external">{FOOTER_TEXT}</a>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn TreeAvatar(avatar: Avatar, #[prop(into)] alt: String) -> impl IntoView {
    match avatar {
        Avatar::Image(src) => view! {
            <img class="h-24 w-24 rounded-full object-cover" src=src alt=alt/>
        }
        .into_view(),
        Avatar::Initials(initials) => view! {
            <div class="avatar-initials flex h-24 w-24 items-center justify-center rounded-full text-3xl font-bold">
                {initials}
            </div>
        }
        .into_view(),
    }
}

#[component]
fn TreeLink(button: LinkButton) -> impl IntoView {
    let navigation = button.navigation();
    let title = button.title.clone();
    let class = button.class.clone();

    // No prevent_default: the anchor opens the new context itself, with `rel` applied
    let on_click = move |_: ev::MouseEvent| {
        activate(&button, &RemoteClickSink);
    };

    view! {
        <a
            href=navigation.href
            target=navigation.target
            rel=navigation.rel
            class=class
            on:click=on_click
        >
            {title}
        </a>
    }
}

#[component]
fn TreeNotFound(handle: String) -> impl IntoView {
    let claim = claim_href(&handle);

    view! {
        <div class="tree-not-found flex min-h-screen flex-col items-center justify-center px-4 text-center">
            <h1 class="text-3xl font-bold">{NOT_FOUND_TITLE}</h1>
            <p class="mt-2">"Nobody has claimed @"{handle}" yet. It could be yours."</p>
            <a href=claim class="cta mt-6">"Claim this handle"</a>
            <a href="/" class="mt-4 text-sm underline">"Back home"</a>
        </div>
    }
}
