//! Profile page pipeline: from a fetched snapshot to what gets rendered.

use std::fmt::Display;

use tracing::warn;

use crate::{
    button::{self, ButtonAppearance, ButtonStyle},
    profile::{Avatar, Profile},
    theme::{self, Theme},
    tracking::Navigation,
};

pub const FOOTER_TEXT: &str = "Made with Canopy";
pub const NOT_FOUND_TITLE: &str = "Tree not found";

/// Layout classes every link button carries on top of the theme's look.
const BUTTON_LAYOUT: &str = "block w-full py-3 px-4 text-center font-medium transition";

#[derive(Clone, Debug, PartialEq)]
pub enum ProfileState {
    Loading,
    Found(ProfilePage),
    NotFound { handle: String },
}

impl ProfileState {
    /// Terminal state for a finished fetch. Failures are logged and shown
    /// exactly like a missing profile.
    pub fn settle<E: Display>(handle: &str, fetched: Result<Option<Profile>, E>) -> ProfileState {
        match fetched {
            Ok(Some(profile)) => ProfileState::Found(ProfilePage::build(&profile)),
            Ok(None) => ProfileState::NotFound {
                handle: handle.to_owned(),
            },
            Err(err) => {
                warn!("Failed to load profile {handle:?}: {err}");
                ProfileState::NotFound {
                    handle: handle.to_owned(),
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfilePage {
    pub handle: String,
    pub theme: Theme,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar: Avatar,
    pub appearance: ButtonAppearance,
    pub buttons: Vec<LinkButton>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkButton {
    pub id: String,
    pub title: String,
    pub href: String,
    pub class: String,
}

impl ProfilePage {
    pub fn build(profile: &Profile) -> ProfilePage {
        let theme = theme::resolve(&profile.theme);
        let style = ButtonStyle::lookup(profile.button_style.as_deref());
        let appearance = button::resolve(&theme.button, style);
        let class = format!("{BUTTON_LAYOUT} {}", appearance.class());

        let buttons = profile
            .active_links()
            .filter_map(|link| {
                let Some(href) = link.href() else {
                    warn!("Skipping link {} of {:?}: unsafe url", link.id, profile.handle);
                    return None;
                };
                Some(LinkButton {
                    id: link.id.clone(),
                    title: link.title.clone(),
                    href,
                    class: class.clone(),
                })
            })
            .collect();

        ProfilePage {
            handle: profile.handle.clone(),
            theme,
            display_name: profile.display_name(),
            bio: profile.bio().map(str::to_owned),
            avatar: profile.avatar(),
            appearance,
            buttons,
        }
    }

    pub fn class(&self) -> String {
        format!("min-h-screen {} {}", self.theme.background, self.theme.text)
    }
}

impl LinkButton {
    pub fn navigation(&self) -> Navigation {
        Navigation::new_context(&self.href)
    }
}

/// Register page pre-filled with a handle nobody owns yet.
pub fn claim_href(handle: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(handle.as_bytes()).collect();
    format!("/register?handle={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        button::{Rounding, Shape},
        profile::Link,
        theme::ThemeKind,
    };

    fn alex() -> Profile {
        Profile {
            handle: "alex".into(),
            display_name: "Alex".into(),
            bio: Some("Photographer".into()),
            avatar: Some("https://cdn.example.com/alex.png".into()),
            theme: "sunset".into(),
            button_style: Some("rounded-full".into()),
            links: vec![
                Link {
                    id: "1".into(),
                    url: "https://portfolio.example".into(),
                    title: "Portfolio".into(),
                    active: true,
                },
                Link {
                    id: "2".into(),
                    url: "https://old.example".into(),
                    title: "Old blog".into(),
                    active: false,
                },
                Link {
                    id: "3".into(),
                    url: "shop.example".into(),
                    title: "Shop".into(),
                    active: true,
                },
            ],
        }
    }

    #[test]
    fn alex_renders_two_pill_buttons_in_order() {
        let ProfileState::Found(page) = ProfileState::settle::<String>("alex", Ok(Some(alex())))
        else {
            panic!("expected a found profile");
        };

        let titles: Vec<_> = page.buttons.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Portfolio", "Shop"]);
        assert_eq!(page.appearance.shape, Shape::Rounded(Rounding::Full));
        for button in &page.buttons {
            assert!(button.class.contains("rounded-full"), "{}", button.class);
        }
        assert_eq!(page.buttons[1].href, "https://shop.example");
        assert_eq!(page.theme.kind, ThemeKind::Sunset);
        assert_eq!(page.bio.as_deref(), Some("Photographer"));
    }

    #[test]
    fn script_links_are_not_rendered() {
        let mut profile = alex();
        profile.links.push(Link {
            id: "4".into(),
            url: "javascript:alert(document.cookie)".into(),
            title: "Free stuff".into(),
            active: true,
        });

        let page = ProfilePage::build(&profile);
        let ids: Vec<_> = page.buttons.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn unknown_theme_renders_with_default_theme() {
        let mut profile = alex();
        profile.theme = "vaporwave".into();
        let page = ProfilePage::build(&profile);
        assert_eq!(page.theme, ThemeKind::Default.theme());
        assert!(page.class().contains("bg-gray-100"));
    }

    #[test]
    fn missing_profile_is_not_found() {
        let state = ProfileState::settle::<String>("doesnotexist", Ok(None));
        assert_eq!(
            state,
            ProfileState::NotFound {
                handle: "doesnotexist".into()
            }
        );
    }

    #[test]
    fn fetch_errors_collapse_to_not_found() {
        let state = ProfileState::settle("alex", Err("connection reset by peer"));
        assert_eq!(
            state,
            ProfileState::NotFound {
                handle: "alex".into()
            }
        );
    }

    #[test]
    fn claim_link_encodes_handle() {
        assert_eq!(claim_href("doesnotexist"), "/register?handle=doesnotexist");
        assert_eq!(claim_href("a b&c"), "/register?handle=a+b%26c");
    }
}
