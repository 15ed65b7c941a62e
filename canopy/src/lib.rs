pub mod api;
pub mod auth;
pub mod button;
#[cfg(feature = "client")]
pub mod config;
pub mod notice;
pub mod page;
pub mod plans;
pub mod profile;
pub mod theme;
pub mod tracking;

pub use button::{ButtonAppearance, ButtonStyle};
pub use page::{LinkButton, ProfilePage, ProfileState};
pub use profile::{Link, Profile};
pub use theme::{Theme, ThemeKind};

// Route segments owned by the site itself, so they can never be claimed as handles
pub const RESERVED_HANDLES: &[&str] = &[
    "login",
    "register",
    "pricing",
    "admin",
    "dashboard",
    "api",
    "pkg",
    "healthz",
    "click",
    "robots.txt",
    "favicon.ico",
];
