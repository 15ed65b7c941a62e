use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

use crate::theme::DEFAULT_THEME_ID;

/// Read-only snapshot of a creator's profile as served by the API.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "username")]
    pub handle: String,
    #[serde(default, alias = "name")]
    pub display_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub button_style: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

fn default_theme() -> String {
    DEFAULT_THEME_ID.to_owned()
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Link {
    #[serde(alias = "_id")]
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Profile {
    /// Links visitors may see, in their stored order.
    pub fn active_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|link| link.active)
    }

    pub fn display_name(&self) -> String {
        match self.display_name.trim() {
            "" => format!("@{}", self.handle),
            name => name.to_owned(),
        }
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref().map(str::trim).filter(|bio| !bio.is_empty())
    }

    pub fn avatar(&self) -> Avatar {
        match self.avatar.as_deref().map(str::trim) {
            Some(src) if !src.is_empty() => Avatar::Image(src.to_owned()),
            _ => Avatar::Initials(initials(&self.display_name())),
        }
    }
}

/// Schemes a link button may point at. Anything else (`javascript:`, `data:`)
/// would run in the site's origin.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

impl Link {
    /// Destination with an allowed scheme; bare hosts such as `example.com`
    /// get `https://`. `None` when the link must not be rendered.
    pub fn href(&self) -> Option<String> {
        let url = self.url.trim();
        match Url::parse(url) {
            Ok(parsed) if ALLOWED_SCHEMES.contains(&parsed.scheme()) => Some(url.to_owned()),
            // `example.com:8080/x` parses with `example.com` as its scheme
            Ok(parsed) if parsed.scheme().contains('.') => Some(format!("https://{url}")),
            Ok(_) => None,
            Err(ParseError::RelativeUrlWithoutBase) => Some(format!("https://{url}")),
            Err(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Initials(String),
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.trim_start_matches('@').chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
