//! Theme registry for public profile pages.
//!
//! The registry is a closed set: every theme is a variant of [`ThemeKind`] and
//! its bundle is spelled out in [`ThemeKind::theme`]. Profiles reference themes
//! by id, and [`ThemeKind::lookup`] maps any id (known or not) to a variant.

use std::str::FromStr;

use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::button::StyleToken::{Class, Rounded};
use crate::button::{ButtonBase, Rounding, StyleToken};

/// Id every unknown theme id falls back to.
pub const DEFAULT_THEME_ID: &str = "default";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ThemeKind {
    #[default]
    Default,
    Dark,
    Ocean,
    Sunset,
    Forest,
    Minimal,
    Neon,
}

/// Immutable style bundle applied to a whole profile page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub background: &'static str,
    pub text: &'static str,
    pub button: ButtonBase,
}

impl ThemeKind {
    /// Total lookup: ids outside the registry resolve to [`ThemeKind::Default`].
    pub fn lookup(id: &str) -> ThemeKind {
        match ThemeKind::from_str(id) {
            Ok(kind) => kind,
            Err(_) => ThemeKind::Default,
        }
    }

    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Default => "Classic",
            ThemeKind::Dark => "Midnight",
            ThemeKind::Ocean => "Ocean",
            ThemeKind::Sunset => "Sunset",
            ThemeKind::Forest => "Forest",
            ThemeKind::Minimal => "Minimal",
            ThemeKind::Neon => "Neon",
        }
    }

    pub fn theme(self) -> Theme {
        let (background, text, button) = match self {
            ThemeKind::Default => ("bg-gray-100", "text-gray-900", DEFAULT_BUTTON),
            ThemeKind::Dark => ("bg-gray-900", "text-white", DARK_BUTTON),
            ThemeKind::Ocean => (
                "bg-gradient-to-b from-cyan-500 to-blue-600",
                "text-white",
                OCEAN_BUTTON,
            ),
            ThemeKind::Sunset => (
                "bg-gradient-to-br from-orange-400 via-pink-500 to-purple-600",
                "text-white",
                SUNSET_BUTTON,
            ),
            ThemeKind::Forest => ("bg-green-800", "text-green-50", FOREST_BUTTON),
            ThemeKind::Minimal => ("bg-white", "text-black", MINIMAL_BUTTON),
            ThemeKind::Neon => ("bg-black", "text-green-400", NEON_BUTTON),
        };

        Theme {
            kind: self,
            background,
            text,
            button: ButtonBase::new(button),
        }
    }
}

const DEFAULT_BUTTON: &[StyleToken] = &[
    Class("bg-white"),
    Class("text-gray-900"),
    Class("hover:bg-gray-50"),
    Class("shadow-sm"),
    Rounded(Rounding::Large),
];

const DARK_BUTTON: &[StyleToken] = &[
    Class("bg-gray-800"),
    Class("text-white"),
    Class("hover:bg-gray-700"),
    Rounded(Rounding::Large),
];

const OCEAN_BUTTON: &[StyleToken] = &[
    Class("bg-white/20"),
    Class("backdrop-blur"),
    Class("text-white"),
    Class("hover:bg-white/30"),
    Rounded(Rounding::ExtraLarge),
];

const SUNSET_BUTTON: &[StyleToken] = &[
    Class("bg-white"),
    Class("text-pink-600"),
    Class("hover:bg-pink-50"),
    Rounded(Rounding::Full),
];

const FOREST_BUTTON: &[StyleToken] = &[
    Class("bg-green-600"),
    Class("text-white"),
    Class("hover:bg-green-500"),
    Rounded(Rounding::Medium),
];

const MINIMAL_BUTTON: &[StyleToken] = &[
    Class("border"),
    Class("border-black"),
    Class("text-black"),
    Class("hover:bg-black"),
    Class("hover:text-white"),
    Rounded(Rounding::None),
];

const NEON_BUTTON: &[StyleToken] = &[
    Class("border"),
    Class("border-green-400"),
    Class("text-green-400"),
    Class("hover:bg-green-400"),
    Class("hover:text-black"),
    Rounded(Rounding::Small),
];

/// Resolves a theme id straight to its bundle.
pub fn resolve(id: &str) -> Theme {
    ThemeKind::lookup(id).theme()
}
