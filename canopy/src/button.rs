//! Link button styling.
//!
//! A theme's button bundle is a list of [`StyleToken`]s. Corner rounding is a
//! token of its own, so a profile's [`ButtonStyle`] override can swap the shape
//! without touching colors or backgrounds.

use std::str::FromStr;

use strum_macros::{EnumIter, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rounding {
    None,
    Small,
    Medium,
    Large,
    ExtraLarge,
    Full,
}

impl Rounding {
    pub fn class(self) -> &'static str {
        match self {
            Rounding::None => "rounded-none",
            Rounding::Small => "rounded",
            Rounding::Medium => "rounded-md",
            Rounding::Large => "rounded-lg",
            Rounding::ExtraLarge => "rounded-xl",
            Rounding::Full => "rounded-full",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleToken {
    Class(&'static str),
    Rounded(Rounding),
}

impl StyleToken {
    pub fn class(self) -> &'static str {
        match self {
            StyleToken::Class(class) => class,
            StyleToken::Rounded(rounding) => rounding.class(),
        }
    }
}

/// Button part of a theme bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonBase {
    tokens: &'static [StyleToken],
}

impl ButtonBase {
    pub const fn new(tokens: &'static [StyleToken]) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &'static [StyleToken] {
        self.tokens
    }

    /// First rounding token of the bundle, if any.
    pub fn rounding(&self) -> Option<Rounding> {
        self.tokens.iter().find_map(|token| match token {
            StyleToken::Rounded(rounding) => Some(*rounding),
            StyleToken::Class(_) => None,
        })
    }
}

/// Per-profile override of the corner/border treatment of link buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, EnumString)]
pub enum ButtonStyle {
    #[default]
    #[strum(serialize = "default", serialize = "rounded-lg")]
    RoundedLarge,
    #[strum(serialize = "rounded-full")]
    RoundedFull,
    #[strum(serialize = "rounded-none")]
    RoundedNone,
    #[strum(serialize = "brutal")]
    Brutal,
}

impl ButtonStyle {
    /// Absent and unrecognised values both mean [`ButtonStyle::RoundedLarge`].
    pub fn lookup(requested: Option<&str>) -> ButtonStyle {
        requested
            .and_then(|value| ButtonStyle::from_str(value).ok())
            .unwrap_or_default()
    }

    pub fn shape(self) -> Shape {
        match self {
            ButtonStyle::RoundedLarge => Shape::Rounded(Rounding::Large),
            ButtonStyle::RoundedFull => Shape::Rounded(Rounding::Full),
            ButtonStyle::RoundedNone => Shape::Rounded(Rounding::None),
            ButtonStyle::Brutal => Shape::Brutal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Rounded(Rounding),
    /// Square corners with a heavy border and a hard offset shadow.
    Brutal,
}

pub const BRUTAL_BORDER: &str = "border-2 border-black";
pub const BRUTAL_SHADOW: &str = "shadow-[4px_4px_0px_0px_rgba(0,0,0,1)]";

impl Shape {
    pub fn rounding(self) -> Rounding {
        match self {
            Shape::Rounded(rounding) => rounding,
            Shape::Brutal => Rounding::None,
        }
    }

    fn classes(self) -> Vec<&'static str> {
        match self {
            Shape::Rounded(rounding) => vec![rounding.class()],
            Shape::Brutal => vec![Rounding::None.class(), BRUTAL_BORDER, BRUTAL_SHADOW],
        }
    }
}

/// Final look of every link button on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonAppearance {
    pub surface: Vec<&'static str>,
    pub shape: Shape,
}

impl ButtonAppearance {
    pub fn class(&self) -> String {
        self.surface
            .iter()
            .copied()
            .chain(self.shape.classes())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Drops the base bundle's rounding and applies the shape of `requested`.
pub fn resolve(base: &ButtonBase, requested: ButtonStyle) -> ButtonAppearance {
    let surface = base
        .tokens()
        .iter()
        .filter_map(|token| match token {
            StyleToken::Class(class) => Some(*class),
            StyleToken::Rounded(_) => None,
        })
        .collect();

    ButtonAppearance {
        surface,
        shape: requested.shape(),
    }
}
