use crate::error::ConfigError;
use std::{fmt, str::FromStr};

/// The root container semantics of a [`Dropdown`](super::Dropdown).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wrapper {
    /// A plain dropdown wrapped in a `div`.
    #[default]
    Default,
    /// A dropdown rendered inside a button group.
    ButtonGroup,
    /// A dropdown rendered as an item of a `nav` list.
    NavItem,
    /// A plain wrapper whose menu renders the default slot verbatim.
    Raw,
}

impl Wrapper {
    const EXPECTED: &'static str = "default | button_group | nav_item | raw";

    /// Returns the string representation.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ButtonGroup => "button_group",
            Self::NavItem => "nav_item",
            Self::Raw => "raw",
        }
    }
}

impl FromStr for Wrapper {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "button_group" => Ok(Self::ButtonGroup),
            "nav_item" => Ok(Self::NavItem),
            "raw" => Ok(Self::Raw),
            _ => Err(invalid_value("wrapper", s, Self::EXPECTED)),
        }
    }
}

/// The direction in which the menu opens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Opens downward.
    #[default]
    None,
    /// Opens to the left of the trigger.
    Left,
    /// Opens to the right of the trigger.
    Right,
    /// Opens above the trigger.
    Up,
}

impl Direction {
    const EXPECTED: &'static str = "none | left | right | up";

    /// Returns the string representation.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
        }
    }

    /// Returns `true` if the direction overrides the default placement.
    #[inline]
    pub fn is_set(self) -> bool {
        self != Self::None
    }

    /// Returns the class which replaces `dropdown` on the root element.
    #[inline]
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Left => Some("dropstart"),
            Self::Right => Some("dropend"),
            Self::Up => Some("dropup"),
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            _ => Err(invalid_value("direction", s, Self::EXPECTED)),
        }
    }
}

/// The size of the trigger buttons.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// Small buttons.
    Small,
    /// Regular buttons.
    #[default]
    Normal,
    /// Large buttons.
    Large,
}

impl ButtonSize {
    const EXPECTED: &'static str = "small | normal | large";

    /// Returns the string representation.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Normal => "normal",
            Self::Large => "large",
        }
    }

    /// Returns the button size class.
    #[inline]
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Small => Some("btn-sm"),
            Self::Normal => None,
            Self::Large => Some("btn-lg"),
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "normal" => Ok(Self::Normal),
            "large" => Ok(Self::Large),
            _ => Err(invalid_value("size", s, Self::EXPECTED)),
        }
    }
}

/// The color palette of the trigger buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// `primary`
    Primary,
    /// `secondary`
    Secondary,
    /// `success`
    Success,
    /// `danger`
    Danger,
    /// `warning`
    Warning,
    /// `info`
    Info,
    /// `light`
    Light,
    /// `dark`
    Dark,
    /// `link`
    Link,
    /// `outline-primary`
    OutlinePrimary,
    /// `outline-secondary`
    OutlineSecondary,
    /// `outline-success`
    OutlineSuccess,
    /// `outline-danger`
    OutlineDanger,
    /// `outline-warning`
    OutlineWarning,
    /// `outline-info`
    OutlineInfo,
    /// `outline-light`
    OutlineLight,
    /// `outline-dark`
    OutlineDark,
}

impl Color {
    const EXPECTED: &'static str = "primary | secondary | success | danger | warning | info \
        | light | dark | link | outline-primary | outline-secondary | outline-success \
        | outline-danger | outline-warning | outline-info | outline-light | outline-dark";

    /// All the colors in the palette.
    pub const ALL: [Color; 17] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Danger,
        Self::Warning,
        Self::Info,
        Self::Light,
        Self::Dark,
        Self::Link,
        Self::OutlinePrimary,
        Self::OutlineSecondary,
        Self::OutlineSuccess,
        Self::OutlineDanger,
        Self::OutlineWarning,
        Self::OutlineInfo,
        Self::OutlineLight,
        Self::OutlineDark,
    ];

    /// Returns the palette name.
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.button_class().trim_start_matches("btn-")
    }

    /// Returns the `btn-{color}` class.
    pub fn button_class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Success => "btn-success",
            Self::Danger => "btn-danger",
            Self::Warning => "btn-warning",
            Self::Info => "btn-info",
            Self::Light => "btn-light",
            Self::Dark => "btn-dark",
            Self::Link => "btn-link",
            Self::OutlinePrimary => "btn-outline-primary",
            Self::OutlineSecondary => "btn-outline-secondary",
            Self::OutlineSuccess => "btn-outline-success",
            Self::OutlineDanger => "btn-outline-danger",
            Self::OutlineWarning => "btn-outline-warning",
            Self::OutlineInfo => "btn-outline-info",
            Self::OutlineLight => "btn-outline-light",
            Self::OutlineDark => "btn-outline-dark",
        }
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| invalid_value("color", s, Self::EXPECTED))
    }
}

macro_rules! impl_display {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display!(Wrapper, Direction, ButtonSize, Color);

fn invalid_value(field: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        value: value.to_owned(),
        expected,
    }
}
