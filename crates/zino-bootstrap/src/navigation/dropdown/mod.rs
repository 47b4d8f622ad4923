use crate::{class::Class, error::ConfigError, SharedString};
use dioxus::prelude::*;

mod config;
mod variant;

pub use config::{DropdownConfig, Section};
pub use variant::{ButtonSize, Color, Direction, Wrapper};

/// A toggleable menu for displaying lists of links and actions,
/// rendered as a plain dropdown, a button group, or a navigation item.
pub fn Dropdown(props: DropdownProps) -> Element {
    let config = DropdownConfig::try_from(&props).inspect_err(|err| {
        tracing::warn!(id = &*props.id, "fail to render the dropdown: {err}");
    })?;
    let mut root_class = config.root_class();
    root_class.extend(&props.class);

    let content = rsx! {
        for section in config.sections() {
            {
                match section {
                    Section::Toggle => render_toggle(&config),
                    Section::SplitToggle => render_split_toggle(&config),
                    Section::Menu => render_menu(&config, &props),
                }
            }
        }
    };
    if config.wrapper() == Wrapper::NavItem {
        rsx! {
            li {
                id: config.id(),
                class: root_class,
                "data-bs-toggle": "dropdown",
                { content }
            }
        }
    } else {
        rsx! {
            div {
                id: config.id(),
                class: root_class,
                "data-bs-toggle": "dropdown",
                { content }
            }
        }
    }
}

/// The [`Dropdown`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownProps {
    /// The element id, also used to derive the ids of the triggers.
    #[props(into)]
    pub id: SharedString,
    /// The label of the primary trigger.
    #[props(into)]
    pub label: SharedString,
    /// Additional classes for the root element.
    #[props(into, default)]
    pub class: Class,
    /// The wrapper variant: `default` | `button_group` | `nav_item` | `raw`.
    /// It is always `button_group` in split mode.
    #[props(default)]
    pub wrapper: Wrapper,
    /// The direction in which the menu opens: `none` | `left` | `right` | `up`.
    #[props(default)]
    pub direction: Direction,
    /// A flag to indicate whether the primary trigger is rendered as a button.
    #[props(default = true)]
    pub button: bool,
    /// The button color.
    pub color: Option<Color>,
    /// The button size: `small` | `normal` | `large`.
    #[props(default)]
    pub size: ButtonSize,
    /// A flag to indicate whether the dropdown has a separate caret-only trigger.
    #[props(default)]
    pub split: bool,
    /// A flag to indicate whether the menu uses the dark variant.
    #[props(default)]
    pub dark: bool,
    /// A flag to indicate whether the triggers are active.
    #[props(default)]
    pub active: bool,
    /// The menu items to be rendered, each wrapped in a list item.
    #[props(default)]
    pub items: Vec<Element>,
    /// The menu content rendered verbatim for the `raw` wrapper.
    #[props(default = VNode::empty())]
    children: Element,
}

impl TryFrom<&DropdownProps> for DropdownConfig {
    type Error = ConfigError;

    fn try_from(props: &DropdownProps) -> Result<Self, Self::Error> {
        let config = DropdownConfig::new(props.id.clone(), props.label.clone())
            .with_wrapper(props.wrapper)
            .with_direction(props.direction)
            .with_button(props.button)
            .with_color(props.color)
            .with_size(props.size)
            .with_split(props.split)
            .with_dark(props.dark)
            .with_active(props.active);
        config.validate()?;
        Ok(config)
    }
}

/// Renders the primary trigger showing the label.
fn render_toggle(config: &DropdownConfig) -> Element {
    let split = config.is_split();
    rsx! {
        a {
            id: config.toggle_id(),
            class: config.toggle_class(),
            href: if !split { "#" },
            role: "button",
            aria_expanded: if !split { "false" },
            "{config.label()}"
        }
    }
}

/// Renders the caret-only trigger in split mode.
fn render_split_toggle(config: &DropdownConfig) -> Element {
    rsx! {
        button {
            r#type: "button",
            id: config.split_toggle_id(),
            class: config.split_toggle_class(),
            "data-bs-toggle": "dropdown",
            aria_expanded: "false",
            span {
                class: "visually-hidden",
                "Toggle Dropdown"
            }
        }
    }
}

/// Renders the menu container holding either the items or the raw content.
fn render_menu(config: &DropdownConfig, props: &DropdownProps) -> Element {
    if config.wrapper() == Wrapper::Raw {
        rsx! {
            div {
                class: config.menu_class(),
                "data-bs-popper": "static",
                aria_labelledby: config.id(),
                { &props.children }
            }
        }
    } else {
        rsx! {
            ul {
                class: config.menu_class(),
                "data-bs-popper": "static",
                aria_labelledby: config.id(),
                for (index, item) in props.items.iter().enumerate() {
                    li {
                        key: "{index}",
                        { item }
                    }
                }
            }
        }
    }
}
