use super::variant::{ButtonSize, Color, Direction, Wrapper};
use crate::{class::Class, error::ConfigError, SharedString};
use serde_json::{Map, Value};

/// A fragment rendered inside the root element of a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The primary trigger showing the label.
    Toggle,
    /// The caret-only trigger in split mode.
    SplitToggle,
    /// The menu container.
    Menu,
}

/// Validated properties of a [`Dropdown`](super::Dropdown).
///
/// The wrapper is normalized on every change: a split dropdown is always
/// rendered as a [`Wrapper::ButtonGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownConfig {
    /// Component id.
    id: SharedString,
    /// Label of the primary trigger.
    label: SharedString,
    /// Effective wrapper.
    wrapper: Wrapper,
    /// Direction override.
    direction: Direction,
    /// Renders the primary trigger as a button.
    button: bool,
    /// Button color.
    color: Option<Color>,
    /// Button size.
    size: ButtonSize,
    /// Split mode.
    split: bool,
    /// Dark menu.
    dark: bool,
    /// Active triggers.
    active: bool,
}

impl DropdownConfig {
    /// Creates a new instance with the default settings.
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            wrapper: Wrapper::default(),
            direction: Direction::default(),
            button: true,
            color: None,
            size: ButtonSize::default(),
            split: false,
            dark: false,
            active: false,
        }
    }

    /// Loads the config from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let table = s.parse::<toml::Table>()?;
        let value =
            serde_json::to_value(table).map_err(|err| ConfigError::Parse(err.to_string()))?;
        if let Value::Object(map) = value {
            let config = Self::try_from(&map)?;
            tracing::debug!(id = config.id(), "dropdown config loaded from TOML");
            Ok(config)
        } else {
            Err(ConfigError::Parse("the root should be a table".to_owned()))
        }
    }

    /// Sets the wrapper variant. It has no effect in split mode.
    #[inline]
    pub fn with_wrapper(mut self, wrapper: Wrapper) -> Self {
        self.wrapper = wrapper;
        self.normalized()
    }

    /// Sets the direction override.
    #[inline]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets whether the primary trigger is rendered as a button.
    #[inline]
    pub fn with_button(mut self, button: bool) -> Self {
        self.button = button;
        self
    }

    /// Sets the button color.
    #[inline]
    pub fn with_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the button size.
    #[inline]
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Enables or disables the split mode.
    #[inline]
    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self.normalized()
    }

    /// Sets whether the menu is dark.
    #[inline]
    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    /// Sets whether the triggers are active.
    #[inline]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Checks the required properties.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::MissingField("id"));
        }
        if self.label.trim().is_empty() {
            return Err(ConfigError::MissingField("label"));
        }
        Ok(())
    }

    /// Returns the component id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the effective wrapper variant.
    #[inline]
    pub fn wrapper(&self) -> Wrapper {
        self.wrapper
    }

    /// Returns the direction override.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if the primary trigger is rendered as a button.
    #[inline]
    pub fn is_button(&self) -> bool {
        self.button
    }

    /// Returns the button color.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the button size.
    #[inline]
    pub fn size(&self) -> ButtonSize {
        self.size
    }

    /// Returns `true` in split mode.
    #[inline]
    pub fn is_split(&self) -> bool {
        self.split
    }

    /// Returns `true` if the menu is dark.
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Returns `true` if the triggers are active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the element id of the primary trigger.
    #[inline]
    pub fn toggle_id(&self) -> String {
        format!("{}dropdown", self.id)
    }

    /// Returns the element id of the split trigger.
    #[inline]
    pub fn split_toggle_id(&self) -> String {
        format!("{}dropdown-split", self.id)
    }

    /// Returns the fragments to render inside the root element, in order.
    pub fn sections(&self) -> &'static [Section] {
        match (self.split, self.direction) {
            (true, Direction::Left) => &[Section::SplitToggle, Section::Menu, Section::Toggle],
            (true, _) => &[Section::Toggle, Section::SplitToggle, Section::Menu],
            (false, _) => &[Section::Toggle, Section::Menu],
        }
    }

    /// Returns the classes of the root element.
    pub fn root_class(&self) -> Class {
        let wrapper = self.wrapper;
        let direction = self.direction;
        let mut class = Class::with_conditions([
            (wrapper == Wrapper::NavItem, "nav-item"),
            (wrapper != Wrapper::ButtonGroup && !direction.is_set(), "dropdown"),
        ]);
        if let Some(direction) = direction.class() {
            class.add(direction);
        }
        class.add_if(wrapper == Wrapper::ButtonGroup || self.split, "btn-group");
        class
    }

    /// Returns the classes of the primary trigger.
    pub fn toggle_class(&self) -> Class {
        let mut class = Class::with_conditions([
            (!self.split, "dropdown-toggle"),
            (self.wrapper == Wrapper::NavItem, "nav-link"),
            (self.active, "active"),
        ]);
        if self.button {
            class.add("btn");
            self.add_button_classes(&mut class);
        }
        class
    }

    /// Returns the classes of the split trigger.
    pub fn split_toggle_class(&self) -> Class {
        let mut class = Class::new("btn dropdown-toggle dropdown-toggle-split");
        class.add_if(self.active, "active");
        self.add_button_classes(&mut class);
        class
    }

    /// Returns the classes of the menu container.
    pub fn menu_class(&self) -> Class {
        Class::with_conditions([(true, "dropdown-menu"), (self.dark, "dropdown-menu-dark")])
    }

    fn add_button_classes(&self, class: &mut Class) {
        if let Some(color) = self.color {
            class.add(color.button_class());
        }
        if let Some(size) = self.size.class() {
            class.add(size);
        }
    }

    fn normalized(mut self) -> Self {
        if self.split {
            self.wrapper = Wrapper::ButtonGroup;
        }
        self
    }
}

impl TryFrom<&Map<String, Value>> for DropdownConfig {
    type Error = ConfigError;

    fn try_from(map: &Map<String, Value>) -> Result<Self, Self::Error> {
        let id = parse_str(map, "id")?.ok_or(ConfigError::MissingField("id"))?;
        let label = parse_str(map, "label")?.ok_or(ConfigError::MissingField("label"))?;
        let mut config = Self::new(id.to_owned(), label.to_owned());
        if let Some(wrapper) = parse_str(map, "wrapper")? {
            config.wrapper = wrapper.parse()?;
        }
        if let Some(direction) = parse_str(map, "direction")? {
            config.direction = direction.parse()?;
        }
        if let Some(button) = parse_bool(map, "button")? {
            config.button = button;
        }
        if let Some(color) = parse_str(map, "color")? {
            config.color = Some(color.parse()?);
        }
        if let Some(size) = parse_str(map, "size")? {
            config.size = size.parse()?;
        }
        if let Some(split) = parse_bool(map, "split")? {
            config.split = split;
        }
        if let Some(dark) = parse_bool(map, "dark")? {
            config.dark = dark;
        }
        if let Some(active) = parse_bool(map, "active")? {
            config.active = active;
        }

        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }
}

/// Extracts an optional string value. A `null` value is treated as absent.
fn parse_str<'a>(
    map: &'a Map<String, Value>,
    key: &'static str,
) -> Result<Option<&'a str>, ConfigError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ConfigError::InvalidType {
            field: key,
            expected: "a string",
        }),
    }
}

/// Extracts an optional boolean value. A `null` value is treated as absent.
fn parse_bool(map: &Map<String, Value>, key: &'static str) -> Result<Option<bool>, ConfigError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(ConfigError::InvalidType {
            field: key,
            expected: "a boolean",
        }),
    }
}
