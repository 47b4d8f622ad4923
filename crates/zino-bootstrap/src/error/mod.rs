//! Configuration errors for components.

use thiserror::Error;

/// An error raised when a component is configured with invalid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required property is absent or blank.
    #[error("missing required property `{0}`")]
    MissingField(&'static str),
    /// An enumerated property has a value outside of its allowed set.
    #[error("invalid value `{value}` for property `{field}`, expected one of: {expected}")]
    InvalidValue {
        /// Property name.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// The allowed values.
        expected: &'static str,
    },
    /// A property has a value of the wrong type.
    #[error("property `{field}` should be {expected}")]
    InvalidType {
        /// Property name.
        field: &'static str,
        /// The expected type.
        expected: &'static str,
    },
    /// The configuration source can not be parsed.
    #[error("fail to parse the component config: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Returns the property name associated with the error if there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(field)
            | Self::InvalidValue { field, .. }
            | Self::InvalidType { field, .. } => Some(*field),
            Self::Parse(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    #[inline]
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
