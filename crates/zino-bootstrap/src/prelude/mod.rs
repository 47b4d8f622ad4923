//! Re-exports of components and common types.

pub use crate::{
    class::Class,
    error::ConfigError,
    navigation::{ButtonSize, Color, Direction, Dropdown, DropdownConfig, Wrapper},
};
