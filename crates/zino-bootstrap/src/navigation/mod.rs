//! Navigation menus.

mod dropdown;

pub use dropdown::{
    ButtonSize, Color, Direction, Dropdown, DropdownConfig, DropdownProps, Section, Wrapper,
};
