#![doc = include_str!("../README.md")]
#![doc(html_favicon_url = "https://zino.cc/assets/zino-logo.png")]
#![doc(html_logo_url = "https://zino.cc/assets/zino-logo.svg")]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]

pub mod class;
pub mod error;
pub mod navigation;
pub mod prelude;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;
