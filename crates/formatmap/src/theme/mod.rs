//! Themes and the theme service.
//!
//! This module provides:
//!
//! - [`Theme`]: a named collection of tag definitions with a fluent builder API
//! - [`ThemeEntry`]: a definition that is either concrete properties or an alias
//! - [`AdaptiveTheme`]: a light/dark theme pair chosen by OS color mode
//! - [`ThemeService`]: the switchable active theme, implementing
//!   [`ThemeSource`](crate::ThemeSource)
//!
//! Aliases let fine-grained tags reuse broader definitions, so a theme can
//! style "static method" by pointing it at "instance method", or at a
//! palette name such as "accent" that is not a tag at all.

mod adaptive;
mod error;
mod service;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_color_mode_detector, AdaptiveTheme, ColorMode};
pub use error::{ThemeError, ThemeValidationError};
pub use service::{ThemeSelection, ThemeService};
pub use theme::{Theme, ThemeEntry};
