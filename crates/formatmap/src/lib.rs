//! # Formatmap - classification format maps with theme invalidation
//!
//! Formatmap assigns display properties (colors and font style) to
//! classification tags such as "keyword", "comment" or "static method", and
//! keeps those assignments current as the theme or the user's settings
//! change.
//!
//! ## Two tiers
//!
//! - A [`CategoryFormatMap`] per configuration [`Category`], shared by every
//!   surface of that category and kept resolved by a [`CategoryMapUpdater`].
//! - A [`SurfaceFormatMap`] per rendering surface, reading through to its
//!   category map and holding the surface's private overrides.
//!
//! The [`FormatMapRegistry`] hands both out and caches them. Surface maps
//! are torn down when their surface fires its destroyed event.
//!
//! ## Quick start
//!
//! ```rust
//! use std::rc::Rc;
//! use console::Color;
//! use formatmap::{
//!     FontSettingsService, FormatMap, FormatMapRegistry, PropertySet, TextSurface, Theme,
//!     ThemeService,
//! };
//! use formatmap_tags::KEYWORD;
//!
//! let themes = Rc::new(ThemeService::new(
//!     Theme::new("blue").add(KEYWORD, PropertySet::new().foreground(Color::Blue)),
//! ));
//! themes.add_theme(Theme::new("red").add(KEYWORD, PropertySet::new().foreground(Color::Red)));
//! let settings = Rc::new(FontSettingsService::new("text editor"));
//! let registry = FormatMapRegistry::new(themes.clone(), settings);
//!
//! let editor = TextSurface::new("document");
//! let map = registry.get_surface_map(&editor).unwrap();
//! assert_eq!(map.get(&KEYWORD).foreground_color(), Some(Color::Blue));
//!
//! themes.set_theme("red").unwrap();
//! assert_eq!(map.get(&KEYWORD).foreground_color(), Some(Color::Red));
//! ```
//!
//! ## Loading from a file
//!
//! [`FormatMapConfig`] reads themes, the active theme and category settings
//! from YAML or JSON and builds the services in one step. See the
//! [`config`] module for the file layout.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (cache creation and eviction,
//! resolution passes, theme switches) and installs no subscriber.

pub mod category;
pub mod color;
pub mod config;
pub mod event;
pub mod format_map;
pub mod property;
pub mod registry;
pub mod settings;
pub mod source;
pub mod surface;
mod surface_map;
pub mod theme;
mod updater;

pub use category::{Category, CategoryFormatMap};
pub use color::{color_name, parse_color, rgb_to_ansi256, ColorParseError};
pub use config::{
    CategoriesConfig, ConfigError, ConfiguredServices, FormatMapConfig, ThemeChoiceConfig,
};
pub use event::{Event, SubscriptionId};
pub use format_map::{FormatMap, FormatMapChanged};
pub use property::PropertySet;
pub use registry::{FormatMapRegistry, RegistryError};
pub use settings::FontSettingsService;
pub use source::{
    RenderingSurface, SettingsChanged, SettingsSource, SurfaceDestroyed, SurfaceId, ThemeChanged,
    ThemeSource,
};
pub use surface::TextSurface;
pub use surface_map::SurfaceFormatMap;
pub use theme::{
    set_color_mode_detector, AdaptiveTheme, ColorMode, Theme, ThemeEntry, ThemeError,
    ThemeSelection, ThemeService, ThemeValidationError,
};
pub use updater::CategoryMapUpdater;

pub use formatmap_tags::ClassificationTag;
