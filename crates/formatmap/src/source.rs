//! Interfaces to the collaborators the format maps depend on.
//!
//! The registry never owns themes, settings or surfaces. It reads them
//! through these traits and reacts to their events. Reference
//! implementations live in [`crate::theme`], [`crate::settings`] and
//! [`crate::surface`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use formatmap_tags::ClassificationTag;

use crate::category::Category;
use crate::event::Event;
use crate::property::PropertySet;

/// Raised by a [`ThemeSource`] when the active theme changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeChanged {
    /// Name of the theme that is now active.
    pub theme: String,
}

/// Raised by a [`SettingsSource`] when the settings of one category change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsChanged {
    pub category: Category,
}

/// Raised once by a [`RenderingSurface`] when it is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceDestroyed {
    pub surface: SurfaceId,
}

/// Supplies theme definitions for classification tags.
pub trait ThemeSource {
    /// Name of the currently active theme.
    fn theme_name(&self) -> String;

    /// The active theme's properties for `tag`, or `None` if it has no
    /// definition.
    fn definition(&self, tag: &ClassificationTag) -> Option<PropertySet>;

    fn theme_changed(&self) -> &Event<ThemeChanged>;
}

/// Supplies categories for surfaces and per-category overrides.
pub trait SettingsSource {
    /// The category whose settings apply to `surface`.
    fn category_for(&self, surface: &dyn RenderingSurface) -> Category;

    /// The override for `tag` in `category`, layered over the theme's
    /// definition.
    fn override_for(&self, category: &Category, tag: &ClassificationTag) -> Option<PropertySet>;

    fn settings_changed(&self) -> &Event<SettingsChanged>;
}

/// A consumer that displays classified text.
pub trait RenderingSurface {
    /// Identity used as the cache key. Stable for the surface's lifetime.
    fn id(&self) -> SurfaceId;

    /// What sort of surface this is ("text editor", "repl", ...). Settings
    /// sources use it to pick a category.
    fn kind(&self) -> &str;

    fn is_destroyed(&self) -> bool;

    /// Fires exactly once, when the surface is destroyed.
    fn destroyed(&self) -> &Event<SurfaceDestroyed>;
}

/// Identity of a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

impl SurfaceId {
    /// Wraps a caller-chosen id. Ids may be reused once a surface is gone.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocates an id not handed out by `next` before in this process.
    pub fn next() -> Self {
        Self(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}
