//! The format map registry.
//!
//! [`FormatMapRegistry`] is the entry point for consumers. It owns two
//! caches:
//!
//! | Cache | Key | Lifetime of entries |
//! |-------|-----|---------------------|
//! | category maps | [`Category`] | as long as the registry; never evicted |
//! | surface maps | [`SurfaceId`] | until the surface's destroyed event fires |
//!
//! # Resolution
//!
//! [`get_category_map`](FormatMapRegistry::get_category_map) returns the one
//! [`CategoryFormatMap`] for a category, creating it together with its
//! [`CategoryMapUpdater`] on first use. The updater resolves every tag before
//! the map is handed out, so nobody observes a half-filled map.
//!
//! [`get_surface_map`](FormatMapRegistry::get_surface_map) returns the one
//! [`SurfaceFormatMap`] for a live surface. On first use it asks the settings
//! source for the surface's category, resolves that category's map, and
//! subscribes a one-shot handler to the surface's destroyed event. When the
//! surface is destroyed the handler evicts the cache entry and disposes the
//! map, exactly once.
//!
//! # Threading
//!
//! Everything here uses `Rc` and `RefCell` and is therefore `!Send`: a
//! registry and all its maps live on the one thread that created them.
//!
//! # Example
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
//!     Theme::new("default").add(KEYWORD, PropertySet::new().foreground(Color::Blue)),
//! ));
//! let settings = Rc::new(FontSettingsService::new("text editor"));
//! let registry = FormatMapRegistry::new(themes, settings);
//!
//! let surface = TextSurface::new("document");
//! let map = registry.get_surface_map(&surface).unwrap();
//! assert_eq!(map.get(&KEYWORD).foreground_color(), Some(Color::Blue));
//!
//! surface.destroy();
//! assert!(map.is_disposed());
//! assert_eq!(registry.surface_count(), 0);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use formatmap_tags::ClassificationTag;

use crate::category::{Category, CategoryFormatMap};
use crate::source::{RenderingSurface, SettingsSource, SurfaceId, ThemeSource};
use crate::surface_map::SurfaceFormatMap;
use crate::updater::CategoryMapUpdater;

/// Error type for registry operations.
///
/// Both variants are caller mistakes. A failed call leaves the registry
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The category name was empty or only whitespace.
    EmptyCategory,

    /// The surface had already been destroyed.
    SurfaceDestroyed {
        /// The destroyed surface
        surface: SurfaceId,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::EmptyCategory => write!(f, "category name must not be empty"),
            RegistryError::SurfaceDestroyed { surface } => {
                write!(f, "{} has already been destroyed", surface)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

struct CategoryEntry {
    map: Rc<CategoryFormatMap>,
    updater: Rc<CategoryMapUpdater>,
}

struct RegistryState {
    theme: Rc<dyn ThemeSource>,
    settings: Rc<dyn SettingsSource>,
    vocabulary: Rc<[ClassificationTag]>,
    categories: RefCell<HashMap<Category, CategoryEntry>>,
    surfaces: RefCell<HashMap<SurfaceId, Rc<SurfaceFormatMap>>>,
}

impl RegistryState {
    fn category_map(&self, category: Category) -> Rc<CategoryFormatMap> {
        let cached = self
            .categories
            .borrow()
            .get(&category)
            .map(|entry| Rc::clone(&entry.map));
        if let Some(map) = cached {
            return map;
        }

        let map = Rc::new(CategoryFormatMap::new(category.clone()));
        let updater = CategoryMapUpdater::new(
            Rc::clone(&map),
            Rc::clone(&self.theme),
            Rc::clone(&self.settings),
            Rc::clone(&self.vocabulary),
        );
        tracing::debug!(category = %category, "created category format map");

        let mut categories = self.categories.borrow_mut();
        let entry = categories
            .entry(category)
            .or_insert(CategoryEntry { map, updater });
        Rc::clone(&entry.map)
    }

    fn evict_surface(&self, surface: SurfaceId) {
        let removed = self.surfaces.borrow_mut().remove(&surface);
        if let Some(map) = removed {
            map.dispose();
            tracing::debug!(surface = %surface, "evicted surface format map");
        }
    }
}

/// Entry point resolving categories and surfaces to their format maps.
///
/// See the [module documentation](self) for the caching rules.
pub struct FormatMapRegistry {
    state: Rc<RegistryState>,
}

impl FormatMapRegistry {
    /// Creates a registry that resolves the full tag vocabulary.
    pub fn new(theme: Rc<dyn ThemeSource>, settings: Rc<dyn SettingsSource>) -> Self {
        Self::with_vocabulary(theme, settings, formatmap_tags::ALL.iter().cloned())
    }

    /// Creates a registry that resolves only the given tags.
    pub fn with_vocabulary(
        theme: Rc<dyn ThemeSource>,
        settings: Rc<dyn SettingsSource>,
        vocabulary: impl IntoIterator<Item = ClassificationTag>,
    ) -> Self {
        Self {
            state: Rc::new(RegistryState {
                theme,
                settings,
                vocabulary: vocabulary.into_iter().collect(),
                categories: RefCell::new(HashMap::new()),
                surfaces: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Returns the shared format map for `category`, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyCategory`] for a blank category name.
    pub fn get_category_map(
        &self,
        category: impl Into<Category>,
    ) -> Result<Rc<CategoryFormatMap>, RegistryError> {
        let category = category.into();
        if category.is_blank() {
            return Err(RegistryError::EmptyCategory);
        }
        Ok(self.state.category_map(category))
    }

    /// Returns the format map of a live surface, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SurfaceDestroyed`] if the surface is already
    /// destroyed, and [`RegistryError::EmptyCategory`] if the settings source
    /// assigns it a blank category.
    pub fn get_surface_map(
        &self,
        surface: &dyn RenderingSurface,
    ) -> Result<Rc<SurfaceFormatMap>, RegistryError> {
        let id = surface.id();
        if surface.is_destroyed() {
            return Err(RegistryError::SurfaceDestroyed { surface: id });
        }

        let cached = self.state.surfaces.borrow().get(&id).cloned();
        if let Some(map) = cached {
            return Ok(map);
        }

        let category = self.state.settings.category_for(surface);
        if category.is_blank() {
            return Err(RegistryError::EmptyCategory);
        }
        let parent = self.state.category_map(category);
        let map = SurfaceFormatMap::new(id, parent);

        let state = Rc::downgrade(&self.state);
        surface.destroyed().subscribe_once(move |_| {
            if let Some(state) = state.upgrade() {
                state.evict_surface(id);
            }
        });
        self.state.surfaces.borrow_mut().insert(id, Rc::clone(&map));
        tracing::debug!(
            surface = %id,
            kind = surface.kind(),
            category = %map.parent().category(),
            "created surface format map"
        );
        Ok(map)
    }

    /// The updater of a category, if its map has been created.
    pub fn updater(&self, category: &str) -> Option<Rc<CategoryMapUpdater>> {
        self.state
            .categories
            .borrow()
            .get(category)
            .map(|entry| Rc::clone(&entry.updater))
    }

    /// Number of category maps created so far.
    pub fn category_count(&self) -> usize {
        self.state.categories.borrow().len()
    }

    /// Number of live surface maps.
    pub fn surface_count(&self) -> usize {
        self.state.surfaces.borrow().len()
    }

    pub fn contains_surface(&self, surface: SurfaceId) -> bool {
        self.state.surfaces.borrow().contains_key(&surface)
    }

    pub fn theme_source(&self) -> &Rc<dyn ThemeSource> {
        &self.state.theme
    }

    pub fn settings_source(&self) -> &Rc<dyn SettingsSource> {
        &self.state.settings
    }
}

impl fmt::Debug for FormatMapRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatMapRegistry")
            .field("categories", &self.category_count())
            .field("surfaces", &self.surface_count())
            .field("vocabulary", &self.state.vocabulary.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_map::FormatMap;
    use crate::property::PropertySet;
    use crate::settings::FontSettingsService;
    use crate::surface::TextSurface;
    use crate::theme::{Theme, ThemeService};
    use console::Color;
    use formatmap_tags::{COMMENT, KEYWORD};

    fn registry() -> (FormatMapRegistry, Rc<ThemeService>, Rc<FontSettingsService>) {
        let themes = Rc::new(ThemeService::new(
            Theme::new("default").add(KEYWORD, PropertySet::new().foreground(Color::Blue)),
        ));
        let settings = Rc::new(FontSettingsService::new("text editor"));
        settings.route("repl", "repl");
        let registry = FormatMapRegistry::new(themes.clone(), settings.clone());
        (registry, themes, settings)
    }

    #[test]
    fn test_category_map_cached() {
        let (registry, _, _) = registry();
        let first = registry.get_category_map("text editor").unwrap();
        let second = registry
            .get_category_map(String::from("text editor"))
            .unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(registry.category_count(), 1);
    }

    #[test]
    fn test_category_map_resolved_before_return() {
        let (registry, _, _) = registry();
        let map = registry.get_category_map("text editor").unwrap();
        assert_eq!(map.get(&KEYWORD).foreground_color(), Some(Color::Blue));
        assert_eq!(map.properties().len(), formatmap_tags::ALL.len());
        assert_eq!(registry.updater("text editor").unwrap().resolve_count(), 1);
    }

    #[test]
    fn test_blank_category_rejected() {
        let (registry, _, _) = registry();
        assert_eq!(
            registry.get_category_map("").unwrap_err(),
            RegistryError::EmptyCategory
        );
        assert_eq!(
            registry.get_category_map(" \t").unwrap_err(),
            RegistryError::EmptyCategory
        );
        assert_eq!(registry.category_count(), 0);
    }

    #[test]
    fn test_surface_map_cached_until_destroyed() {
        let (registry, _, _) = registry();
        let surface = TextSurface::new("document");
        let first = registry.get_surface_map(&surface).unwrap();
        let second = registry.get_surface_map(&surface).unwrap();
        assert!(Rc::ptr_eq(&first, &second));

        surface.destroy();
        assert!(first.is_disposed());
        assert!(!registry.contains_surface(surface.id()));
        assert_eq!(
            registry.get_surface_map(&surface).unwrap_err(),
            RegistryError::SurfaceDestroyed {
                surface: surface.id()
            }
        );
    }

    #[test]
    fn test_surfaces_share_category_map_by_route() {
        let (registry, _, _) = registry();
        let a = TextSurface::new("document");
        let b = TextSurface::new("document");
        let repl = TextSurface::new("repl");

        let map_a = registry.get_surface_map(&a).unwrap();
        let map_b = registry.get_surface_map(&b).unwrap();
        let map_repl = registry.get_surface_map(&repl).unwrap();

        assert!(!Rc::ptr_eq(&map_a, &map_b));
        assert!(Rc::ptr_eq(map_a.parent(), map_b.parent()));
        assert_eq!(map_repl.parent().category().as_str(), "repl");
        assert_eq!(registry.category_count(), 2);
        assert_eq!(registry.surface_count(), 3);
    }

    #[test]
    fn test_reused_identity_gets_new_map() {
        let (registry, _, _) = registry();
        let id = SurfaceId::new(42);

        let old = TextSurface::with_id(id, "document");
        let old_map = registry.get_surface_map(&old).unwrap();
        old_map.set(COMMENT, PropertySet::new().bold(true));
        old.destroy();

        let fresh = TextSurface::with_id(id, "document");
        let fresh_map = registry.get_surface_map(&fresh).unwrap();
        assert!(!Rc::ptr_eq(&old_map, &fresh_map));
        assert!(fresh_map.get(&COMMENT).is_unset());
    }

    #[test]
    fn test_blank_surface_category_leaves_no_state() {
        let (registry, _, settings) = registry();
        settings.route("broken", "");
        let surface = TextSurface::new("broken");

        assert_eq!(
            registry.get_surface_map(&surface).unwrap_err(),
            RegistryError::EmptyCategory
        );
        assert_eq!(registry.surface_count(), 0);
        assert_eq!(registry.category_count(), 0);
        assert_eq!(surface.destroyed().subscriber_count(), 0);
    }

    #[test]
    fn test_destroy_after_registry_dropped_is_harmless() {
        let (registry, _, _) = registry();
        let surface = TextSurface::new("document");
        let map = registry.get_surface_map(&surface).unwrap();
        drop(registry);
        surface.destroy();
        assert_eq!(map.get(&KEYWORD).foreground_color(), Some(Color::Blue));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RegistryError::EmptyCategory.to_string(),
            "category name must not be empty"
        );
        assert_eq!(
            RegistryError::SurfaceDestroyed {
                surface: SurfaceId::new(3)
            }
            .to_string(),
            "surface#3 has already been destroyed"
        );
    }
}
