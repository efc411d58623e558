//! Per-category settings: surface routing and tag overrides.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use formatmap_tags::ClassificationTag;

use crate::category::Category;
use crate::event::Event;
use crate::property::PropertySet;
use crate::source::{RenderingSurface, SettingsChanged, SettingsSource};

/// In-memory [`SettingsSource`].
///
/// Surfaces are assigned a category by their [`kind`](RenderingSurface::kind):
/// kinds registered with [`route`](FontSettingsService::route) get their
/// category, everything else gets the default category.
///
/// Each category may override individual tags. Overrides are layered over
/// the theme's definition attribute by attribute, so an override that only
/// sets `italic` keeps the theme's colors. Every mutation raises
/// [`SettingsChanged`] for the one category it touched.
#[derive(Debug)]
pub struct FontSettingsService {
    default_category: Category,
    routes: RefCell<HashMap<String, Category>>,
    overrides: RefCell<HashMap<Category, BTreeMap<ClassificationTag, PropertySet>>>,
    changed: Event<SettingsChanged>,
}

impl FontSettingsService {
    pub fn new(default_category: impl Into<Category>) -> Self {
        Self {
            default_category: default_category.into(),
            routes: RefCell::new(HashMap::new()),
            overrides: RefCell::new(HashMap::new()),
            changed: Event::new(),
        }
    }

    pub fn default_category(&self) -> &Category {
        &self.default_category
    }

    /// Sends surfaces of `kind` to `category`.
    ///
    /// Routing only affects surfaces that ask for their map afterwards.
    pub fn route(&self, kind: impl Into<String>, category: impl Into<Category>) {
        self.routes
            .borrow_mut()
            .insert(kind.into(), category.into());
    }

    /// The category for surfaces of `kind`.
    pub fn category_for_kind(&self, kind: &str) -> Category {
        self.routes
            .borrow()
            .get(kind)
            .cloned()
            .unwrap_or_else(|| self.default_category.clone())
    }

    pub fn set_override(
        &self,
        category: impl Into<Category>,
        tag: ClassificationTag,
        properties: PropertySet,
    ) {
        let category = category.into();
        self.overrides
            .borrow_mut()
            .entry(category.clone())
            .or_default()
            .insert(tag, properties);
        self.notify(category);
    }

    /// Removes one override. Notifies only if it existed.
    pub fn remove_override(&self, category: &Category, tag: &ClassificationTag) -> bool {
        let removed = self
            .overrides
            .borrow_mut()
            .get_mut(category)
            .map(|tags| tags.remove(tag).is_some())
            .unwrap_or(false);
        if removed {
            self.notify(category.clone());
        }
        removed
    }

    /// Removes every override of `category`. Notifies only if there were any.
    pub fn clear_category(&self, category: &Category) {
        let removed = self
            .overrides
            .borrow_mut()
            .remove(category)
            .is_some_and(|tags| !tags.is_empty());
        if removed {
            self.notify(category.clone());
        }
    }

    /// Snapshot of one category's overrides.
    pub fn overrides(&self, category: &Category) -> BTreeMap<ClassificationTag, PropertySet> {
        self.overrides
            .borrow()
            .get(category)
            .cloned()
            .unwrap_or_default()
    }

    fn notify(&self, category: Category) {
        tracing::debug!(category = %category, "category settings changed");
        self.changed.emit(&SettingsChanged { category });
    }
}

impl SettingsSource for FontSettingsService {
    fn category_for(&self, surface: &dyn RenderingSurface) -> Category {
        self.category_for_kind(surface.kind())
    }

    fn override_for(&self, category: &Category, tag: &ClassificationTag) -> Option<PropertySet> {
        self.overrides
            .borrow()
            .get(category)
            .and_then(|tags| tags.get(tag))
            .cloned()
    }

    fn settings_changed(&self) -> &Event<SettingsChanged> {
        &self.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TextSurface;
    use formatmap_tags::{COMMENT, KEYWORD};
    use std::rc::Rc;

    fn recorded(service: &FontSettingsService) -> Rc<RefCell<Vec<Category>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        service
            .settings_changed()
            .subscribe(move |change| sink.borrow_mut().push(change.category.clone()));
        seen
    }

    #[test]
    fn test_routes_and_default_category() {
        let settings = FontSettingsService::new("text editor");
        settings.route("repl", "repl");

        let repl = TextSurface::new("repl");
        let editor = TextSurface::new("document");
        assert_eq!(settings.category_for(&repl), Category::new("repl"));
        assert_eq!(settings.category_for(&editor), Category::new("text editor"));
    }

    #[test]
    fn test_override_scoped_to_category() {
        let settings = FontSettingsService::new("text editor");
        let seen = recorded(&settings);

        settings.set_override("repl", COMMENT, PropertySet::new().italic(true));

        assert_eq!(
            settings.override_for(&Category::new("repl"), &COMMENT),
            Some(PropertySet::new().italic(true))
        );
        let editor = Category::new("text editor");
        assert_eq!(settings.override_for(&editor, &COMMENT), None);
        assert_eq!(*seen.borrow(), vec![Category::new("repl")]);
    }

    #[test]
    fn test_remove_and_clear_notify_only_on_change() {
        let settings = FontSettingsService::new("text editor");
        let category = Category::new("text editor");
        settings.set_override(category.clone(), KEYWORD, PropertySet::new().bold(true));
        let seen = recorded(&settings);

        assert!(!settings.remove_override(&category, &COMMENT));
        assert!(settings.remove_override(&category, &KEYWORD));
        settings.clear_category(&category);
        settings.clear_category(&Category::new("other"));

        assert_eq!(seen.borrow().len(), 1);
        assert!(settings.overrides(&category).is_empty());
    }
}
