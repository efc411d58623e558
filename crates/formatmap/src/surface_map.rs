//! Per-surface views over a category map.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use formatmap_tags::ClassificationTag;

use crate::category::CategoryFormatMap;
use crate::event::{Event, SubscriptionId};
use crate::format_map::{FormatMap, FormatMapChanged, MapStore};
use crate::property::PropertySet;
use crate::source::SurfaceId;

/// A rendering surface's private view of its category's format map.
///
/// Reads fall back to the parent [`CategoryFormatMap`] unless the surface
/// has overridden the tag locally. Writes only ever land in the local
/// overrides; the parent is shared with every other surface of the category
/// and is never touched.
///
/// Parent notifications are forwarded for tags this surface has not
/// overridden, so a consumer subscribed only here still sees theme changes.
///
/// The map is disposed by the registry when its surface is destroyed. After
/// that it no longer forwards parent changes, its overrides are gone, and
/// writes are ignored.
pub struct SurfaceFormatMap {
    surface: SurfaceId,
    parent: Rc<CategoryFormatMap>,
    overrides: MapStore,
    parent_subscription: Cell<Option<SubscriptionId>>,
    disposed: Cell<bool>,
}

impl SurfaceFormatMap {
    pub(crate) fn new(surface: SurfaceId, parent: Rc<CategoryFormatMap>) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<SurfaceFormatMap>| {
            let weak = weak.clone();
            let id = parent.changed().subscribe(move |change| {
                if let Some(map) = weak.upgrade() {
                    map.forward(change);
                }
            });
            Self {
                surface,
                parent,
                overrides: MapStore::default(),
                parent_subscription: Cell::new(Some(id)),
                disposed: Cell::new(false),
            }
        })
    }

    pub fn surface_id(&self) -> SurfaceId {
        self.surface
    }

    pub fn parent(&self) -> &Rc<CategoryFormatMap> {
        &self.parent
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Returns true if `tag` has a local override.
    pub fn is_overridden(&self, tag: &ClassificationTag) -> bool {
        self.overrides.contains(tag)
    }

    /// Removes the local override for `tag`, so reads fall back to the
    /// parent again. Notifies only if an override existed.
    pub fn clear_override(&self, tag: &ClassificationTag) {
        if self.overrides.remove(tag) {
            self.overrides.notify(vec![tag.clone()]);
        }
    }

    /// Tears the map down. Safe to call more than once, and from inside the
    /// surface's destroyed handler.
    pub(crate) fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        if let Some(id) = self.parent_subscription.take() {
            self.parent.changed().unsubscribe(id);
        }
        self.overrides.clear();
        self.overrides.changed().clear();
        tracing::debug!(
            surface = %self.surface,
            category = %self.parent.category(),
            "disposed surface format map"
        );
    }

    fn forward(&self, change: &FormatMapChanged) {
        let tags: Vec<ClassificationTag> = change
            .tags
            .iter()
            .filter(|tag| !self.overrides.contains(tag))
            .cloned()
            .collect();
        self.overrides.notify(tags);
    }
}

impl FormatMap for SurfaceFormatMap {
    fn get(&self, tag: &ClassificationTag) -> PropertySet {
        self.overrides
            .get(tag)
            .unwrap_or_else(|| self.parent.get(tag))
    }

    fn set_batch(&self, entries: Vec<(ClassificationTag, PropertySet)>) {
        if self.is_disposed() {
            tracing::warn!(
                surface = %self.surface,
                "ignoring write to disposed surface format map"
            );
            return;
        }
        let tags = self.overrides.insert_all(entries);
        self.overrides.notify(tags);
    }

    fn properties(&self) -> BTreeMap<ClassificationTag, PropertySet> {
        let mut properties = self.parent.properties();
        properties.extend(self.overrides.snapshot());
        properties
    }

    fn changed(&self) -> &Event<FormatMapChanged> {
        self.overrides.changed()
    }
}

impl Drop for SurfaceFormatMap {
    fn drop(&mut self) {
        if let Some(id) = self.parent_subscription.take() {
            self.parent.changed().unsubscribe(id);
        }
    }
}

impl fmt::Debug for SurfaceFormatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceFormatMap")
            .field("surface", &self.surface)
            .field("category", self.parent.category())
            .field("disposed", &self.disposed.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use console::Color;
    use formatmap_tags::{COMMENT, KEYWORD};
    use std::cell::RefCell;

    fn parent() -> Rc<CategoryFormatMap> {
        let parent = Rc::new(CategoryFormatMap::new(Category::new("text editor")));
        parent.set(KEYWORD, PropertySet::new().foreground(Color::Blue));
        parent
    }

    fn record(map: &SurfaceFormatMap) -> Rc<RefCell<Vec<Vec<ClassificationTag>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        map.subscribe(move |change| sink.borrow_mut().push(change.tags.clone()));
        seen
    }

    #[test]
    fn test_get_falls_back_to_parent() {
        let surface = SurfaceFormatMap::new(SurfaceId::new(1), parent());
        assert_eq!(surface.get(&KEYWORD).foreground_color(), Some(Color::Blue));
        assert!(surface.get(&COMMENT).is_unset());
    }

    #[test]
    fn test_set_overrides_locally_only() {
        let parent = parent();
        let surface = SurfaceFormatMap::new(SurfaceId::new(1), Rc::clone(&parent));
        let seen = record(&surface);

        surface.set(KEYWORD, PropertySet::new().foreground(Color::Green));

        assert_eq!(surface.get(&KEYWORD).foreground_color(), Some(Color::Green));
        assert_eq!(parent.get(&KEYWORD).foreground_color(), Some(Color::Blue));
        assert_eq!(*seen.borrow(), vec![vec![KEYWORD]]);
    }

    #[test]
    fn test_parent_changes_forwarded_except_overridden() {
        let parent = parent();
        let surface = SurfaceFormatMap::new(SurfaceId::new(1), Rc::clone(&parent));
        surface.set(KEYWORD, PropertySet::new().bold(true));
        let seen = record(&surface);

        parent.set_batch(vec![
            (KEYWORD, PropertySet::new().foreground(Color::Red)),
            (COMMENT, PropertySet::new().italic(true)),
        ]);
        parent.set(KEYWORD, PropertySet::new());

        assert_eq!(*seen.borrow(), vec![vec![COMMENT]]);
        assert_eq!(surface.get(&KEYWORD), PropertySet::new().bold(true));
        assert_eq!(surface.get(&COMMENT).is_italic(), Some(true));
    }

    #[test]
    fn test_clear_override_restores_parent_value() {
        let surface = SurfaceFormatMap::new(SurfaceId::new(1), parent());
        surface.set(KEYWORD, PropertySet::new().bold(true));
        let seen = record(&surface);

        surface.clear_override(&KEYWORD);
        surface.clear_override(&KEYWORD);

        assert!(!surface.is_overridden(&KEYWORD));
        assert_eq!(surface.get(&KEYWORD).foreground_color(), Some(Color::Blue));
        assert_eq!(*seen.borrow(), vec![vec![KEYWORD]]);
    }

    #[test]
    fn test_properties_merge_overrides() {
        let surface = SurfaceFormatMap::new(SurfaceId::new(1), parent());
        surface.set(COMMENT, PropertySet::new().dim(true));
        let properties = surface.properties();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[&COMMENT], PropertySet::new().dim(true));
    }

    #[test]
    fn test_dispose_is_idempotent_and_detaches() {
        let parent = parent();
        let surface = SurfaceFormatMap::new(SurfaceId::new(1), Rc::clone(&parent));
        surface.set(KEYWORD, PropertySet::new().bold(true));
        let seen = record(&surface);
        assert_eq!(parent.changed().subscriber_count(), 1);

        surface.dispose();
        surface.dispose();

        assert!(surface.is_disposed());
        assert_eq!(parent.changed().subscriber_count(), 0);
        assert!(!surface.is_overridden(&KEYWORD));

        parent.set(COMMENT, PropertySet::new());
        surface.set(KEYWORD, PropertySet::new());
        assert!(seen.borrow().is_empty());
        assert_eq!(surface.get(&KEYWORD).foreground_color(), Some(Color::Blue));
    }

    #[test]
    fn test_drop_unsubscribes_from_parent() {
        let parent = parent();
        let surface = SurfaceFormatMap::new(SurfaceId::new(1), Rc::clone(&parent));
        assert_eq!(parent.changed().subscriber_count(), 1);
        drop(surface);
        assert_eq!(parent.changed().subscriber_count(), 0);
    }
}
