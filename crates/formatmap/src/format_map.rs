//! The format map contract shared by category and surface maps.

use console::Style;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use formatmap_tags::ClassificationTag;

use crate::event::{Event, SubscriptionId};
use crate::property::PropertySet;

/// Notification raised when entries of a format map change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatMapChanged {
    /// The tags whose effective properties may have changed.
    pub tags: Vec<ClassificationTag>,
}

impl FormatMapChanged {
    pub fn contains(&self, tag: &ClassificationTag) -> bool {
        self.tags.contains(tag)
    }
}

/// A mapping from classification tag to display properties.
///
/// Lookups never fail: a tag without an entry resolves to
/// [`PropertySet::unset`]. Writes notify every subscriber of
/// [`changed`](FormatMap::changed) before returning. Notifications are
/// never merged across calls; use [`set_batch`](FormatMap::set_batch) to
/// group several writes into one notification explicitly.
///
/// Maps are shared through `Rc` and mutate through `&self`, so handlers may
/// read from or write to the map that notified them.
pub trait FormatMap {
    /// The effective properties for `tag`.
    fn get(&self, tag: &ClassificationTag) -> PropertySet;

    /// Writes every entry, then raises one notification naming all of them.
    /// An empty batch raises nothing.
    fn set_batch(&self, entries: Vec<(ClassificationTag, PropertySet)>);

    /// Snapshot of every known tag and its effective properties.
    fn properties(&self) -> BTreeMap<ClassificationTag, PropertySet>;

    /// Change notifications for this map.
    fn changed(&self) -> &Event<FormatMapChanged>;

    /// Overwrites the entry for `tag` and raises a notification for it.
    fn set(&self, tag: ClassificationTag, properties: PropertySet) {
        self.set_batch(vec![(tag, properties)]);
    }

    fn subscribe(&self, handler: impl Fn(&FormatMapChanged) + 'static) -> SubscriptionId
    where
        Self: Sized,
    {
        self.changed().subscribe(handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.changed().unsubscribe(id)
    }

    /// The terminal style for `tag`.
    fn style(&self, tag: &ClassificationTag) -> Style {
        self.get(tag).to_style()
    }
}

/// Entry storage plus change event, shared by the map implementations.
#[derive(Debug, Default)]
pub(crate) struct MapStore {
    entries: RefCell<HashMap<ClassificationTag, PropertySet>>,
    changed: Event<FormatMapChanged>,
}

impl MapStore {
    pub(crate) fn get(&self, tag: &ClassificationTag) -> Option<PropertySet> {
        self.entries.borrow().get(tag).cloned()
    }

    pub(crate) fn contains(&self, tag: &ClassificationTag) -> bool {
        self.entries.borrow().contains_key(tag)
    }

    /// Stores every entry and returns the tags written, in order, without
    /// duplicates. Does not notify.
    pub(crate) fn insert_all(
        &self,
        entries: Vec<(ClassificationTag, PropertySet)>,
    ) -> Vec<ClassificationTag> {
        let mut entries_map = self.entries.borrow_mut();
        let mut tags: Vec<ClassificationTag> = Vec::with_capacity(entries.len());
        for (tag, properties) in entries {
            if !tags.contains(&tag) {
                tags.push(tag.clone());
            }
            entries_map.insert(tag, properties);
        }
        tags
    }

    pub(crate) fn remove(&self, tag: &ClassificationTag) -> bool {
        self.entries.borrow_mut().remove(tag).is_some()
    }

    pub(crate) fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub(crate) fn snapshot(&self) -> BTreeMap<ClassificationTag, PropertySet> {
        self.entries
            .borrow()
            .iter()
            .map(|(tag, properties)| (tag.clone(), properties.clone()))
            .collect()
    }

    pub(crate) fn changed(&self) -> &Event<FormatMapChanged> {
        &self.changed
    }

    /// Raises a notification unless `tags` is empty. No borrow is held while
    /// handlers run.
    pub(crate) fn notify(&self, tags: Vec<ClassificationTag>) {
        if tags.is_empty() {
            return;
        }
        tracing::trace!(count = tags.len(), "format map changed");
        self.changed.emit(&FormatMapChanged { tags });
    }
}
