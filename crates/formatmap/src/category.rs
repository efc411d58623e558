//! Categories and their theme-authoritative format maps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use formatmap_tags::ClassificationTag;

use crate::event::Event;
use crate::format_map::{FormatMap, FormatMapChanged, MapStore};
use crate::property::PropertySet;

/// A configuration scope grouping surfaces that share one resolved map.
///
/// Categories are flat: two categories are either equal or unrelated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank categories are rejected by the registry.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The shared format map of one category.
///
/// Holds the theme-resolved properties for every tag in the vocabulary. It
/// is kept current by a [`CategoryMapUpdater`](crate::CategoryMapUpdater);
/// surfaces read it through their [`SurfaceFormatMap`](crate::SurfaceFormatMap)
/// and never write to it.
#[derive(Debug)]
pub struct CategoryFormatMap {
    category: Category,
    store: MapStore,
}

impl CategoryFormatMap {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            store: MapStore::default(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

impl FormatMap for CategoryFormatMap {
    fn get(&self, tag: &ClassificationTag) -> PropertySet {
        self.store.get(tag).unwrap_or_default()
    }

    fn set_batch(&self, entries: Vec<(ClassificationTag, PropertySet)>) {
        let tags = self.store.insert_all(entries);
        self.store.notify(tags);
    }

    fn properties(&self) -> BTreeMap<ClassificationTag, PropertySet> {
        self.store.snapshot()
    }

    fn changed(&self) -> &Event<FormatMapChanged> {
        self.store.changed()
    }
}
