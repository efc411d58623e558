//! Keeps a category map resolved against the theme and settings sources.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use formatmap_tags::ClassificationTag;

use crate::category::CategoryFormatMap;
use crate::event::SubscriptionId;
use crate::format_map::FormatMap;
use crate::property::PropertySet;
use crate::source::{SettingsSource, ThemeSource};

/// Binds one [`CategoryFormatMap`] to the theme and settings sources.
///
/// Construction runs a full resolution pass, so the map is complete before
/// anyone else can see it. After that every theme change, and every
/// settings change for this map's category, triggers another full pass.
///
/// A pass computes, for each tag in the vocabulary, the category's settings
/// override layered over the theme definition, and writes the tags whose
/// value changed in a single batch. A notification that arrives while a pass
/// is running (because some subscriber switched the theme, say) does not
/// start a nested pass; it marks the updater dirty and one more pass runs
/// once the current one completes.
pub struct CategoryMapUpdater {
    map: Rc<CategoryFormatMap>,
    theme: Rc<dyn ThemeSource>,
    settings: Rc<dyn SettingsSource>,
    vocabulary: Rc<[ClassificationTag]>,
    theme_subscription: Cell<Option<SubscriptionId>>,
    settings_subscription: Cell<Option<SubscriptionId>>,
    resolving: Cell<bool>,
    pending: Cell<bool>,
    passes: Cell<u64>,
}

impl CategoryMapUpdater {
    pub fn new(
        map: Rc<CategoryFormatMap>,
        theme: Rc<dyn ThemeSource>,
        settings: Rc<dyn SettingsSource>,
        vocabulary: Rc<[ClassificationTag]>,
    ) -> Rc<Self> {
        let updater = Rc::new(Self {
            map,
            theme,
            settings,
            vocabulary,
            theme_subscription: Cell::new(None),
            settings_subscription: Cell::new(None),
            resolving: Cell::new(false),
            pending: Cell::new(false),
            passes: Cell::new(0),
        });

        updater.refresh();

        let weak = Rc::downgrade(&updater);
        let id = updater.theme.theme_changed().subscribe(move |change| {
            if let Some(updater) = weak.upgrade() {
                tracing::debug!(
                    category = %updater.map.category(),
                    theme = %change.theme,
                    "theme changed, re-resolving"
                );
                updater.refresh();
            }
        });
        updater.theme_subscription.set(Some(id));

        let weak = Rc::downgrade(&updater);
        let settings_changed = updater.settings.settings_changed();
        let id = settings_changed.subscribe(move |change| {
            let Some(updater) = weak.upgrade() else {
                return;
            };
            if &change.category == updater.map.category() {
                tracing::debug!(category = %change.category, "settings changed, re-resolving");
                updater.refresh();
            }
        });
        updater.settings_subscription.set(Some(id));

        updater
    }

    pub fn map(&self) -> &Rc<CategoryFormatMap> {
        &self.map
    }

    /// Number of resolution passes completed so far.
    pub fn resolve_count(&self) -> u64 {
        self.passes.get()
    }

    /// Runs a full resolution pass, or queues one if a pass is in progress.
    pub fn refresh(&self) {
        if self.resolving.replace(true) {
            self.pending.set(true);
            return;
        }
        loop {
            self.pending.set(false);
            self.resolve_all();
            if !self.pending.get() {
                break;
            }
        }
        self.resolving.set(false);
    }

    /// The effective properties of `tag` for this category.
    pub fn resolve(&self, tag: &ClassificationTag) -> PropertySet {
        let theme = self.theme.definition(tag).unwrap_or_default();
        match self.settings.override_for(self.map.category(), tag) {
            Some(user) => user.layered_over(&theme),
            None => theme,
        }
    }

    fn resolve_all(&self) {
        let initial = self.passes.get() == 0;
        let updates: Vec<(ClassificationTag, PropertySet)> = self
            .vocabulary
            .iter()
            .filter_map(|tag| {
                let resolved = self.resolve(tag);
                (initial || self.map.get(tag) != resolved).then(|| (tag.clone(), resolved))
            })
            .collect();

        self.passes.set(self.passes.get() + 1);
        tracing::debug!(
            category = %self.map.category(),
            theme = %self.theme.theme_name(),
            changed = updates.len(),
            "resolved category format map"
        );
        self.map.set_batch(updates);
    }
}

impl Drop for CategoryMapUpdater {
    fn drop(&mut self) {
        if let Some(id) = self.theme_subscription.take() {
            self.theme.theme_changed().unsubscribe(id);
        }
        if let Some(id) = self.settings_subscription.take() {
            self.settings.settings_changed().unsubscribe(id);
        }
    }
}

impl fmt::Debug for CategoryMapUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryMapUpdater")
            .field("category", self.map.category())
            .field("vocabulary", &self.vocabulary.len())
            .field("passes", &self.passes.get())
            .finish()
    }
}
