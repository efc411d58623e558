//! Theme struct for building tag definitions.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use formatmap_tags::ClassificationTag;

use super::error::ThemeValidationError;
use crate::property::PropertySet;

/// One definition in a theme: concrete properties, or an alias to another
/// entry of the same theme.
///
/// In YAML a mapping is read as properties and a bare string as an alias:
///
/// ```yaml
/// accent: { foreground: cyan, bold: true }
/// keyword: accent
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeEntry {
    Alias(ClassificationTag),
    Properties(PropertySet),
}

impl From<PropertySet> for ThemeEntry {
    fn from(properties: PropertySet) -> Self {
        ThemeEntry::Properties(properties)
    }
}

impl From<ClassificationTag> for ThemeEntry {
    fn from(target: ClassificationTag) -> Self {
        ThemeEntry::Alias(target)
    }
}

impl From<&'static str> for ThemeEntry {
    fn from(target: &'static str) -> Self {
        ThemeEntry::Alias(ClassificationTag::from_static(target))
    }
}

impl From<String> for ThemeEntry {
    fn from(target: String) -> Self {
        ThemeEntry::Alias(ClassificationTag::from(target))
    }
}

/// A named set of definitions for classification tags.
///
/// # Example
///
/// ```rust
/// use console::Color;
/// use formatmap::{PropertySet, Theme};
/// use formatmap_tags::{KEYWORD, STATIC_METHOD};
///
/// let theme = Theme::new("dark")
///     // Palette entries
///     .add("accent", PropertySet::new().foreground(Color::Cyan))
///     // Tags pointing at the palette
///     .add(KEYWORD, "accent")
///     .add(STATIC_METHOD, PropertySet::new().bold(true));
///
/// assert_eq!(theme.resolve(&KEYWORD).unwrap().foreground_color(), Some(Color::Cyan));
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    entries: BTreeMap<ClassificationTag, ThemeEntry>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Creates a theme from already collected entries.
    pub fn from_entries(
        name: impl Into<String>,
        entries: BTreeMap<ClassificationTag, ThemeEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Adds a definition, returning the updated theme for chaining.
    ///
    /// The tag may be a vocabulary constant or any string; the value may be a
    /// [`PropertySet`] or the name of another entry to alias.
    pub fn add<T, V>(mut self, tag: T, value: V) -> Self
    where
        T: Into<ClassificationTag>,
        V: Into<ThemeEntry>,
    {
        self.entries.insert(tag.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &BTreeMap<ClassificationTag, ThemeEntry> {
        &self.entries
    }

    pub fn has(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves `tag` to concrete properties, following aliases.
    ///
    /// Returns `None` when the tag is undefined or its alias chain is broken
    /// or cyclic. A missing definition is not an error at lookup time; use
    /// [`validate`](Theme::validate) to catch broken aliases early.
    pub fn resolve(&self, tag: &ClassificationTag) -> Option<PropertySet> {
        let mut current = tag;
        let mut visited: HashSet<&ClassificationTag> = HashSet::new();
        loop {
            if !visited.insert(current) {
                return None;
            }
            match self.entries.get(current)? {
                ThemeEntry::Properties(properties) => return Some(properties.clone()),
                ThemeEntry::Alias(target) => current = target,
            }
        }
    }

    /// Checks that every alias resolves to concrete properties.
    pub fn validate(&self) -> Result<(), ThemeValidationError> {
        for (tag, entry) in &self.entries {
            if let ThemeEntry::Alias(_) = entry {
                self.check_chain(tag)?;
            }
        }
        Ok(())
    }

    fn check_chain(&self, start: &ClassificationTag) -> Result<(), ThemeValidationError> {
        let mut path = vec![start];
        let mut current = start;
        loop {
            match self.entries.get(current) {
                Some(ThemeEntry::Properties(_)) => return Ok(()),
                Some(ThemeEntry::Alias(target)) => {
                    if path.contains(&target) {
                        path.push(target);
                        return Err(ThemeValidationError::CycleDetected {
                            path: path.iter().map(|t| t.to_string()).collect(),
                        });
                    }
                    path.push(target);
                    current = target;
                }
                None => {
                    let from = path[path.len().saturating_sub(2)];
                    return Err(ThemeValidationError::UnresolvedAlias {
                        from: from.to_string(),
                        to: current.to_string(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Color;
    use formatmap_tags::{COMMENT, INSTANCE_METHOD, KEYWORD, STATIC_METHOD};

    #[test]
    fn test_theme_add_concrete() {
        let theme = Theme::new("t").add(KEYWORD, PropertySet::new().bold(true));
        assert!(theme.has("keyword"));
        assert_eq!(theme.resolve(&KEYWORD), Some(PropertySet::new().bold(true)));
    }

    #[test]
    fn test_theme_alias_chain() {
        let theme = Theme::new("t")
            .add("accent", PropertySet::new().foreground(Color::Yellow))
            .add(INSTANCE_METHOD, "accent")
            .add(STATIC_METHOD, INSTANCE_METHOD);

        assert_eq!(
            theme.resolve(&STATIC_METHOD),
            Some(PropertySet::new().foreground(Color::Yellow))
        );
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_theme_alias_string() {
        let target = String::from("base");
        let theme = Theme::new("t")
            .add("base", PropertySet::new().dim(true))
            .add(COMMENT, target);
        assert!(theme.resolve(&COMMENT).is_some());
    }

    #[test]
    fn test_theme_undefined_resolves_none() {
        assert_eq!(Theme::new("t").resolve(&KEYWORD), None);
    }

    #[test]
    fn test_theme_validate_unresolved() {
        let theme = Theme::new("t").add(KEYWORD, "missing");
        assert_eq!(
            theme.validate(),
            Err(ThemeValidationError::UnresolvedAlias {
                from: "keyword".to_string(),
                to: "missing".to_string(),
            })
        );
        assert_eq!(theme.resolve(&KEYWORD), None);
    }

    #[test]
    fn test_theme_validate_cycle() {
        let theme = Theme::new("t").add("a", "b").add("b", "a");
        match theme.validate() {
            Err(ThemeValidationError::CycleDetected { path }) => {
                assert_eq!(path, vec!["a", "b", "a"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
        assert_eq!(theme.resolve(&ClassificationTag::from_static("a")), None);
    }

    #[test]
    fn test_theme_entries_from_yaml() {
        let yaml = "accent: { foreground: cyan }\nkeyword: accent\n";
        let entries: BTreeMap<ClassificationTag, ThemeEntry> = serde_yaml::from_str(yaml).unwrap();
        let theme = Theme::from_entries("yaml", entries);
        assert_eq!(theme.len(), 2);
        assert_eq!(
            theme.resolve(&KEYWORD).unwrap().foreground_color(),
            Some(Color::Cyan)
        );
    }
}
