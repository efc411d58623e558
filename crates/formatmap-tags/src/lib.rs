//! Classification tags and their fixed vocabulary.
//!
//! A [`ClassificationTag`] is the semantic label a classifier attaches to a
//! span of text ("keyword", "static method", "hex byte 0", ...). Format maps
//! use tags as lookup keys; they never invent new ones.
//!
//! Every tag in the vocabulary is exposed as a constant:
//!
//! ```rust
//! use formatmap_tags::{lookup, KEYWORD, STATIC_METHOD};
//!
//! assert_eq!(KEYWORD.as_str(), "keyword");
//! assert_eq!(lookup("static method"), Some(&STATIC_METHOD));
//! assert!(lookup("not a tag").is_none());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::collections::HashMap;
use std::fmt;

mod names;

pub use names::*;

/// An opaque classification identifier, compared by value.
///
/// Vocabulary tags borrow `'static` strings, so cloning them is free.
/// Tags read from configuration files own their string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationTag(Cow<'static, str>);

impl ClassificationTag {
    /// Creates a tag from a static string. Usable in `const` context.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a tag from any string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this tag is part of the built-in vocabulary.
    pub fn is_known(&self) -> bool {
        is_known(self.as_str())
    }
}

impl fmt::Debug for ClassificationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassificationTag({:?})", self.as_str())
    }
}

impl fmt::Display for ClassificationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for ClassificationTag {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for ClassificationTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for ClassificationTag {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for ClassificationTag {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

static BY_NAME: Lazy<HashMap<&'static str, &'static ClassificationTag>> =
    Lazy::new(|| ALL.iter().map(|tag| (tag.as_str(), tag)).collect());

/// Finds the vocabulary constant with the given name.
pub fn lookup(name: &str) -> Option<&'static ClassificationTag> {
    BY_NAME.get(name).copied()
}

/// Returns true if `name` names a tag in the vocabulary.
pub fn is_known(name: &str) -> bool {
    BY_NAME.contains_key(name)
}
