//! Resolved display properties for one classification tag.

use console::{Color, Style};
use serde::{Deserialize, Serialize};

use crate::color;

/// An immutable snapshot of the display properties for a tag.
///
/// Every attribute is optional. `None` means "unset, inherit from whatever
/// is underneath", which is different from an explicit `false`. The
/// [`unset`](PropertySet::unset) set carries no attributes at all and is what
/// format maps return for tags without a definition.
///
/// # Example
///
/// ```rust
/// use console::Color;
/// use formatmap::PropertySet;
///
/// let theme = PropertySet::new().foreground(Color::Blue).bold(true);
/// let user = PropertySet::new().foreground(Color::Green);
///
/// let effective = user.layered_over(&theme);
/// assert_eq!(effective.foreground_color(), Some(Color::Green));
/// assert_eq!(effective.is_bold(), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropertySet {
    #[serde(with = "color::serde_opt", skip_serializing_if = "Option::is_none")]
    foreground: Option<Color>,
    #[serde(with = "color::serde_opt", skip_serializing_if = "Option::is_none")]
    background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    underlined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dim: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse: Option<bool>,
}

impl PropertySet {
    /// Creates a property set with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The property set returned for tags with no definition.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    pub fn italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    pub fn underlined(mut self, on: bool) -> Self {
        self.underlined = Some(on);
        self
    }

    pub fn dim(mut self, on: bool) -> Self {
        self.dim = Some(on);
        self
    }

    pub fn reverse(mut self, on: bool) -> Self {
        self.reverse = Some(on);
        self
    }

    pub fn foreground_color(&self) -> Option<Color> {
        self.foreground
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background
    }

    pub fn is_bold(&self) -> Option<bool> {
        self.bold
    }

    pub fn is_italic(&self) -> Option<bool> {
        self.italic
    }

    pub fn is_underlined(&self) -> Option<bool> {
        self.underlined
    }

    pub fn is_dim(&self) -> Option<bool> {
        self.dim
    }

    pub fn is_reverse(&self) -> Option<bool> {
        self.reverse
    }

    /// Returns true if no attribute is set.
    pub fn is_unset(&self) -> bool {
        *self == Self::unset()
    }

    /// Layers `self` on top of `base`: attributes set here win, unset ones
    /// fall through to `base`.
    pub fn layered_over(&self, base: &PropertySet) -> PropertySet {
        PropertySet {
            foreground: self.foreground.or(base.foreground),
            background: self.background.or(base.background),
            bold: self.bold.or(base.bold),
            italic: self.italic.or(base.italic),
            underlined: self.underlined.or(base.underlined),
            dim: self.dim.or(base.dim),
            reverse: self.reverse.or(base.reverse),
        }
    }

    /// Converts to a terminal style. Unset and `false` attributes are left off.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(color) = self.foreground {
            style = style.fg(color);
        }
        if let Some(color) = self.background {
            style = style.bg(color);
        }
        if self.bold == Some(true) {
            style = style.bold();
        }
        if self.italic == Some(true) {
            style = style.italic();
        }
        if self.underlined == Some(true) {
            style = style.underlined();
        }
        if self.dim == Some(true) {
            style = style.dim();
        }
        if self.reverse == Some(true) {
            style = style.reverse();
        }
        style
    }

    /// Applies the properties to `text`, producing a styled string.
    pub fn apply_to(&self, text: &str) -> String {
        self.to_style().apply_to(text).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Option<Color>> {
        prop_oneof![
            Just(None),
            Just(Some(Color::Red)),
            Just(Some(Color::Blue)),
            any::<u8>().prop_map(|i| Some(Color::Color256(i))),
        ]
    }

    prop_compose! {
        fn arb_props()(
            foreground in arb_color(),
            background in arb_color(),
            bold in any::<Option<bool>>(),
            italic in any::<Option<bool>>(),
            underlined in any::<Option<bool>>(),
        ) -> PropertySet {
            PropertySet {
                foreground,
                background,
                bold,
                italic,
                underlined,
                dim: None,
                reverse: None,
            }
        }
    }

    #[test]
    fn test_unset_is_default() {
        assert!(PropertySet::unset().is_unset());
        assert_eq!(PropertySet::unset(), PropertySet::new());
        assert!(!PropertySet::new().bold(false).is_unset());
    }

    #[test]
    fn test_explicit_false_differs_from_unset() {
        assert_ne!(PropertySet::new().italic(false), PropertySet::unset());
    }

    #[test]
    fn test_layering_keeps_explicit_false() {
        let base = PropertySet::new().bold(true);
        let top = PropertySet::new().bold(false);
        assert_eq!(top.layered_over(&base).is_bold(), Some(false));
    }

    #[test]
    fn test_apply_to_emits_ansi() {
        console::set_colors_enabled(true);
        let props = PropertySet::new().foreground(Color::Red).bold(true);
        let style = props.to_style().force_styling(true);
        let styled = style.apply_to("hi").to_string();
        assert!(styled.contains("\x1b[31"));
        assert!(styled.contains("hi"));
    }

    #[test]
    fn test_deserialize_yaml() {
        let yaml = "foreground: blue\nbackground: '#ffffff'\nitalic: true\n";
        let props: PropertySet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(props.foreground_color(), Some(Color::Blue));
        assert_eq!(props.background_color(), Some(Color::Color256(231)));
        assert_eq!(props.is_italic(), Some(true));
        assert_eq!(props.is_bold(), None);
    }

    #[test]
    fn test_deserialize_numeric_color() {
        let props: PropertySet = serde_json::from_str(r#"{"foreground": 208}"#).unwrap();
        assert_eq!(props.foreground_color(), Some(Color::Color256(208)));
    }

    #[test]
    fn test_deserialize_rejects_unknown_attribute() {
        let result: Result<PropertySet, _> = serde_yaml::from_str("sparkle: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_unset() {
        let json = serde_json::to_string(&PropertySet::new().foreground(Color::Cyan)).unwrap();
        assert_eq!(json, r#"{"foreground":"cyan"}"#);
    }

    proptest! {
        #[test]
        fn prop_unset_is_identity_for_layering(props in arb_props()) {
            prop_assert_eq!(PropertySet::unset().layered_over(&props), props.clone());
            prop_assert_eq!(props.layered_over(&PropertySet::unset()), props);
        }

        #[test]
        fn prop_layering_is_associative(a in arb_props(), b in arb_props(), c in arb_props()) {
            prop_assert_eq!(
                a.layered_over(&b).layered_over(&c),
                a.layered_over(&b.layered_over(&c))
            );
        }
    }
}
