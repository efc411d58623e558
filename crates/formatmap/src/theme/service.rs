//! The active-theme service.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use formatmap_tags::ClassificationTag;

use super::adaptive::AdaptiveTheme;
use super::error::ThemeError;
use super::theme::Theme;
use crate::event::Event;
use crate::property::PropertySet;
use crate::source::{ThemeChanged, ThemeSource};

/// How the service picks its active theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSelection {
    /// Always the named theme.
    Fixed(String),
    /// The light or dark variant, following the OS color mode.
    Adaptive(AdaptiveTheme),
}

/// Registry of themes with one active theme.
///
/// Implements [`ThemeSource`]: lookups answer from the active theme, and
/// [`ThemeChanged`] is raised whenever the active theme's definitions change,
/// whether by switching themes, re-registering the active theme, or an
/// adaptive selection flipping between light and dark.
///
/// # Example
///
/// ```rust
/// use console::Color;
/// use formatmap::{PropertySet, Theme, ThemeService, ThemeSource};
/// use formatmap_tags::KEYWORD;
///
/// let service = ThemeService::new(
///     Theme::new("blue").add(KEYWORD, PropertySet::new().foreground(Color::Blue)),
/// );
/// service.add_theme(Theme::new("red").add(KEYWORD, PropertySet::new().foreground(Color::Red)));
///
/// service.set_theme("red").unwrap();
/// assert_eq!(service.definition(&KEYWORD).unwrap().foreground_color(), Some(Color::Red));
/// ```
#[derive(Debug)]
pub struct ThemeService {
    themes: RefCell<HashMap<String, Rc<Theme>>>,
    selection: RefCell<ThemeSelection>,
    active: RefCell<Rc<Theme>>,
    changed: Event<ThemeChanged>,
}

impl ThemeService {
    /// Creates a service with `initial` registered and active.
    pub fn new(initial: Theme) -> Self {
        let initial = Rc::new(initial);
        let mut themes = HashMap::new();
        themes.insert(initial.name().to_string(), Rc::clone(&initial));
        Self {
            themes: RefCell::new(themes),
            selection: RefCell::new(ThemeSelection::Fixed(initial.name().to_string())),
            active: RefCell::new(initial),
            changed: Event::new(),
        }
    }

    /// Registers a theme, replacing any theme with the same name.
    ///
    /// Replacing the active theme raises [`ThemeChanged`].
    pub fn add_theme(&self, theme: Theme) {
        let name = theme.name().to_string();
        let theme = Rc::new(theme);
        self.themes
            .borrow_mut()
            .insert(name.clone(), Rc::clone(&theme));

        let is_active = self.active.borrow().name() == name;
        if is_active {
            *self.active.borrow_mut() = theme;
            tracing::debug!(theme = %name, "active theme redefined");
            self.changed.emit(&ThemeChanged { theme: name });
        }
    }

    /// Makes the named theme active, ending any adaptive selection.
    pub fn set_theme(&self, name: &str) -> Result<(), ThemeError> {
        let theme = self.lookup(name)?;
        *self.selection.borrow_mut() = ThemeSelection::Fixed(name.to_string());
        self.activate(theme);
        Ok(())
    }

    /// Follows the OS color mode between two registered themes.
    pub fn set_adaptive(&self, adaptive: AdaptiveTheme) -> Result<(), ThemeError> {
        self.lookup(adaptive.light())?;
        self.lookup(adaptive.dark())?;
        let theme = self.lookup(adaptive.resolve())?;
        *self.selection.borrow_mut() = ThemeSelection::Adaptive(adaptive);
        self.activate(theme);
        Ok(())
    }

    /// Re-detects the color mode for an adaptive selection.
    ///
    /// Returns true if the active theme changed. Fixed selections are
    /// unaffected.
    pub fn refresh_color_mode(&self) -> bool {
        let wanted = match &*self.selection.borrow() {
            ThemeSelection::Fixed(_) => return false,
            ThemeSelection::Adaptive(adaptive) => adaptive.resolve().to_string(),
        };
        match self.lookup(&wanted) {
            Ok(theme) => self.activate(theme),
            Err(err) => {
                tracing::warn!(error = %err, "adaptive theme variant is not registered");
                false
            }
        }
    }

    /// The active theme.
    pub fn theme(&self) -> Rc<Theme> {
        Rc::clone(&self.active.borrow())
    }

    pub fn selection(&self) -> ThemeSelection {
        self.selection.borrow().clone()
    }

    /// Registered theme names, sorted.
    pub fn theme_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    fn lookup(&self, name: &str) -> Result<Rc<Theme>, ThemeError> {
        self.themes
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownTheme {
                name: name.to_string(),
            })
    }

    fn activate(&self, theme: Rc<Theme>) -> bool {
        if Rc::ptr_eq(&self.active.borrow(), &theme) {
            return false;
        }
        let name = theme.name().to_string();
        *self.active.borrow_mut() = theme;
        tracing::debug!(theme = %name, "theme activated");
        self.changed.emit(&ThemeChanged { theme: name });
        true
    }
}

impl ThemeSource for ThemeService {
    fn theme_name(&self) -> String {
        self.active.borrow().name().to_string()
    }

    fn definition(&self, tag: &ClassificationTag) -> Option<PropertySet> {
        self.active.borrow().resolve(tag)
    }

    fn theme_changed(&self) -> &Event<ThemeChanged> {
        &self.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{set_color_mode_detector, ColorMode};
    use console::Color;
    use formatmap_tags::KEYWORD;
    use serial_test::serial;
    use std::cell::RefCell;

    fn colored(name: &str, color: Color) -> Theme {
        Theme::new(name).add(KEYWORD, PropertySet::new().foreground(color))
    }

    fn service() -> (ThemeService, Rc<RefCell<Vec<String>>>) {
        let service = ThemeService::new(colored("blue", Color::Blue));
        service.add_theme(colored("red", Color::Red));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        service
            .theme_changed()
            .subscribe(move |change| sink.borrow_mut().push(change.theme.clone()));
        (service, seen)
    }

    #[test]
    fn test_set_theme_switches_and_notifies() {
        let (service, seen) = service();
        service.set_theme("red").unwrap();
        assert_eq!(service.theme_name(), "red");
        assert_eq!(
            service.definition(&KEYWORD).unwrap().foreground_color(),
            Some(Color::Red)
        );
        assert_eq!(*seen.borrow(), vec!["red"]);
    }

    #[test]
    fn test_set_same_theme_is_silent() {
        let (service, seen) = service();
        service.set_theme("blue").unwrap();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_unknown_theme_rejected_without_change() {
        let (service, seen) = service();
        assert_eq!(
            service.set_theme("green"),
            Err(ThemeError::UnknownTheme {
                name: "green".to_string()
            })
        );
        assert_eq!(service.theme_name(), "blue");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_redefining_active_theme_notifies() {
        let (service, seen) = service();
        service.add_theme(colored("red", Color::Magenta));
        assert!(seen.borrow().is_empty());

        service.add_theme(colored("blue", Color::Cyan));
        assert_eq!(*seen.borrow(), vec!["blue"]);
        assert_eq!(
            service.definition(&KEYWORD).unwrap().foreground_color(),
            Some(Color::Cyan)
        );
    }

    #[test]
    #[serial]
    fn test_adaptive_selection_follows_color_mode() {
        let (service, seen) = service();
        set_color_mode_detector(|| ColorMode::Dark);
        service
            .set_adaptive(AdaptiveTheme::new("blue", "red"))
            .unwrap();
        assert_eq!(service.theme_name(), "red");

        assert!(!service.refresh_color_mode());

        set_color_mode_detector(|| ColorMode::Light);
        assert!(service.refresh_color_mode());
        assert_eq!(service.theme_name(), "blue");
        assert_eq!(*seen.borrow(), vec!["red", "blue"]);

        service.set_theme("red").unwrap();
        set_color_mode_detector(|| ColorMode::Dark);
        assert!(!service.refresh_color_mode());
        assert_eq!(
            service.selection(),
            ThemeSelection::Fixed("red".to_string())
        );
    }

    #[test]
    fn test_adaptive_requires_registered_variants() {
        let (service, _) = service();
        assert!(service
            .set_adaptive(AdaptiveTheme::new("blue", "missing"))
            .is_err());
        assert_eq!(
            service.selection(),
            ThemeSelection::Fixed("blue".to_string())
        );
    }

    #[test]
    fn test_theme_names_sorted() {
        let (service, _) = service();
        assert_eq!(service.theme_names(), vec!["blue", "red"]);
    }
}
