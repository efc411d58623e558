//! Adaptive themes that respond to system color mode.

use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A pair of registered theme names, one per color mode.
///
/// The [`ThemeService`](super::ThemeService) picks the variant matching the
/// detected color mode when the pair is selected and again on every
/// [`refresh_color_mode`](super::ThemeService::refresh_color_mode).
///
/// ```rust
/// use formatmap::{set_color_mode_detector, AdaptiveTheme, ColorMode};
///
/// let adaptive = AdaptiveTheme::new("paper", "midnight");
/// assert_eq!(adaptive.select(ColorMode::Dark), "midnight");
///
/// set_color_mode_detector(|| ColorMode::Light);
/// assert_eq!(adaptive.resolve(), "paper");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveTheme {
    light: String,
    dark: String,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme from the names of its light and dark variants.
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    pub fn light(&self) -> &str {
        &self.light
    }

    pub fn dark(&self) -> &str {
        &self.dark
    }

    pub fn select(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// The variant for the current color mode.
    pub fn resolve(&self) -> &str {
        self.select(current_color_mode())
    }
}

/// Reports the color mode surfaces should be painted for.
pub type ColorModeDetector = fn() -> ColorMode;

static DETECTOR: Lazy<Mutex<ColorModeDetector>> = Lazy::new(|| Mutex::new(system_color_mode));

/// Replaces the process-wide color mode detector.
///
/// Adaptive selections read it when chosen and on every
/// [`refresh_color_mode`](super::ThemeService::refresh_color_mode). The
/// default asks the operating system.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    *DETECTOR.lock().unwrap_or_else(PoisonError::into_inner) = detector;
}

pub(crate) fn current_color_mode() -> ColorMode {
    let detect = *DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    detect()
}

fn system_color_mode() -> ColorMode {
    match dark_light::detect() {
        dark_light::Mode::Dark => ColorMode::Dark,
        dark_light::Mode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_adaptive_theme_uses_detector() {
        let adaptive = AdaptiveTheme::new("light", "dark");

        set_color_mode_detector(|| ColorMode::Dark);
        assert_eq!(adaptive.resolve(), "dark");

        set_color_mode_detector(|| ColorMode::Light);
        assert_eq!(adaptive.resolve(), "light");
    }
}
