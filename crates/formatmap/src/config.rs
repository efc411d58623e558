//! Loading themes and settings from configuration files.
//!
//! A configuration file describes the registered themes, which one is
//! active, and the per-category settings. YAML is the primary format; JSON
//! with the same shape is accepted too.
//!
//! ```yaml
//! theme: midnight                  # or: { light: paper, dark: midnight }
//! themes:
//!   midnight:
//!     accent: { foreground: cyan, bold: true }
//!     keyword: accent
//!     comment: { foreground: "#6a9955", italic: true }
//! categories:
//!   default: text editor
//!   routes:
//!     repl: repl
//!   overrides:
//!     repl:
//!       comment: { italic: false }
//! ```
//!
//! Every theme is validated when the services are built, so broken aliases
//! are reported up front instead of silently resolving to unset properties.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use formatmap_tags::ClassificationTag;

use crate::category::Category;
use crate::property::PropertySet;
use crate::registry::FormatMapRegistry;
use crate::settings::FontSettingsService;
use crate::theme::{
    AdaptiveTheme, Theme, ThemeEntry, ThemeError, ThemeService, ThemeValidationError,
};

/// Category used when a configuration does not name one.
pub const DEFAULT_CATEGORY: &str = "text editor";

/// Name of the empty theme used when a configuration defines none.
pub const DEFAULT_THEME: &str = "default";

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, message: String },

    /// The content is not valid for the format.
    Parse {
        format: &'static str,
        message: String,
    },

    /// The file extension is neither YAML nor JSON.
    UnsupportedFormat { path: PathBuf },

    /// The selected theme is not defined.
    Theme(ThemeError),

    /// A theme has broken aliases.
    Validation {
        theme: String,
        error: ThemeValidationError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => write!(
                f,
                "failed to read config \"{}\": {}",
                path.display(),
                message
            ),
            ConfigError::Parse { format, message } => {
                write!(f, "invalid {} config: {}", format, message)
            }
            ConfigError::UnsupportedFormat { path } => write!(
                f,
                "unsupported config format \"{}\" (expected .yaml, .yml or .json)",
                path.display()
            ),
            ConfigError::Theme(err) => write!(f, "{}", err),
            ConfigError::Validation { theme, error } => write!(f, "theme '{}': {}", theme, error),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Theme(err) => Some(err),
            ConfigError::Validation { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ThemeError> for ConfigError {
    fn from(err: ThemeError) -> Self {
        ConfigError::Theme(err)
    }
}

/// Which theme a configuration activates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeChoiceConfig {
    Fixed(String),
    Adaptive { light: String, dark: String },
}

/// Category routing and overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoriesConfig {
    /// Category for surfaces whose kind has no route.
    pub default: Category,
    /// Surface kind → category.
    pub routes: BTreeMap<String, Category>,
    /// Category → tag overrides.
    pub overrides: BTreeMap<Category, BTreeMap<ClassificationTag, PropertySet>>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            default: Category::new(DEFAULT_CATEGORY),
            routes: BTreeMap::new(),
            overrides: BTreeMap::new(),
        }
    }
}

/// A parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatMapConfig {
    /// The active theme. Defaults to `"default"` if defined, otherwise the
    /// first theme by name.
    pub theme: Option<ThemeChoiceConfig>,
    pub themes: BTreeMap<String, BTreeMap<ClassificationTag, ThemeEntry>>,
    pub categories: CategoriesConfig,
}

/// The services built from a configuration.
#[derive(Debug, Clone)]
pub struct ConfiguredServices {
    pub themes: Rc<ThemeService>,
    pub settings: Rc<FontSettingsService>,
}

impl ConfiguredServices {
    /// Creates a registry backed by these services.
    pub fn registry(&self) -> FormatMapRegistry {
        FormatMapRegistry::new(self.themes.clone(), self.settings.clone())
    }
}

impl FormatMapConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            format: "YAML",
            message: e.to_string(),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            format: "JSON",
            message: e.to_string(),
        })
    }

    /// Reads a configuration file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loading format map config");
        parse(&content)
    }

    /// Builds the theme and settings services this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a theme with broken aliases and
    /// [`ConfigError::Theme`] if the selected theme is not defined.
    pub fn build(&self) -> Result<ConfiguredServices, ConfigError> {
        let mut themes: Vec<Theme> = self
            .themes
            .iter()
            .map(|(name, entries)| Theme::from_entries(name.clone(), entries.clone()))
            .collect();
        for theme in &themes {
            theme.validate().map_err(|error| ConfigError::Validation {
                theme: theme.name().to_string(),
                error,
            })?;
        }
        if themes.is_empty() {
            themes.push(Theme::new(DEFAULT_THEME));
        }

        let initial = themes
            .iter()
            .position(|theme| theme.name() == DEFAULT_THEME)
            .unwrap_or(0);
        let service = ThemeService::new(themes.swap_remove(initial));
        for theme in themes {
            service.add_theme(theme);
        }
        match &self.theme {
            None => {}
            Some(ThemeChoiceConfig::Fixed(name)) => service.set_theme(name)?,
            Some(ThemeChoiceConfig::Adaptive { light, dark }) => {
                service.set_adaptive(AdaptiveTheme::new(light.clone(), dark.clone()))?
            }
        }

        let settings = FontSettingsService::new(self.categories.default.clone());
        for (kind, category) in &self.categories.routes {
            settings.route(kind.clone(), category.clone());
        }
        for (category, tags) in &self.categories.overrides {
            for (tag, properties) in tags {
                settings.set_override(category.clone(), tag.clone(), properties.clone());
            }
        }

        Ok(ConfiguredServices {
            themes: Rc::new(service),
            settings: Rc::new(settings),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ThemeSource;
    use console::Color;
    use formatmap_tags::{COMMENT, KEYWORD};

    const YAML: &str = r##"
theme: midnight
themes:
  midnight:
    accent: { foreground: cyan, bold: true }
    keyword: accent
    comment: { foreground: "#00ff00", italic: true }
  paper:
    keyword: { foreground: blue }
categories:
  default: text editor
  routes:
    repl: repl
  overrides:
    repl:
      comment: { italic: false }
"##;

    #[test]
    fn test_parse_yaml() {
        let config = FormatMapConfig::from_yaml_str(YAML).unwrap();
        assert_eq!(
            config.theme,
            Some(ThemeChoiceConfig::Fixed("midnight".to_string()))
        );
        assert_eq!(config.themes.len(), 2);
        assert_eq!(config.categories.routes["repl"], Category::new("repl"));
    }

    #[test]
    fn test_build_services() {
        let services = FormatMapConfig::from_yaml_str(YAML)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(services.themes.theme_name(), "midnight");
        assert_eq!(
            services.themes.definition(&KEYWORD),
            Some(PropertySet::new().foreground(Color::Cyan).bold(true))
        );
        assert_eq!(
            services.settings.overrides(&Category::new("repl"))[&COMMENT],
            PropertySet::new().italic(false)
        );
        assert_eq!(
            services.settings.category_for_kind("repl"),
            Category::new("repl")
        );
        assert_eq!(
            services.settings.category_for_kind("document"),
            Category::new("text editor")
        );
    }

    #[test]
    fn test_adaptive_choice_parses() {
        let config =
            FormatMapConfig::from_yaml_str("theme: { light: paper, dark: midnight }\n").unwrap();
        assert_eq!(
            config.theme,
            Some(ThemeChoiceConfig::Adaptive {
                light: "paper".to_string(),
                dark: "midnight".to_string()
            })
        );
    }

    #[test]
    fn test_empty_config_builds_default_theme() {
        let services = FormatMapConfig::from_yaml_str("{}")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(services.themes.theme_name(), DEFAULT_THEME);
        assert_eq!(
            services.settings.default_category(),
            &Category::new(DEFAULT_CATEGORY)
        );
    }

    #[test]
    fn test_unknown_selected_theme() {
        let config = FormatMapConfig::from_yaml_str("theme: nope\n").unwrap();
        assert_eq!(
            config.build().unwrap_err(),
            ConfigError::Theme(ThemeError::UnknownTheme {
                name: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_broken_alias_reported() {
        let config =
            FormatMapConfig::from_yaml_str("themes:\n  dark:\n    keyword: accent\n").unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref theme, .. } if theme == "dark"));
        assert!(err.to_string().contains("accent"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = FormatMapConfig::from_yaml_str("colour: red\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "YAML", .. }));
    }

    #[test]
    fn test_json_config() {
        let config = FormatMapConfig::from_json_str(
            r#"{"themes": {"default": {"keyword": {"foreground": 33}}}}"#,
        )
        .unwrap();
        let services = config.build().unwrap();
        let keyword = services.themes.definition(&KEYWORD).unwrap();
        assert_eq!(keyword.foreground_color(), Some(Color::Color256(33)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("formats.yaml");
        std::fs::write(&yaml, YAML).unwrap();
        let config = FormatMapConfig::from_path(&yaml).unwrap();
        assert_eq!(config.themes.len(), 2);

        let toml = dir.path().join("formats.toml");
        std::fs::write(&toml, "").unwrap();
        assert!(matches!(
            FormatMapConfig::from_path(&toml),
            Err(ConfigError::UnsupportedFormat { .. })
        ));

        let missing = dir.path().join("missing.yml");
        assert!(matches!(
            FormatMapConfig::from_path(&missing),
            Err(ConfigError::Io { .. })
        ));
    }
}
