//! Theme errors.

/// Error returned when theme validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValidationError {
    /// An alias references a name the theme does not define
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution
    CycleDetected { path: Vec<String> },
}

impl std::fmt::Display for ThemeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeValidationError::UnresolvedAlias { from, to } => {
                write!(f, "'{}' aliases undefined entry '{}'", from, to)
            }
            ThemeValidationError::CycleDetected { path } => {
                write!(f, "cycle detected in theme aliases: {}", path.join(" -> "))
            }
        }
    }
}

impl std::error::Error for ThemeValidationError {}

/// Error returned by [`ThemeService`](super::ThemeService) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No theme with this name is registered
    UnknownTheme { name: String },
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::UnknownTheme { name } => write!(f, "unknown theme '{}'", name),
        }
    }
}

impl std::error::Error for ThemeError {}
