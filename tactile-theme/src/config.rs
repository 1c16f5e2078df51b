//! Theme configuration.
//!
//! The default theme can be chosen programmatically, through the
//! `TACTILE_THEME` environment variable, or from a TOML file:
//!
//! ```toml
//! default_theme = "midnight"
//! fallback_theme = "daylight"
//! ```
//!
//! Resolution falls back from the requested theme to the configured
//! fallback, so an unknown custom theme name degrades to a built-in instead
//! of failing the application.

use std::path::Path;

use crate::error::ThemeError;
use crate::theme::daylight::DaylightTheme;
use crate::theme::midnight::MidnightTheme;
use crate::theme::Theme;

/// Environment variable consulted by [ThemeConfig::from_env_or_default].
pub const THEME_ENV_VAR: &str = "TACTILE_THEME";

/// Where a theme comes from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    /// The built-in light theme.
    Daylight,
    /// The built-in dark theme.
    Midnight,
    /// A theme registered by the host application under the given name.
    Custom(String),
}

impl ThemeSource {
    /// Parse a source from its textual form (`daylight`, `midnight`,
    /// `custom:<name>`; `light`/`dark` are accepted as aliases).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "daylight" | "light" => Some(Self::Daylight),
            "midnight" | "dark" => Some(Self::Midnight),
            other => other
                .strip_prefix("custom:")
                .map(|name| Self::Custom(name.to_string())),
        }
    }
}

/// Configuration for the default and fallback theme of an application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// The theme the application starts with.
    pub default_theme: ThemeSource,
    /// The theme used when the default cannot be resolved.
    pub fallback_theme: ThemeSource,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeSource::Daylight,
            fallback_theme: ThemeSource::Daylight,
        }
    }
}

impl ThemeConfig {
    /// Create a configuration with the default themes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default theme and return the configuration.
    pub fn with_default_theme(mut self, source: ThemeSource) -> Self {
        self.default_theme = source;
        self
    }

    /// Set the fallback theme and return the configuration.
    pub fn with_fallback_theme(mut self, source: ThemeSource) -> Self {
        self.fallback_theme = source;
        self
    }

    /// Build the configuration from the `TACTILE_THEME` environment
    /// variable, or return the default configuration when it is unset.
    pub fn from_env_or_default() -> Self {
        match std::env::var(THEME_ENV_VAR) {
            Ok(raw) => match ThemeSource::parse(&raw) {
                Some(source) => Self::new().with_default_theme(source),
                None => {
                    log::warn!("{THEME_ENV_VAR}={raw:?} is not a known theme, using defaults");
                    Self::new()
                },
            },
            Err(_) => Self::new(),
        }
    }

    /// Load the configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|_| ThemeError::ThemeFileNotFound {
            path: path.to_path_buf(),
        })?;
        Self::from_toml(&raw).map_err(|details| ThemeError::ThemeParseError {
            path: path.to_path_buf(),
            details,
        })
    }

    fn from_toml(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|err| err.to_string())
    }

    /// Resolve the configured theme, degrading to the fallback when the
    /// default names a custom theme this resolver does not know.
    pub fn resolve_theme(&self) -> Result<Box<dyn Theme>, ThemeError> {
        Self::instantiate(&self.default_theme).or_else(|| {
            log::warn!(
                "default theme {:?} is unknown, falling back to {:?}",
                self.default_theme,
                self.fallback_theme,
            );
            Self::instantiate(&self.fallback_theme)
        })
        .ok_or_else(|| ThemeError::ThemeNotFound {
            name: match &self.fallback_theme {
                ThemeSource::Custom(name) => name.clone(),
                other => format!("{other:?}"),
            },
        })
    }

    fn instantiate(source: &ThemeSource) -> Option<Box<dyn Theme>> {
        match source {
            ThemeSource::Daylight => Some(Box::new(DaylightTheme::light())),
            ThemeSource::Midnight => Some(Box::new(MidnightTheme::new())),
            ThemeSource::Custom(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::WidgetId;

    #[test]
    fn parses_sources_and_aliases() {
        assert_eq!(ThemeSource::parse("daylight"), Some(ThemeSource::Daylight));
        assert_eq!(ThemeSource::parse("DARK"), Some(ThemeSource::Midnight));
        assert_eq!(
            ThemeSource::parse("custom:brand"),
            Some(ThemeSource::Custom("brand".to_string())),
        );
        assert_eq!(ThemeSource::parse("sepia"), None);
    }

    #[test]
    fn loads_config_from_toml() {
        let config = ThemeConfig::from_toml("default_theme = \"midnight\"\n").unwrap();
        assert_eq!(config.default_theme, ThemeSource::Midnight);
        assert_eq!(config.fallback_theme, ThemeSource::Daylight);

        assert!(ThemeConfig::from_toml("default_theme = 3").is_err());
    }

    #[test]
    fn unknown_custom_theme_falls_back() {
        let config = ThemeConfig::new()
            .with_default_theme(ThemeSource::Custom("brand".to_string()))
            .with_fallback_theme(ThemeSource::Midnight);

        let theme = config.resolve_theme().unwrap();
        assert_eq!(
            theme.widget_id(),
            WidgetId::new("tactile-theme", "MidnightTheme"),
        );
    }

    #[test]
    fn unresolvable_fallback_is_an_error() {
        let config = ThemeConfig::new()
            .with_default_theme(ThemeSource::Custom("a".to_string()))
            .with_fallback_theme(ThemeSource::Custom("b".to_string()));

        assert!(matches!(
            config.resolve_theme(),
            Err(ThemeError::ThemeNotFound { name }) if name == "b",
        ));
    }
}
