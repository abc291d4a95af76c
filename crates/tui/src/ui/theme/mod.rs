//! Theme styling module for the TUI UI layer.
//!
//! Defines the Dracula and Nord palettes, semantic theme roles, and helper
//! builders for Ratatui widgets and styles. Prefer these helpers over
//! hard-coding colors to keep the UI consistent.

use std::env;

pub mod catalog;
pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use catalog::ThemeDefinition;
pub use dracula::DraculaTheme;
pub use nord::NordTheme;
pub use roles::Theme;

/// Environment variable overriding the theme for one invocation.
pub const THEME_ENV_VAR: &str = "NAVDECK_THEME";

/// Theme plus metadata describing how it was selected.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

/// Selects a theme from the environment override, then the persisted
/// preference, then the default.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if let Ok(theme_name) = env::var(THEME_ENV_VAR)
        && let Some(definition) = catalog::resolve(theme_name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    if let Some(name) = preferred_theme
        && let Some(definition) = catalog::resolve(name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    LoadedTheme::from_definition(catalog::default_theme())
}
