use super::{DraculaTheme, NordTheme, Theme};

/// Describes a selectable theme inside the TUI.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        aliases: &["dracula"],
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        aliases: &["nord"],
        factory: || Box::new(NordTheme::new()),
    },
];

/// Iterate over all available definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by canonical id.
pub fn find_by_id(id: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| definition.id.eq_ignore_ascii_case(id))
}

/// Locate a definition by alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.to_ascii_lowercase();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(&normalized)) || definition.id.eq_ignore_ascii_case(&normalized)
    })
}

/// The definition following `id` in catalog order, wrapping at the end.
pub fn next_after(id: &str) -> &'static ThemeDefinition {
    let idx = THEME_DEFINITIONS
        .iter()
        .position(|definition| definition.id.eq_ignore_ascii_case(id))
        .unwrap_or(0);
    &THEME_DEFINITIONS[(idx + 1) % THEME_DEFINITIONS.len()]
}

/// Preferred default theme.
pub fn default_theme() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == "dracula")
        .expect("dracula theme registered")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_matches_ids_case_insensitively() {
        assert_eq!(resolve("Nord").unwrap().id, "nord");
        assert_eq!(resolve("DRACULA").unwrap().id, "dracula");
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn next_after_wraps_around_the_catalog() {
        assert_eq!(next_after("dracula").id, "nord");
        assert_eq!(next_after("nord").id, "dracula");
        // Unknown ids restart from the head of the catalog.
        assert_eq!(next_after("mystery").id, "nord");
    }

    #[test]
    fn every_definition_builds() {
        for definition in all() {
            let theme = definition.build();
            assert!(find_by_id(definition.id).is_some());
            let _ = theme.roles();
        }
    }
}
