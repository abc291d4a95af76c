//! Shared type definitions for the Navdeck dashboard.
//!
//! This crate holds the plain-data navigation model consumed by the TUI and
//! CLI crates, the icon glyph table, and the message/effect enums that flow
//! between components and the application loop.

use serde::{Deserialize, Serialize};

/// A single entry in the navigation sidebar.
///
/// Items without an `href` are informational: they are rendered as plain
/// text and can never be activated. Disabled items render muted and do not
/// navigate regardless of their `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display title of the entry (e.g., "Billing").
    pub title: String,
    /// Route path this entry navigates to. `None` makes the entry inert.
    #[serde(default)]
    pub href: Option<String>,
    /// Key into the icon glyph table. Unknown keys fall back to the default
    /// glyph.
    #[serde(default)]
    pub icon: Option<String>,
    /// Optional badge label rendered right-aligned in the row (e.g., a
    /// counter or "New").
    #[serde(default)]
    pub badge: Option<String>,
    /// Disabled entries render muted and never navigate.
    #[serde(default)]
    pub disabled: bool,
}

impl NavItem {
    /// Creates a navigable item with a title and target path.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            icon: None,
            badge: None,
            disabled: false,
        }
    }

    /// Creates an informational item with no target path.
    pub fn label(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: None,
            icon: None,
            badge: None,
            disabled: false,
        }
    }

    /// Sets the icon key.
    pub fn icon(mut self, key: impl Into<String>) -> Self {
        self.icon = Some(key.into());
        self
    }

    /// Sets the badge label.
    pub fn badge(mut self, label: impl Into<String>) -> Self {
        self.badge = Some(label.into());
        self
    }

    /// Marks the item disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Whether the item can be activated: it must carry an `href` and not be
    /// disabled.
    pub fn is_navigable(&self) -> bool {
        self.href.is_some() && !self.disabled
    }

    /// Whether the item is the active entry for the given current path.
    ///
    /// Exact string equality only; `/dashboard` does not match
    /// `/dashboard/settings`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href.as_deref() == Some(current_path)
    }
}

/// A titled group of navigation entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Section heading (e.g., "MENU", "OPTIONS").
    pub title: String,
    /// Ordered entries in this section.
    pub items: Vec<NavItem>,
}

impl NavSection {
    /// Creates a section from a title and its entries.
    pub fn new(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Glyph rendered when an item has no icon key or the key is unknown.
pub const DEFAULT_GLYPH: &str = "›";

/// Fixed icon table mapping string keys to terminal-safe glyphs.
///
/// Prefer non-emoji symbols for consistent terminal rendering.
const ICON_GLYPHS: &[(&str, &str)] = &[
    ("dashboard", "▦"),
    ("billing", "$"),
    ("settings", "⚙"),
    ("users", "◉"),
    ("charts", "↗"),
    ("docs", "✎"),
    ("support", "?"),
    ("messages", "✉"),
    ("search", "⌕"),
    ("home", "⌂"),
    ("lock", "⚿"),
    ("warning", "△"),
];

/// Resolves an optional icon key to a glyph, falling back to
/// [`DEFAULT_GLYPH`] for missing or unknown keys.
pub fn icon_glyph(key: Option<&str>) -> &'static str {
    let Some(key) = key else {
        return DEFAULT_GLYPH;
    };
    ICON_GLYPHS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(DEFAULT_GLYPH, |(_, glyph)| glyph)
}

/// Messages that can be sent to update the application state.
///
/// These are input-derived events produced by the runtime and routed through
/// `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Toggle the overlay sheet between open and closed (narrow mode only).
    ToggleSheet,
    /// Close the overlay sheet if it is open.
    CloseSheet,
    /// Move focus to the next UI element.
    FocusNext,
    /// Move focus to the previous UI element.
    FocusPrev,
    /// Move the navigation selection by the given offset.
    MoveSelection(isize),
    /// Activate the focused navigation row.
    Activate,
    /// Cycle to the next theme in the catalog.
    CycleTheme,
    /// Terminal was resized to the given width and height.
    Resize(u16, u16),
    /// Periodic tick for animations and housekeeping.
    Tick,
    /// Exit the application.
    Quit,
}

/// Side effects reported by components for the runtime to execute.
///
/// Components never mutate global state directly; they return effects and
/// the application loop applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Switch the current route path.
    Navigate(String),
    /// Dismiss the overlay sheet.
    CloseSheet,
    /// Persist the given theme id as the user's preference.
    PersistTheme(String),
    /// Terminate the application loop.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_without_href_is_not_navigable() {
        let item = NavItem::label("Coming soon");
        assert!(!item.is_navigable());
        assert!(!item.is_active("/anything"));
    }

    #[test]
    fn disabled_item_is_not_navigable_even_with_href() {
        let item = NavItem::new("Billing", "/dashboard/billing").disabled();
        assert!(!item.is_navigable());
    }

    #[test]
    fn active_requires_exact_path_match() {
        let item = NavItem::new("Dashboard", "/dashboard");
        assert!(item.is_active("/dashboard"));
        assert!(!item.is_active("/dashboard/"));
        assert!(!item.is_active("/dashboard/settings"));
    }

    #[test]
    fn unknown_icon_key_falls_back_to_default_glyph() {
        assert_eq!(icon_glyph(Some("does-not-exist")), DEFAULT_GLYPH);
        assert_eq!(icon_glyph(None), DEFAULT_GLYPH);
        assert_eq!(icon_glyph(Some("billing")), "$");
    }

    #[test]
    fn nav_item_deserializes_with_defaults() {
        let item: NavItem = serde_json::from_str(r#"{"title":"Docs"}"#).unwrap();
        assert_eq!(item.title, "Docs");
        assert!(item.href.is_none());
        assert!(!item.disabled);
    }
}
