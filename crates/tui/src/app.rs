//! Application state and logic for the Navdeck TUI.
//!
//! The `App` struct is the central state container: current route path,
//! navigation list state, the overlay sheet flag, and shared context such as
//! the active theme and the provider registry. Renders are pure functions of
//! this state; components report `Effect`s which the runtime applies back
//! through [`App::apply_effect`].

use navdeck_auth::ProviderRegistry;
use navdeck_types::{Effect, Msg, NavItem, NavSection};
use navdeck_util::UserPreferences;
use tracing::warn;

use crate::ui::components::nav_list::NavListState;
use crate::ui::layout::SidebarMode;
use crate::ui::theme::{self, Theme};

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects like the provider registry, the active theme,
/// and the preferences store. This avoids threading multiple references
/// through components and helps reduce borrow complexity.
pub struct SharedCtx {
    /// Assembled identity provider registry (startup-time configuration).
    pub providers: ProviderRegistry,
    /// Active theme used by all style helpers.
    pub theme: Box<dyn Theme>,
    /// Canonical id of the active theme, used for cycling and persistence.
    pub active_theme_id: String,
    /// Persisted user preferences (preferred theme).
    pub preferences: UserPreferences,
    /// Global debug flag (from env).
    pub debug_enabled: bool,
}

impl SharedCtx {
    pub fn new(providers: ProviderRegistry) -> Self {
        let preferences = UserPreferences::new().unwrap_or_else(|error| {
            warn!(%error, "preferences unavailable; using in-memory store");
            UserPreferences::ephemeral()
        });
        let loaded = theme::load(preferences.preferred_theme().as_deref());
        Self {
            providers,
            active_theme_id: loaded.definition.id.to_string(),
            theme: loaded.theme,
            preferences,
            debug_enabled: navdeck_util::env_flag("DEBUG"),
        }
    }
}

/// The main application state.
pub struct App {
    /// Shared, cross-cutting context (providers, theme, preferences).
    pub ctx: SharedCtx,
    /// Current route path, compared exactly against item `href`s.
    pub current_path: String,
    /// Navigation list shared by both sidebar variants.
    pub nav: NavListState,
    /// Open/closed flag of the overlay sheet. Only meaningful in narrow
    /// mode; wide mode forces it closed.
    pub sheet_open: bool,
    /// Last known terminal size.
    pub width: u16,
    pub height: u16,
    /// Set once `Effect::Quit` has been applied.
    pub should_quit: bool,
}

impl App {
    /// Builds the application with the default dashboard sections.
    pub fn new(providers: ProviderRegistry) -> Self {
        Self::with_sections(providers, default_sections())
    }

    /// Builds the application around the given sections.
    pub fn with_sections(providers: ProviderRegistry, sections: Vec<NavSection>) -> Self {
        let mut nav = NavListState::new(sections);
        let current_path = "/dashboard".to_string();
        nav.focus_path(&current_path);
        Self {
            ctx: SharedCtx::new(providers),
            current_path,
            nav,
            sheet_open: false,
            width: 120,
            height: 40,
            should_quit: false,
        }
    }

    /// Which sidebar variant is active for the current terminal width.
    pub fn sidebar_mode(&self) -> SidebarMode {
        SidebarMode::for_width(self.width)
    }

    /// Processes an input-derived message, returning effects to apply.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::ToggleSheet => {
                // The toggle only exists in the overlay variant.
                if self.sidebar_mode() == SidebarMode::Sheet {
                    self.sheet_open = !self.sheet_open;
                }
                Vec::new()
            }
            Msg::CloseSheet => {
                self.sheet_open = false;
                Vec::new()
            }
            Msg::FocusNext => {
                self.nav.cycle_focus(true);
                Vec::new()
            }
            Msg::FocusPrev => {
                self.nav.cycle_focus(false);
                Vec::new()
            }
            Msg::MoveSelection(offset) => {
                let forward = *offset >= 0;
                for _ in 0..offset.unsigned_abs() {
                    self.nav.cycle_focus(forward);
                }
                Vec::new()
            }
            Msg::Activate => self.nav.activate_focused().into_iter().collect(),
            Msg::CycleTheme => {
                let definition = theme::catalog::next_after(&self.ctx.active_theme_id);
                self.ctx.active_theme_id = definition.id.to_string();
                self.ctx.theme = definition.build();
                vec![Effect::PersistTheme(definition.id.to_string())]
            }
            Msg::Resize(width, height) => {
                self.width = *width;
                self.height = *height;
                // No hybrid state: the persistent sidebar never coexists
                // with an open sheet.
                if self.sidebar_mode() == SidebarMode::Persistent {
                    self.sheet_open = false;
                }
                Vec::new()
            }
            Msg::Tick => Vec::new(),
            Msg::Quit => vec![Effect::Quit],
        }
    }

    /// Applies a reported effect to the application state.
    pub fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Navigate(path) => {
                self.nav.focus_path(&path);
                self.current_path = path;
                // Selecting a destination dismisses the sheet.
                self.sheet_open = false;
            }
            Effect::CloseSheet => self.sheet_open = false,
            Effect::PersistTheme(id) => {
                if let Err(error) = self.ctx.preferences.set_preferred_theme(Some(id)) {
                    warn!(%error, "failed to persist theme preference");
                }
            }
            Effect::Quit => self.should_quit = true,
        }
    }
}

/// Default dashboard navigation, mirroring the hosted product's sidebar.
pub fn default_sections() -> Vec<NavSection> {
    vec![
        NavSection::new(
            "MENU",
            vec![
                NavItem::new("Dashboard", "/dashboard").icon("dashboard"),
                NavItem::new("Billing", "/dashboard/billing").icon("billing"),
                NavItem::new("Charts", "/dashboard/charts").icon("charts"),
                NavItem::new("Admin Panel", "/admin").icon("lock").badge("4"),
            ],
        ),
        NavSection::new(
            "OPTIONS",
            vec![
                NavItem::new("Settings", "/dashboard/settings").icon("settings"),
                NavItem::new("Homepage", "/").icon("home"),
                NavItem::new("Support", "/support").icon("support").disabled(),
                NavItem::label("More tools soon"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use navdeck_auth::ProviderRegistry;

    fn test_app() -> App {
        let registry = test_registry();
        App::new(registry)
    }

    fn test_registry() -> ProviderRegistry {
        let vars = [
            ("GOOGLE_CLIENT_ID", Some("id")),
            ("GOOGLE_CLIENT_SECRET", Some("secret")),
            ("GITHUB_CLIENT_ID", Some("id")),
            ("GITHUB_CLIENT_SECRET", Some("secret")),
            ("RESEND_API_KEY", Some("key")),
            ("EMAIL_FROM", Some("noreply@example.com")),
        ];
        temp_env::with_vars(vars, ProviderRegistry::from_env).unwrap()
    }

    #[test]
    fn narrow_width_selects_sheet_and_wide_selects_sidebar() {
        let mut app = test_app();
        app.update(&Msg::Resize(80, 24));
        assert_eq!(app.sidebar_mode(), SidebarMode::Sheet);
        app.update(&Msg::Resize(140, 40));
        assert_eq!(app.sidebar_mode(), SidebarMode::Persistent);
    }

    #[test]
    fn toggle_only_opens_sheet_in_narrow_mode() {
        let mut app = test_app();
        app.update(&Msg::Resize(140, 40));
        app.update(&Msg::ToggleSheet);
        assert!(!app.sheet_open);

        app.update(&Msg::Resize(80, 24));
        app.update(&Msg::ToggleSheet);
        assert!(app.sheet_open);
        app.update(&Msg::ToggleSheet);
        assert!(!app.sheet_open);
    }

    #[test]
    fn activating_navigable_item_closes_sheet_and_navigates() {
        let mut app = test_app();
        app.update(&Msg::Resize(80, 24));
        app.update(&Msg::ToggleSheet);
        assert!(app.sheet_open);

        app.update(&Msg::FocusNext); // Billing
        let effects = app.update(&Msg::Activate);
        assert_eq!(effects, vec![Effect::Navigate("/dashboard/billing".into())]);
        for effect in effects {
            app.apply_effect(effect);
        }
        assert_eq!(app.current_path, "/dashboard/billing");
        assert!(!app.sheet_open);
    }

    #[test]
    fn activating_disabled_item_leaves_sheet_open() {
        let mut app = test_app();
        app.update(&Msg::Resize(80, 24));
        app.update(&Msg::ToggleSheet);

        // Walk focus to the disabled Support entry.
        while app.nav.focused_item().map(|item| item.title.as_str()) != Some("Support") {
            app.update(&Msg::FocusNext);
        }
        let effects = app.update(&Msg::Activate);
        assert!(effects.is_empty());
        assert!(app.sheet_open);
    }

    #[test]
    fn resizing_to_wide_forces_sheet_closed() {
        let mut app = test_app();
        app.update(&Msg::Resize(80, 24));
        app.update(&Msg::ToggleSheet);
        assert!(app.sheet_open);
        app.update(&Msg::Resize(140, 40));
        assert!(!app.sheet_open);
    }

    #[test]
    fn cycling_theme_requests_persistence() {
        let mut app = test_app();
        let before = app.ctx.active_theme_id.clone();
        let effects = app.update(&Msg::CycleTheme);
        assert_ne!(app.ctx.active_theme_id, before);
        assert_eq!(effects, vec![Effect::PersistTheme(app.ctx.active_theme_id.clone())]);
    }
}
