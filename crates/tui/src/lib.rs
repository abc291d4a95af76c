//! # Navdeck TUI Library
//!
//! Terminal user interface for the Navdeck dashboard. It renders a sectioned
//! navigation menu in one of two responsive variants:
//!
//! - a persistent left sidebar on wide terminals, and
//! - a toggleable overlay sheet on narrow terminals.
//!
//! The active entry is highlighted by exact comparison of the current route
//! path with each entry's target path. Disabled entries render muted and are
//! inert; entries without a target path are informational only.
//!
//! ## Architecture
//!
//! The UI follows a component-based architecture: each element (sidebar,
//! sheet, content pane, hint bar) handles its own events and rendering, and
//! reports side effects upward as `Effect`s that the runtime applies to the
//! shared `App` state.

mod app;
mod ui;

use anyhow::Result;
use app::App;
use navdeck_auth::ProviderRegistry;

/// Runs the main TUI application loop.
///
/// Sets up the terminal, builds the application state around the assembled
/// provider registry, and drives the event loop until the user quits. A
/// `theme_override` takes precedence over the environment and persisted
/// preference for this invocation only.
///
/// # Errors
///
/// Returns an error for terminal setup failures or event loop runtime
/// issues.
pub async fn run(registry: ProviderRegistry, theme_override: Option<&str>) -> Result<()> {
    let mut app = App::new(registry);
    if let Some(name) = theme_override
        && let Some(definition) = ui::theme::catalog::resolve(name)
    {
        app.ctx.active_theme_id = definition.id.to_string();
        app.ctx.theme = definition.build();
    }
    ui::runtime::run_app(app).await
}
