//! Component system for the Navdeck TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while integrating with the application through a consistent
//! interface. They never mutate global state directly: event handlers return
//! `Effect`s and the runtime applies them to `App`.

use crossterm::event::{KeyEvent, MouseEvent};
use navdeck_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;

/// A UI component with its own behavior.
///
/// - **Separation of concerns**: components own only local UI behavior
/// - **Event-driven**: components respond to input and application messages
/// - **Side-effect reporting**: components report effects rather than
///   directly modifying global state
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events targeting this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and recording hit-test areas; state changes happen in event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Styled key hints shown in the hint bar while this component is
    /// active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
