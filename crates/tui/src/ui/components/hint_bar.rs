//! Hint bar component for keyboard shortcuts and contextual help.
//!
//! Renders the single-line hints strip that shows the key bindings of the
//! currently active sidebar variant.

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl HintBarComponent {
    /// Renders the given hint spans into the strip.
    pub fn render_hints(&self, frame: &mut Frame, rect: Rect, app: &App, spans: Vec<ratatui::text::Span<'_>>) {
        let theme = &*app.ctx.theme;
        frame.render_widget(Paragraph::new(Line::from(spans)).style(th::panel_style(theme)), rect);
    }
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let spans = th::build_hint_spans(&*app.ctx.theme, &[(" m", " Menu "), (" q", " Quit")]);
        self.render_hints(frame, rect, app, spans);
    }
}
