//! Persistent sidebar component (wide terminals).

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use navdeck_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::nav_rows::render_nav_rows;
use crate::ui::theme::theme_helpers as th;

/// Fixed left sidebar listing every navigation section.
///
/// Always visible in wide mode; the overlay sheet replaces it below the
/// breakpoint.
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down | KeyCode::Tab => app.update(&Msg::FocusNext),
            KeyCode::Up | KeyCode::BackTab => app.update(&Msg::FocusPrev),
            KeyCode::Enter => app.update(&Msg::Activate),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(row_idx) = app.nav.hit_test(mouse.column, mouse.row) else {
            return Vec::new();
        };
        app.nav.click_row(row_idx).into_iter().collect()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let block = th::block(&*app.ctx.theme, Some(" Navdeck "), true);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        render_nav_rows(frame, inner, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" ↑/↓", " Navigate "), (" Enter", " Open "), (" t", " Theme "), (" q", " Quit")],
        )
    }
}
