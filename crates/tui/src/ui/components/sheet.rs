//! Overlay sheet component (narrow terminals).
//!
//! Two states, closed and open, initially closed. The menu key toggles it;
//! Esc dismisses it; activating a non-disabled navigable row navigates and
//! dismisses it; activating a disabled row leaves it open.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use navdeck_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::{Block, Clear},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::nav_rows::render_nav_rows;
use crate::ui::layout::MainLayout;
use crate::ui::theme::theme_helpers as th;

/// Left-anchored navigation sheet rendered above the content with a dimmed
/// backdrop.
#[derive(Debug, Default)]
pub struct SheetComponent;

impl Component for SheetComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => app.update(&Msg::CloseSheet),
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
        match app.nav.hit_test(mouse.column, mouse.row) {
            Some(row_idx) => app.nav.click_row(row_idx).into_iter().collect(),
            // Clicks inside the sheet on non-activatable rows do nothing;
            // clicking the backdrop dismisses the sheet.
            None if app.nav.contains_point(mouse.column, mouse.row) => Vec::new(),
            None => vec![Effect::CloseSheet],
        }
    }

    /// Renders the dimmed backdrop over `rect` (the full screen) and the
    /// sheet panel on its left edge.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        frame.render_widget(Clear, rect);
        frame.render_widget(Block::default().style(app.ctx.theme.overlay_background_style()), rect);

        let sheet_area = MainLayout::sheet_area(rect);
        let block = th::block(&*app.ctx.theme, Some(" Menu "), true);
        let inner = block.inner(sheet_area);
        frame.render_widget(Clear, sheet_area);
        frame.render_widget(block, sheet_area);
        render_nav_rows(frame, inner, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" ↑/↓", " Navigate "), (" Enter", " Open "), (" Esc", " Close")],
        )
    }
}
