//! Top-level view: owns the components and routes events to whichever
//! sidebar variant the current terminal width selects.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use navdeck_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::Rect,
    widgets::Block,
};

use crate::app::App;
use crate::ui::components::{Component, ContentComponent, HintBarComponent, SheetComponent, SidebarComponent};
use crate::ui::layout::{MainLayout, SidebarMode};

#[derive(Debug, Default)]
pub struct MainView {
    sidebar: SidebarComponent,
    sheet: SheetComponent,
    content: ContentComponent,
    hint_bar: HintBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a key event: global bindings first, then the active variant.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') => return app.update(&Msg::Quit),
            KeyCode::Char('t') => return app.update(&Msg::CycleTheme),
            KeyCode::Char('m') => return app.update(&Msg::ToggleSheet),
            _ => {}
        }
        match app.sidebar_mode() {
            SidebarMode::Persistent => self.sidebar.handle_key_events(app, key),
            SidebarMode::Sheet if app.sheet_open => self.sheet.handle_key_events(app, key),
            // Closed sheet: navigation is only reachable via the menu toggle.
            SidebarMode::Sheet => Vec::new(),
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match app.sidebar_mode() {
            SidebarMode::Persistent => self.sidebar.handle_mouse_events(app, mouse),
            SidebarMode::Sheet if app.sheet_open => self.sheet.handle_mouse_events(app, mouse),
            SidebarMode::Sheet => Vec::new(),
        }
    }

    pub fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        app.update(msg)
    }

    /// Draws one frame: background, the active sidebar variant, the content
    /// pane, and the hint bar.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let mode = app.sidebar_mode();
        let layout = MainLayout::compute(area, mode);

        frame.render_widget(
            Block::default().style(ratatui::style::Style::default().bg(app.ctx.theme.roles().background)),
            area,
        );

        if let Some(sidebar_area) = layout.sidebar {
            self.sidebar.render(frame, sidebar_area, app);
        }
        self.content.render(frame, layout.content, app);

        // The sheet overlays the body; the hint bar stays visible below it.
        if mode == SidebarMode::Sheet && app.sheet_open {
            self.sheet.render(frame, layout.content, app);
        }

        let hints = match mode {
            SidebarMode::Persistent => self.sidebar.get_hint_spans(app),
            SidebarMode::Sheet if app.sheet_open => self.sheet.get_hint_spans(app),
            SidebarMode::Sheet => Vec::new(),
        };
        if hints.is_empty() {
            self.hint_bar.render(frame, layout.hints, app);
        } else {
            self.hint_bar.render_hints(frame, layout.hints, app, hints);
        }
    }
}
