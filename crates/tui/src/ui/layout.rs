//! Layout system for the Navdeck TUI.
//!
//! Chooses between the two responsive sidebar variants and splits the screen
//! into the areas the main view renders into.

use ratatui::prelude::*;

/// Terminal width (columns) at which the persistent sidebar replaces the
/// overlay sheet.
pub const WIDE_BREAKPOINT: u16 = 100;

/// Fixed column width of the persistent sidebar.
pub const SIDEBAR_WIDTH: u16 = 28;

/// Maximum column width of the overlay sheet.
pub const SHEET_WIDTH: u16 = 32;

/// Which sidebar variant is active. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    /// Wide terminals: fixed sidebar always visible.
    Persistent,
    /// Narrow terminals: dismissible overlay sheet.
    Sheet,
}

impl SidebarMode {
    /// Selects the variant for a terminal width.
    pub fn for_width(width: u16) -> Self {
        if width >= WIDE_BREAKPOINT {
            Self::Persistent
        } else {
            Self::Sheet
        }
    }
}

/// Screen areas computed per frame.
pub struct MainLayout {
    /// Sidebar column; `None` in sheet mode.
    pub sidebar: Option<Rect>,
    /// Content pane.
    pub content: Rect,
    /// Single-line hint bar at the bottom.
    pub hints: Rect,
}

impl MainLayout {
    /// Splits the screen for the given mode.
    pub fn compute(size: Rect, mode: SidebarMode) -> Self {
        let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(size);
        let (body, hints) = (rows[0], rows[1]);

        match mode {
            SidebarMode::Persistent => {
                let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)]).split(body);
                Self {
                    sidebar: Some(columns[0]),
                    content: columns[1],
                    hints,
                }
            }
            SidebarMode::Sheet => Self {
                sidebar: None,
                content: body,
                hints,
            },
        }
    }

    /// Left-anchored area of the overlay sheet within the body area.
    pub fn sheet_area(size: Rect) -> Rect {
        let width = SHEET_WIDTH.min(size.width.saturating_sub(2)).max(1);
        Rect::new(size.x, size.y, width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selection_is_mutually_exclusive_at_the_breakpoint() {
        assert_eq!(SidebarMode::for_width(WIDE_BREAKPOINT - 1), SidebarMode::Sheet);
        assert_eq!(SidebarMode::for_width(WIDE_BREAKPOINT), SidebarMode::Persistent);
    }

    #[test]
    fn persistent_layout_reserves_the_sidebar_column() {
        let layout = MainLayout::compute(Rect::new(0, 0, 120, 40), SidebarMode::Persistent);
        let sidebar = layout.sidebar.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
        assert_eq!(layout.hints.height, 1);
    }

    #[test]
    fn sheet_layout_gives_content_the_full_width() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), SidebarMode::Sheet);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 80);
    }

    #[test]
    fn sheet_area_never_exceeds_the_screen() {
        let area = MainLayout::sheet_area(Rect::new(0, 0, 20, 10));
        assert!(area.width <= 20);
        assert_eq!(area.x, 0);
    }
}
