//! Shared navigation list state.
//!
//! Both sidebar variants (persistent and overlay sheet) render the same
//! sectioned list of entries. This module owns the flattened row model, the
//! focus flags used for keyboard navigation, and the activation rules:
//!
//! - rows without an `href` are informational and never focusable;
//! - disabled rows are focusable (so their badge and title remain readable)
//!   but activation has no effect;
//! - activating a navigable row yields `Effect::Navigate`.

use navdeck_types::{Effect, NavItem, NavSection};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// One visual row in the flattened navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    /// Section heading at the given section index.
    Header(usize),
    /// Item row: `(section index, item index)`.
    Item(usize, usize),
}

/// State for the sectioned navigation list.
///
/// Owns the section data, the flattened rows, rat-focus flags for each
/// focusable row, and the last rendered areas for mouse hit testing.
#[derive(Debug, Default)]
pub struct NavListState {
    /// Section data, in render order.
    pub sections: Vec<NavSection>,
    /// Flattened rows derived from `sections`.
    rows: Vec<NavRow>,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags, one per focusable row (item rows with an `href`).
    /// Indices align with `focusable_rows`.
    focus_flags: Vec<FocusFlag>,
    /// Row indices (into `rows`) that can take focus.
    focusable_rows: Vec<usize>,
    /// Last rendered area of the whole list; used for hit testing.
    pub last_area: Rect,
    /// Last rendered per-row areas, aligned with `rows`.
    pub per_row_areas: Vec<Rect>,
}

impl NavListState {
    /// Creates list state from sections. Focus defaults to the first
    /// focusable row, if any.
    pub fn new(sections: Vec<NavSection>) -> Self {
        let mut state = Self {
            sections,
            rows: Vec::new(),
            container_focus: FocusFlag::named("nav.list"),
            focus_flags: Vec::new(),
            focusable_rows: Vec::new(),
            last_area: Rect::default(),
            per_row_areas: Vec::new(),
        };
        state.rebuild_rows();
        if let Some(flag) = state.focus_flags.first() {
            flag.set(true);
        }
        state
    }

    /// Flattened rows, in render order.
    pub fn rows(&self) -> &[NavRow] {
        &self.rows
    }

    /// The item behind a row, when the row is an item row.
    pub fn item_at(&self, row: NavRow) -> Option<&NavItem> {
        match row {
            NavRow::Header(_) => None,
            NavRow::Item(section, item) => self.sections.get(section)?.items.get(item),
        }
    }

    /// Whether the row at `row_idx` currently holds keyboard focus.
    pub fn is_row_focused(&self, row_idx: usize) -> bool {
        self.focusable_position(row_idx)
            .and_then(|pos| self.focus_flags.get(pos))
            .is_some_and(|flag| flag.get())
    }

    /// The currently focused item, if any row holds focus.
    pub fn focused_item(&self) -> Option<&NavItem> {
        let pos = self.focus_flags.iter().position(|flag| flag.get())?;
        let row = *self.rows.get(*self.focusable_rows.get(pos)?)?;
        self.item_at(row)
    }

    /// Moves focus to the next or previous focusable row, wrapping at the
    /// ends. No-op when nothing is focusable.
    pub fn cycle_focus(&mut self, forward: bool) {
        let len = self.focus_flags.len();
        if len == 0 {
            return;
        }
        let current = self.focus_flags.iter().position(|flag| flag.get()).unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        for (i, flag) in self.focus_flags.iter().enumerate() {
            flag.set(i == next);
        }
    }

    /// Activates the focused row.
    ///
    /// Returns `Effect::Navigate` for a navigable row; disabled rows and
    /// rows without an `href` produce nothing.
    pub fn activate_focused(&self) -> Option<Effect> {
        let item = self.focused_item()?;
        if !item.is_navigable() {
            return None;
        }
        item.href.clone().map(Effect::Navigate)
    }

    /// Moves focus to the row whose `href` equals `path`, if present.
    ///
    /// Keeps the highlighted row in sync after navigation triggered by the
    /// other variant or by the host application.
    pub fn focus_path(&mut self, path: &str) {
        let target = self.focusable_rows.iter().position(|&row_idx| {
            self.item_at(self.rows[row_idx])
                .is_some_and(|item| item.href.as_deref() == Some(path))
        });
        if let Some(pos) = target {
            for (i, flag) in self.focus_flags.iter().enumerate() {
                flag.set(i == pos);
            }
        }
    }

    /// Whether a point falls inside the last rendered list area.
    pub fn contains_point(&self, column: u16, row: u16) -> bool {
        contains(self.last_area, column, row)
    }

    /// Resolves a mouse position to a row index using the last rendered
    /// areas. Only focusable rows are reported.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if !contains(self.last_area, column, row) {
            return None;
        }
        let row_idx = self
            .per_row_areas
            .iter()
            .position(|area| contains(*area, column, row))?;
        self.focusable_rows.contains(&row_idx).then_some(row_idx)
    }

    /// Focuses the row at `row_idx` (as reported by [`Self::hit_test`]) and
    /// activates it.
    pub fn click_row(&mut self, row_idx: usize) -> Option<Effect> {
        let pos = self.focusable_position(row_idx)?;
        for (i, flag) in self.focus_flags.iter().enumerate() {
            flag.set(i == pos);
        }
        self.activate_focused()
    }

    fn focusable_position(&self, row_idx: usize) -> Option<usize> {
        self.focusable_rows.iter().position(|&r| r == row_idx)
    }

    /// Rebuilds the flattened rows and focus flags from `sections`.
    fn rebuild_rows(&mut self) {
        self.rows.clear();
        self.focusable_rows.clear();
        for (section_idx, section) in self.sections.iter().enumerate() {
            self.rows.push(NavRow::Header(section_idx));
            for (item_idx, item) in section.items.iter().enumerate() {
                let row_idx = self.rows.len();
                self.rows.push(NavRow::Item(section_idx, item_idx));
                // Informational rows (no href) never take focus.
                if item.href.is_some() {
                    self.focusable_rows.push(row_idx);
                }
            }
        }
        self.focus_flags = (0..self.focusable_rows.len())
            .map(|i| FocusFlag::named(&format!("nav.list.item.{i}")))
            .collect();
    }
}

impl HasFocus for NavListState {
    /// Builds a focus subtree with each focusable row as a leaf under the
    /// container flag.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use navdeck_types::NavItem;

    fn sample_sections() -> Vec<NavSection> {
        vec![
            NavSection::new(
                "MENU",
                vec![
                    NavItem::new("Dashboard", "/dashboard").icon("dashboard"),
                    NavItem::new("Billing", "/dashboard/billing").icon("billing").badge("2"),
                    NavItem::new("Support", "/support").disabled(),
                ],
            ),
            NavSection::new("OPTIONS", vec![NavItem::label("More soon"), NavItem::new("Settings", "/dashboard/settings")]),
        ]
    }

    #[test]
    fn rows_include_headers_and_items_in_order() {
        let state = NavListState::new(sample_sections());
        assert_eq!(
            state.rows(),
            &[
                NavRow::Header(0),
                NavRow::Item(0, 0),
                NavRow::Item(0, 1),
                NavRow::Item(0, 2),
                NavRow::Header(1),
                NavRow::Item(1, 0),
                NavRow::Item(1, 1),
            ]
        );
    }

    #[test]
    fn items_without_href_are_never_focusable() {
        let mut state = NavListState::new(sample_sections());
        // Cycle through every focusable row and collect titles.
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(state.focused_item().unwrap().title.clone());
            state.cycle_focus(true);
        }
        assert_eq!(seen, ["Dashboard", "Billing", "Support", "Settings"]);
        assert!(!seen.contains(&"More soon".to_string()));
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut state = NavListState::new(sample_sections());
        state.cycle_focus(false);
        assert_eq!(state.focused_item().unwrap().title, "Settings");
        state.cycle_focus(true);
        assert_eq!(state.focused_item().unwrap().title, "Dashboard");
    }

    #[test]
    fn activating_navigable_row_emits_navigate() {
        let state = NavListState::new(sample_sections());
        assert_eq!(state.activate_focused(), Some(Effect::Navigate("/dashboard".into())));
    }

    #[test]
    fn activating_disabled_row_is_inert() {
        let mut state = NavListState::new(sample_sections());
        state.cycle_focus(true);
        state.cycle_focus(true);
        assert_eq!(state.focused_item().unwrap().title, "Support");
        assert_eq!(state.activate_focused(), None);
    }

    #[test]
    fn focus_path_selects_matching_row_exactly() {
        let mut state = NavListState::new(sample_sections());
        state.focus_path("/dashboard/settings");
        assert_eq!(state.focused_item().unwrap().title, "Settings");
        // Prefix of an existing path matches nothing; focus is unchanged.
        state.focus_path("/dash");
        assert_eq!(state.focused_item().unwrap().title, "Settings");
    }

    #[test]
    fn hit_test_honors_rendered_areas_and_skips_headers() {
        let mut state = NavListState::new(sample_sections());
        state.last_area = Rect::new(0, 0, 30, 7);
        state.per_row_areas = (0..7).map(|i| Rect::new(0, i as u16, 30, 1)).collect();
        // Row 0 is a section header.
        assert_eq!(state.hit_test(5, 0), None);
        assert_eq!(state.hit_test(5, 1), Some(1));
        // Outside the list area entirely.
        assert_eq!(state.hit_test(40, 1), None);
    }

    #[test]
    fn click_focuses_and_activates_row() {
        let mut state = NavListState::new(sample_sections());
        state.last_area = Rect::new(0, 0, 30, 7);
        state.per_row_areas = (0..7).map(|i| Rect::new(0, i as u16, 30, 1)).collect();
        let effect = state.click_row(2);
        assert_eq!(effect, Some(Effect::Navigate("/dashboard/billing".into())));
        assert_eq!(state.focused_item().unwrap().title, "Billing");
        // Clicking the disabled row focuses it but produces no effect.
        assert_eq!(state.click_row(3), None);
        assert_eq!(state.focused_item().unwrap().title, "Support");
    }
}
