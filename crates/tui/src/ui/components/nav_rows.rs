//! Shared row rendering for both sidebar variants.
//!
//! Rendering walks the flattened rows of `NavListState`, producing one line
//! per row inside the given inner area:
//!
//! - section headers use the bold secondary style;
//! - the row whose `href` equals the current path renders with the selection
//!   style;
//! - disabled rows render muted;
//! - badges render right-aligned with the badge style;
//! - rows without an `href` render as plain muted text (no icon column
//!   marker, no focus).
//!
//! Per-row areas are recorded back into the state for mouse hit testing.

use navdeck_types::icon_glyph;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::components::nav_list::NavRow;
use crate::ui::theme::theme_helpers as th;

/// Renders the navigation rows into `inner` and records hit-test areas.
pub(crate) fn render_nav_rows(frame: &mut Frame, inner: Rect, app: &mut App) {
    let theme = &*app.ctx.theme;
    let current_path = app.current_path.clone();

    let rows: Vec<NavRow> = app.nav.rows().to_vec();
    let mut areas = vec![Rect::default(); rows.len()];

    for (row_idx, row) in rows.iter().enumerate() {
        let offset = row_idx as u16;
        if offset >= inner.height {
            break;
        }
        let row_area = Rect::new(inner.x, inner.y + offset, inner.width, 1);
        areas[row_idx] = row_area;

        let line = match row {
            NavRow::Header(section_idx) => {
                let title = app.nav.sections[*section_idx].title.clone();
                Line::from(Span::styled(title, th::section_header_style(theme)))
            }
            NavRow::Item(..) => {
                let Some(item) = app.nav.item_at(*row) else {
                    continue;
                };
                let item = item.clone();
                let focused = app.nav.is_row_focused(row_idx);
                let active = item.is_active(&current_path);

                let mut style = if item.disabled {
                    theme.text_muted_style()
                } else if active {
                    theme.selection_style().add_modifier(Modifier::BOLD)
                } else {
                    theme.text_primary_style()
                };
                if focused && !item.disabled {
                    style = style.fg(theme.roles().accent_primary).add_modifier(Modifier::BOLD);
                }

                let mut spans = Vec::with_capacity(4);
                if item.href.is_some() {
                    let glyph = icon_glyph(item.icon.as_deref());
                    spans.push(Span::styled(format!(" {glyph} "), style));
                    spans.push(Span::styled(item.title.clone(), style));
                } else {
                    // Informational row: plain muted text, no link affordance.
                    spans.push(Span::styled(format!("   {}", item.title), theme.text_muted_style()));
                }

                if let Some(badge) = &item.badge {
                    let used: usize = spans.iter().map(|span| span.content.width()).sum();
                    let badge_text = format!(" {badge} ");
                    let pad = (inner.width as usize).saturating_sub(used + badge_text.width());
                    spans.push(Span::styled(" ".repeat(pad), style));
                    spans.push(Span::styled(badge_text, th::badge_style(theme)));
                }
                Line::from(spans)
            }
        };
        frame.render_widget(Paragraph::new(line).style(th::panel_style(theme)), row_area);
    }

    app.nav.last_area = inner;
    app.nav.per_row_areas = areas;
}
