//! Content pane: current route header plus a deployment summary.
//!
//! Page bodies belong to the routing collaborator; this pane shows which
//! route is active and, on the dashboard, the sign-in providers the
//! deployment assembled at startup.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct ContentComponent;

impl Component for ContentComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(" Page "), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let mut lines = vec![
            Line::from(Span::styled(app.current_path.clone(), theme.accent_emphasis_style())),
            Line::default(),
        ];

        if app.current_path == "/dashboard" {
            lines.push(Line::from(Span::styled("Sign-in providers", theme.text_secondary_style())));
            for provider in app.ctx.providers.providers() {
                lines.push(Line::from(vec![
                    Span::styled("  ● ", theme.status_success()),
                    Span::styled(provider.kind.display_name(), theme.text_primary_style()),
                    Span::styled(
                        format!("  ({} credentials)", provider.credentials.len()),
                        theme.text_muted_style(),
                    ),
                ]));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "Page content is rendered by the host application.",
                theme.text_muted_style(),
            )));
        }

        if app.ctx.debug_enabled {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("{} · theme {}", chrono::Local::now().format("%H:%M:%S"), app.ctx.active_theme_id),
                theme.text_muted_style(),
            )));
        }

        frame.render_widget(Paragraph::new(lines).style(th::panel_style(theme)), inner);
    }
}
