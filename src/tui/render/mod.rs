pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::ops::views;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let footer_height = if views::footer_visible(app.state()) { 1 } else { 0 };

    // Layout: header (3 rows) | list | footer (1 row, hidden when empty) | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(footer_height),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    if footer_height > 0 {
        footer::render_footer(frame, app, chunks[2]);
    }
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// Spans for an edit buffer with a block cursor at byte offset `cursor`
pub(super) fn edit_spans<'a>(
    buffer: &str,
    cursor: usize,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'a>> {
    let cursor = cursor.min(buffer.len());
    vec![
        Span::styled(buffer[..cursor].to_string(), text_style),
        Span::styled("\u{258C}", cursor_style), // ▌ cursor
        Span::styled(buffer[cursor..].to_string(), text_style),
    ]
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use crate::model::{AppState, Intent};

    #[test]
    fn full_screen_seed() {
        let mut app = seed_app();
        let out = render_app(&mut app);
        assert!(out.contains(" todos"));
        assert!(out.contains("Mark all as complete"));
        assert!(out.contains("Todo 1"));
        assert!(out.contains("2 items left"));
        assert!(out.contains("? help"));
    }

    #[test]
    fn footer_hidden_for_empty_list() {
        let mut app = app_with_state(AppState::default());
        let out = render_app(&mut app);
        assert!(out.contains("Nothing to do"));
        assert!(!out.contains("items left"));
    }

    #[test]
    fn help_overlay_on_top() {
        let mut app = seed_app();
        app.show_help = true;
        assert!(render_app(&mut app).contains("Key Bindings"));
    }

    #[test]
    fn removing_last_item_hides_footer() {
        let mut app = seed_app();
        for id in 0..3 {
            app.dispatch(Intent::Remove(id));
        }
        assert!(!render_app(&mut app).contains("items left"));
    }
}
