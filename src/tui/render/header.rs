use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode};

use super::edit_spans;

pub const PLACEHOLDER: &str = "What needs to be done?";

/// Render the title, the new-item input and a separator line
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);

    let title = Line::from(vec![
        Span::styled(" ", bg_style),
        Span::styled(
            "todos",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let prompt = Span::styled(" \u{276F} ", Style::default().fg(app.theme.highlight).bg(bg));
    let editing_new =
        app.mode == Mode::Edit && app.edit_target == Some(EditTarget::NewItem);
    let mut input_spans = vec![prompt];
    if editing_new {
        input_spans.extend(edit_spans(
            &app.edit_buffer,
            app.edit_cursor,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    } else {
        input_spans.push(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![title, Line::from(input_spans), separator]).style(bg_style);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn header_text(app: &App) -> String {
        render_to_string(TERM_W, 3, |frame, area| render_header(frame, app, area))
    }

    #[test]
    fn shows_title_and_placeholder() {
        let app = seed_app();
        let out = header_text(&app);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " todos");
        assert_eq!(lines[1], " \u{276F} What needs to be done?");
        assert_eq!(lines[2], "\u{2500}".repeat(TERM_W as usize));
    }

    #[test]
    fn shows_buffer_while_adding() {
        let mut app = seed_app();
        app.begin_new_item();
        app.edit_buffer = "Buy milk".into();
        app.edit_cursor = 3;
        let out = header_text(&app);
        assert!(out.contains("Buy\u{258C} milk"));
        assert!(!out.contains(PLACEHOLDER));
    }

    #[test]
    fn rename_does_not_touch_the_input_line() {
        let mut app = seed_app();
        app.begin_rename();
        assert!(header_text(&app).contains(PLACEHOLDER));
    }
}
