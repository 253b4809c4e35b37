use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode::display_width;

const NAVIGATE_HINTS: &str = "a add  space toggle  e rename  d delete  ? help";
const EDIT_HINTS: &str = "Enter save  Esc cancel";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let (label, hint) = match app.mode {
        Mode::Navigate => {
            if !app.show_key_hints {
                let blank = Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)));
                frame.render_widget(Paragraph::new(blank), area);
                return;
            }
            (None, NAVIGATE_HINTS)
        }
        Mode::Edit => {
            let label = match app.edit_target {
                Some(EditTarget::Rename(_)) => "rename",
                _ => "new item",
            };
            (Some(label), EDIT_HINTS)
        }
    };

    let mut spans = Vec::new();
    if let Some(label) = label {
        spans.push(Span::styled(
            format!(" -- {} --", label),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }
    // Right-align the hint when it fits
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint) + 1;
    if content_width + hint_width <= width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, dim));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
