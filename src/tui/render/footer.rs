use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::ops::views;
use crate::tui::app::App;
use crate::util::unicode::display_width;

pub const CLEAR_COMPLETED: &str = "Clear completed";

/// Render the footer: items left, filter tabs and the clear-completed hint
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let width = area.width as usize;
    let state = app.state();

    let mut spans = vec![Span::styled(
        format!(" {}", views::items_left_label(views::active_count(state))),
        Style::default().fg(app.theme.text).bg(bg),
    )];

    spans.push(Span::styled("   ", bg_style));
    for (i, filter) in Filter::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", bg_style));
        }
        let style = if *filter == state.active_filter {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(filter.label(), style));
    }

    if views::has_completed(state) {
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(CLEAR_COMPLETED) + 1;
        if used + hint_width < width {
            spans.push(Span::styled(" ".repeat(width - used - hint_width), bg_style));
            spans.push(Span::styled(
                CLEAR_COMPLETED,
                Style::default().fg(app.theme.red).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}
