use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Item;
use crate::ops::views;
use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

use super::edit_spans;

/// Render the toggle-all row and the visible items
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.state().items.is_empty() {
        let empty = Paragraph::new(" Nothing to do. Press a to add an item.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Row 0 is the toggle-all row; items scroll underneath it
    let visible_height = (area.height as usize).saturating_sub(1);
    if visible_height == 0 {
        let paragraph = Paragraph::new(toggle_all_line(app)).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height + 1);
    lines.push(toggle_all_line(app));

    let items = app.visible_items();
    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" No {} items", app.state().active_filter.label().to_lowercase()),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }
    let end = items.len().min(app.scroll_offset + visible_height);
    for (row, item) in items.iter().enumerate().take(end).skip(app.scroll_offset) {
        lines.push(item_line(app, item, row == app.cursor, width));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn toggle_all_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let all_done = views::all_completed(app.state());
    Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            if all_done { "[x]" } else { "[ ]" },
            Style::default().fg(app.theme.checkbox_color(all_done)).bg(bg),
        ),
        Span::styled(
            " Mark all as complete",
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ])
}

fn item_line(app: &App, item: &Item, is_cursor: bool, width: usize) -> Line<'static> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let bg_style = Style::default().bg(bg);

    let marker = if is_cursor { "\u{258E}" } else { " " }; // ▎
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            item.checkbox(),
            Style::default().fg(app.theme.checkbox_color(item.completed)).bg(bg),
        ),
        Span::styled(" ", bg_style),
    ];
    let prefix_width = 5;

    let renaming = app.mode == Mode::Edit && app.edit_target == Some(EditTarget::Rename(item.id));
    if renaming {
        spans.extend(edit_spans(
            &app.edit_buffer,
            app.edit_cursor,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    } else {
        let mut name_style = Style::default().fg(app.theme.name_color(item.completed)).bg(bg);
        if item.completed {
            name_style = name_style.add_modifier(Modifier::CROSSED_OUT);
        }
        let name = truncate_to_width(&item.name, width.saturating_sub(prefix_width + 1));
        spans.push(Span::styled(name, name_style));
    }

    // Fill the rest of the row so the selection background spans the width
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), bg_style));
    }
    Line::from(spans)
}
