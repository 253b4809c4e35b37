use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Intent;
use crate::tui::app::{App, EditTarget};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => confirm_edit(app),
        (_, KeyCode::Esc) => app.end_edit(),

        // Cursor movement (by grapheme)
        (_, KeyCode::Left) => {
            if let Some(pos) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = pos;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(pos) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = pos;
            }
        }
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => app.edit_cursor = 0,
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            app.edit_cursor = app.edit_buffer.len();
        }

        // Deletion
        (_, KeyCode::Backspace) => {
            if let Some(pos) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(pos..app.edit_cursor, "");
                app.edit_cursor = pos;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(end) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..end, "");
            }
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.edit_buffer.replace_range(..app.edit_cursor, "");
            app.edit_cursor = 0;
        }

        // Typing
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Commit the edit buffer to its target.
///
/// A new item is only submitted when the buffer holds more than whitespace;
/// the input then stays open for the next one. A blank submit closes it.
/// Renames are submitted verbatim.
fn confirm_edit(app: &mut App) {
    let Some(target) = app.edit_target else {
        app.end_edit();
        return;
    };

    match target {
        EditTarget::NewItem => {
            if app.edit_buffer.trim().is_empty() {
                app.end_edit();
                return;
            }
            let text = std::mem::take(&mut app.edit_buffer);
            app.edit_cursor = 0;
            app.dispatch(Intent::Add(text));
            if let Some(id) = app.state().items.last().map(|item| item.id) {
                app.select_id(id);
            }
        }
        EditTarget::Rename(id) => {
            let text = std::mem::take(&mut app.edit_buffer);
            app.end_edit();
            app.dispatch(Intent::Rename(id, text));
            app.select_id(id);
        }
    }
}
