use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Filter, Intent};
use crate::ops::views;
use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => {
            app.show_help = true;
            app.help_scroll = 0;
        }

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX),

        // Item intents
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_item().map(|item| item.id) {
                app.dispatch(Intent::Toggle(id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_item().map(|item| item.id) {
                app.dispatch(Intent::Remove(id));
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => app.begin_rename(),
        KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('o') => app.begin_new_item(),

        // Bulk intents
        KeyCode::Char('A') => {
            let target = views::toggle_all_target(app.state());
            app.dispatch(Intent::ToggleAll(target));
        }
        KeyCode::Char('C') => app.dispatch(Intent::ClearCompleted),

        // Filters
        KeyCode::Char('1') => set_filter(app, Filter::All),
        KeyCode::Char('2') => set_filter(app, Filter::Active),
        KeyCode::Char('3') => set_filter(app, Filter::Completed),
        KeyCode::Tab => {
            let next = app.state().active_filter.next();
            set_filter(app, next);
        }
        KeyCode::BackTab => {
            let prev = app.state().active_filter.prev();
            set_filter(app, prev);
        }
        _ => {}
    }
}

/// Switch filters, keeping the cursor on the same item when it stays visible
fn set_filter(app: &mut App, filter: Filter) {
    let selected = app.selected_item().map(|item| item.id);
    app.dispatch(Intent::SetFilter(filter));
    match selected {
        Some(id) if app.visible_items().iter().any(|item| item.id == id) => app.select_id(id),
        _ => app.cursor = 0,
    }
}

pub(super) fn handle_help(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => app.help_scroll = 0,
        _ => {}
    }
}
