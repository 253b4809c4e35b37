use serde::Serialize;

use crate::model::{AppState, Filter, Item};
use crate::ops::views;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct StateJson<'a> {
    pub filter: Filter,
    pub items: Vec<&'a Item>,
    pub active_count: usize,
    pub all_completed: bool,
    pub has_completed: bool,
}

impl<'a> StateJson<'a> {
    pub fn new(state: &'a AppState, visible_only: bool) -> Self {
        let items = if visible_only {
            views::visible_items(state)
        } else {
            state.items.iter().collect()
        };
        StateJson {
            filter: state.active_filter,
            items,
            active_count: views::active_count(state),
            all_completed: views::all_completed(state),
            has_completed: views::has_completed(state),
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One line per item plus a footer line, like the TUI's list and footer
pub fn format_state_text(state: &AppState, visible_only: bool) -> String {
    if !views::footer_visible(state) {
        return "(no items)\n".to_string();
    }
    let items: Vec<&Item> = if visible_only {
        views::visible_items(state)
    } else {
        state.items.iter().collect()
    };
    let id_width = items
        .iter()
        .map(|item| item.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{} {:<width$}  {}\n",
            item.checkbox(),
            item.id,
            item.name,
            width = id_width
        ));
    }
    out.push_str(&format!(
        "{} \u{00B7} filter: {}\n",
        views::items_left_label(views::active_count(state)),
        state.active_filter
    ));
    out
}
