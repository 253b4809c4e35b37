use crate::model::{AppState, Filter, Item, ItemId};

// ---------------------------------------------------------------------------
// List commands
//
// Every command takes the current state by reference and returns a new one.
// Unknown ids and blank new-item text leave the state as it was.
// ---------------------------------------------------------------------------

/// The id the next added item receives: one past the largest id, or 0
pub fn next_id(items: &[Item]) -> ItemId {
    items.iter().map(|item| item.id).max().map_or(0, |max| max + 1)
}

/// Append a new open item named `text.trim()`. Blank text is ignored.
pub fn add_item(state: &AppState, text: &str) -> AppState {
    let name = text.trim();
    if name.is_empty() {
        return state.clone();
    }
    let mut items = state.items.clone();
    items.push(Item::new(next_id(&items), name));
    AppState {
        items,
        active_filter: state.active_filter,
    }
}

pub fn remove_item(state: &AppState, id: ItemId) -> AppState {
    AppState {
        items: state
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect(),
        active_filter: state.active_filter,
    }
}

/// Flip `completed` on the matching item
pub fn toggle_item(state: &AppState, id: ItemId) -> AppState {
    map_item(state, id, |item| item.completed = !item.completed)
}

/// Set the name of the matching item to `text` exactly as given.
///
/// Unlike [`add_item`] there is no trimming and no empty check here.
pub fn rename_item(state: &AppState, id: ItemId, text: &str) -> AppState {
    map_item(state, id, |item| item.name = text.to_string())
}

pub fn set_filter(state: &AppState, filter: Filter) -> AppState {
    AppState {
        items: state.items.clone(),
        active_filter: filter,
    }
}

/// Drop every completed item
pub fn clear_completed(state: &AppState) -> AppState {
    AppState {
        items: state
            .items
            .iter()
            .filter(|item| !item.completed)
            .cloned()
            .collect(),
        active_filter: state.active_filter,
    }
}

/// Set `completed` on every item to `completed`
pub fn toggle_all(state: &AppState, completed: bool) -> AppState {
    AppState {
        items: state
            .items
            .iter()
            .map(|item| Item {
                completed,
                ..item.clone()
            })
            .collect(),
        active_filter: state.active_filter,
    }
}

/// Copy the state, applying `f` to the item with the given id only
fn map_item(state: &AppState, id: ItemId, f: impl Fn(&mut Item)) -> AppState {
    if state.find(id).is_none() {
        return state.clone();
    }
    AppState {
        items: state
            .items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if item.id == id {
                    f(&mut item);
                }
                item
            })
            .collect(),
        active_filter: state.active_filter,
    }
}
