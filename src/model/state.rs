use serde::{Deserialize, Serialize};

use super::filter::Filter;
use super::item::{Item, ItemId};

/// The whole application state: the list and the active filter.
///
/// Commands never mutate a state in place; each one returns a new value
/// (see `ops::item_ops`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Items in insertion order (display order, ignoring the filter)
    pub items: Vec<Item>,
    pub active_filter: Filter,
}

impl AppState {
    /// The state every session starts from
    pub fn seed() -> Self {
        let mut done = Item::new(1, "Todo 2");
        done.completed = true;
        AppState {
            items: vec![Item::new(0, "Todo 1"), done, Item::new(2, "Todo 3")],
            active_filter: Filter::All,
        }
    }

    /// The item with this id, if the list holds one
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}
