use serde::{Deserialize, Serialize};

/// Item identifier, unique among the items currently in the list
pub type ItemId = u64;

/// A single task entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display label. Non-empty after an add; a rename stores text verbatim.
    pub name: String,
    pub completed: bool,
}

impl Item {
    /// Create an open (not completed) item
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Item {
            id,
            name: name.into(),
            completed: false,
        }
    }

    /// The checkbox shown next to the item
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}
