use std::fmt;

use tracing::{debug, trace};

use crate::model::{AppState, Intent};

use super::item_ops;

/// Compute the state that follows `state` once `intent` is applied
pub fn apply(state: &AppState, intent: &Intent) -> AppState {
    match intent {
        Intent::Add(text) => item_ops::add_item(state, text),
        Intent::Remove(id) => item_ops::remove_item(state, *id),
        Intent::Toggle(id) => item_ops::toggle_item(state, *id),
        Intent::Rename(id, text) => item_ops::rename_item(state, *id, text),
        Intent::SetFilter(filter) => item_ops::set_filter(state, *filter),
        Intent::ClearCompleted => item_ops::clear_completed(state),
        Intent::ToggleAll(completed) => item_ops::toggle_all(state, *completed),
    }
}

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Owner of the current state.
///
/// `dispatch` replaces the state wholesale and, when the new value differs
/// from the old one, hands it to every subscriber in registration order.
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Store {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a callback run after every state change
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply an intent. Returns whether the state changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let next = apply(&self.state, &intent);
        if next == self.state {
            trace!(%intent, "intent left state unchanged");
            return false;
        }
        debug!(%intent, items = next.items.len(), filter = %next.active_filter, "dispatched");
        self.state = next;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        true
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(AppState::seed())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::model::{Filter, Item};
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_dispatches_every_intent() {
        let seed = AppState::seed();
        assert_eq!(apply(&seed, &Intent::Add("x".into())).items.len(), 4);
        assert_eq!(apply(&seed, &Intent::Remove(0)).items.len(), 2);
        assert!(!apply(&seed, &Intent::Toggle(1)).items[1].completed);
        assert_eq!(
            apply(&seed, &Intent::Rename(2, "renamed".into())).items[2].name,
            "renamed"
        );
        assert_eq!(
            apply(&seed, &Intent::SetFilter(Filter::Active)).active_filter,
            Filter::Active
        );
        assert_eq!(apply(&seed, &Intent::ClearCompleted).items.len(), 2);
        assert!(
            apply(&seed, &Intent::ToggleAll(true))
                .items
                .iter()
                .all(|i| i.completed)
        );
    }

    #[test]
    fn default_store_starts_from_seed() {
        assert_eq!(Store::default().state(), &AppState::seed());
    }

    #[test]
    fn dispatch_replaces_state() {
        let mut store = Store::default();
        assert!(store.dispatch(Intent::Add("Buy milk".into())));
        assert_eq!(
            store.state().items.last(),
            Some(&Item::new(3, "Buy milk"))
        );
    }

    #[test]
    fn subscribers_see_changes_only() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let mut store = Store::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.items.len()));

        assert!(store.dispatch(Intent::Remove(0)));
        assert!(!store.dispatch(Intent::Remove(0)));
        assert!(!store.dispatch(Intent::Add("   ".into())));
        assert!(store.dispatch(Intent::Add("new".into())));

        assert_eq!(*seen.borrow(), vec![2, 3]);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let mut store = Store::default();
        let first = Rc::clone(&order);
        store.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        store.subscribe(move |_| second.borrow_mut().push("second"));

        store.dispatch(Intent::ClearCompleted);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
