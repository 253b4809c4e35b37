use crate::model::{AppState, Item};

/// Items that pass the active filter, in list order
pub fn visible_items(state: &AppState) -> Vec<&Item> {
    state
        .items
        .iter()
        .filter(|item| state.active_filter.matches(item))
        .collect()
}

/// Number of items not yet completed
pub fn active_count(state: &AppState) -> usize {
    state.items.iter().filter(|item| !item.completed).count()
}

/// True when there is at least one item and all of them are completed
pub fn all_completed(state: &AppState) -> bool {
    !state.items.is_empty() && state.items.iter().all(|item| item.completed)
}

pub fn has_completed(state: &AppState) -> bool {
    state.items.iter().any(|item| item.completed)
}

/// The footer (count, filters, clear button) shows only for a non-empty list
pub fn footer_visible(state: &AppState) -> bool {
    !state.items.is_empty()
}

/// "1 item left" / "N items left"
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

/// The value a "mark all as complete" click sends to `toggle_all`:
/// complete everything unless everything is already complete.
pub fn toggle_all_target(state: &AppState) -> bool {
    !all_completed(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Filter;
    use crate::ops::item_ops::{clear_completed, set_filter, toggle_all, toggle_item};

    fn visible_ids(state: &AppState) -> Vec<u64> {
        visible_items(state).iter().map(|i| i.id).collect()
    }

    #[test]
    fn visible_items_by_filter() {
        let seed = AppState::seed();
        assert_eq!(visible_ids(&seed), vec![0, 1, 2]);
        assert_eq!(visible_ids(&set_filter(&seed, Filter::Active)), vec![0, 2]);
        assert_eq!(visible_ids(&set_filter(&seed, Filter::Completed)), vec![1]);
    }

    #[test]
    fn completed_filter_on_seed() {
        let state = set_filter(&AppState::seed(), Filter::Completed);
        let visible = visible_items(&state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Todo 2");
        assert!(visible[0].completed);
    }

    #[test]
    fn active_count_after_toggle() {
        let seed = AppState::seed();
        assert_eq!(active_count(&seed), 2);
        let state = toggle_item(&seed, 1);
        assert!(!state.items[1].completed);
        assert_eq!(active_count(&state), 3);
    }

    #[test]
    fn all_completed_requires_items() {
        assert!(!all_completed(&AppState::default()));
        assert!(!all_completed(&AppState::seed()));
        assert!(all_completed(&toggle_all(&AppState::seed(), true)));
    }

    #[test]
    fn has_completed_and_footer() {
        let seed = AppState::seed();
        assert!(has_completed(&seed));
        assert!(!has_completed(&clear_completed(&seed)));
        assert!(footer_visible(&seed));
        assert!(!footer_visible(&AppState::default()));
    }

    #[test]
    fn items_left_pluralization() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(2), "2 items left");
    }

    #[test]
    fn toggle_all_target_flips_when_everything_is_done() {
        let seed = AppState::seed();
        assert!(toggle_all_target(&seed));
        assert!(!toggle_all_target(&toggle_all(&seed, true)));
        assert!(toggle_all_target(&AppState::default()));
    }
}
