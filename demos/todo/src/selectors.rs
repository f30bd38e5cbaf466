//! Derived views over [`TodoAppState`].

use crate::reducer::TodoAppState;
use crate::types::Todo;
use std::sync::Arc;

/// The todos admitted by the active visibility filter, in list order
///
/// The returned handles share their items with the state.
#[must_use]
pub fn visible_todos(state: &TodoAppState) -> Vec<Arc<Todo>> {
    state
        .todos
        .iter()
        .filter(|todo| state.visibility_filter.admits(todo))
        .cloned()
        .collect()
}

/// Number of todos not yet completed
#[must_use]
pub fn active_count(state: &TodoAppState) -> usize {
    state.todos.iter().filter(|todo| !todo.completed).count()
}
