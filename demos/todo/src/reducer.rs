//! Reducer logic for the Todo application.
//!
//! Three reducers, one per level of the state tree:
//!
//! - [`TodoReducer`] evolves one todo item;
//! - [`TodosReducer`] lifts it over the ordered todo list;
//! - [`VisibilityFilterReducer`] owns the active filter.
//!
//! [`TodoAppReducer`] combines the list and the filter into [`TodoAppState`].

use crate::types::{Todo, TodoAppAction, VisibilityFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use unistate_core::collection::{CollectionReducer, EntityReducer};
use unistate_core::combine_reducers;
use unistate_core::reducer::Reducer;

/// Reducer for a single todo item
///
/// Items are shared through `Arc`: toggling builds a new item, every other
/// action hands back the same allocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EntityReducer for TodoReducer {
    type Entity = Arc<Todo>;
    type Action = TodoAppAction;

    fn create(&self, action: &TodoAppAction) -> Option<Arc<Todo>> {
        match action {
            TodoAppAction::AddTodo { id, text } => Some(Arc::new(Todo::new(*id, text.clone()))),
            _ => None,
        }
    }

    fn targets_existing(&self, action: &TodoAppAction) -> bool {
        matches!(action, TodoAppAction::ToggleTodo { .. })
    }

    fn reduce(&self, todo: Arc<Todo>, action: &TodoAppAction) -> Arc<Todo> {
        match action {
            TodoAppAction::ToggleTodo { id } if *id == todo.id => Arc::new(todo.toggled()),
            _ => todo,
        }
    }
}

/// Reducer for the ordered todo list
pub type TodosReducer = CollectionReducer<TodoReducer>;

/// Reducer for the active visibility filter
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAppAction;

    fn initial_state(&self) -> VisibilityFilter {
        VisibilityFilter::ShowAll
    }

    fn reduce(&self, state: VisibilityFilter, action: &TodoAppAction) -> VisibilityFilter {
        match action {
            TodoAppAction::SetVisibilityFilter { filter } => *filter,
            _ => state,
        }
    }
}

combine_reducers! {
    /// Root reducer of the todo application
    #[derive(Clone, Copy, Debug, Default)]
    pub struct TodoAppReducer;

    /// Root state of the todo application
    ///
    /// Serializes as `{"todos":[...],"visibilityFilter":"SHOW_ALL"}`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TodoAppState;

    action: TodoAppAction;

    slices {
        todos: TodosReducer,
        #[serde(rename = "visibilityFilter")]
        visibility_filter: VisibilityFilterReducer,
    }
}
