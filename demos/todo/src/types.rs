//! Domain types for the Todo example.
//!
//! A todo list is an ordered collection of todo items plus the filter that
//! decides which of them are shown. Both are driven by one action type.

use serde::{Deserialize, Serialize};
use unistate_macros::Action;

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Caller-supplied identifier
    pub id: u64,
    /// Description of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not yet completed todo
    #[must_use]
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Returns a copy with `completed` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Which todos are shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    /// Every todo
    #[default]
    ShowAll,
    /// Todos not yet completed
    ShowActive,
    /// Completed todos only
    ShowCompleted,
}

impl VisibilityFilter {
    /// Whether `todo` passes this filter
    #[must_use]
    pub const fn admits(self, todo: &Todo) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowActive => !todo.completed,
            Self::ShowCompleted => todo.completed,
        }
    }
}

/// Actions of the todo application
///
/// Serialized internally tagged on `type`, e.g.
/// `{"type":"ADD_TODO","id":0,"text":"Learn"}`. Any other tag decodes to
/// [`TodoAppAction::Unrecognized`].
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAppAction {
    /// Append a new todo
    AddTodo {
        /// Identifier of the new todo
        id: u64,
        /// Description of the new todo
        text: String,
    },

    /// Flip `completed` on every todo with this id
    ToggleTodo {
        /// Todo to toggle
        id: u64,
    },

    /// Replace the active filter
    SetVisibilityFilter {
        /// The new filter
        filter: VisibilityFilter,
    },

    /// Recognized by no reducer
    #[unrecognized]
    #[serde(other)]
    Unrecognized,
}
