//! Todo example demonstrating reducer composition.
//!
//! This example shows how to build a todo list application on the Unistate
//! store. It demonstrates:
//!
//! - An item reducer lifted over a collection (`TodoReducer` → `TodosReducer`)
//! - A scalar slice reducer (`VisibilityFilterReducer`)
//! - Composition with `combine_reducers!`
//! - Dispatching raw JSON actions at the boundary
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```
//! use todo::{visible_todos, TodoAppAction, TodoAppReducer, VisibilityFilter};
//! use unistate_runtime::create_store;
//!
//! let store = create_store(TodoAppReducer::default());
//!
//! store.dispatch(TodoAppAction::AddTodo { id: 0, text: "Learn".to_string() })?;
//! store.dispatch(TodoAppAction::AddTodo { id: 1, text: "Shop".to_string() })?;
//! store.dispatch_value(serde_json::json!({ "type": "TOGGLE_TODO", "id": 1 }))?;
//! store.dispatch(TodoAppAction::SetVisibilityFilter { filter: VisibilityFilter::ShowActive })?;
//!
//! let state = store.get_state();
//! let visible = visible_todos(&state);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].text, "Learn");
//! # Ok::<(), unistate_runtime::StoreError>(())
//! ```

pub mod reducer;
pub mod selectors;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoAppReducer, TodoAppState, TodoReducer, TodosReducer, VisibilityFilterReducer};
pub use selectors::{active_count, visible_todos};
pub use types::{Todo, TodoAppAction, VisibilityFilter};
