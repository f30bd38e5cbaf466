//! # Counter Example
//!
//! A simple counter demonstrating the Unistate architecture.
//!
//! This example showcases:
//! - The smallest useful reducer (`i64` state, two actions)
//! - Store usage with a render listener
//! - Unsubscribing
//!
//! ## Example
//!
//! ```
//! use counter::{CounterAction, CounterReducer};
//! use unistate_runtime::Store;
//!
//! let store = Store::new(CounterReducer::new());
//! assert_eq!(*store.get_state(), 0);
//!
//! store.dispatch(CounterAction::Increment)?;
//! assert_eq!(*store.get_state(), 1);
//! # Ok::<(), unistate_runtime::StoreError>(())
//! ```

use serde::{Deserialize, Serialize};
use unistate_core::reducer::Reducer;
use unistate_macros::Action;

/// Counter actions
///
/// Decoded from `{"type":"INCREMENT"}` / `{"type":"DECREMENT"}`; anything else
/// is [`CounterAction::Unrecognized`].
#[derive(Action, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    /// Increment the counter by 1
    Increment,
    /// Decrement the counter by 1
    Decrement,
    /// Recognized by no reducer
    #[unrecognized]
    #[serde(other)]
    Unrecognized,
}

/// Counter reducer
///
/// The count starts at 0 and saturates at the bounds of `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = i64;
    type Action = CounterAction;

    fn initial_state(&self) -> i64 {
        0
    }

    fn reduce(&self, state: i64, action: &CounterAction) -> i64 {
        match action {
            CounterAction::Increment => state.saturating_add(1),
            CounterAction::Decrement => state.saturating_sub(1),
            CounterAction::Unrecognized => state,
        }
    }
}
