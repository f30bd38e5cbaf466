//! # Unistate Core
//!
//! Core traits and types for the Unistate architecture.
//!
//! This crate provides the fundamental abstractions for building a
//! unidirectional state container: a single state value, evolved only by pure
//! reducers, composed from independently defined slice reducers.
//!
//! ## Core Concepts
//!
//! - **State**: Immutable-by-convention value owned by the store
//! - **Action**: Tagged record describing an intended state change
//! - **Reducer**: Pure, total function `(State, Action) → State`
//! - **Slice**: The part of the root state owned by one reducer
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Pure reducers (no I/O, no mutation of their inputs)
//! - Unknown actions are identity passthroughs, never errors
//! - Composition fixed at compile time
//!
//! ## Example
//!
//! ```
//! use unistate_core::reducer::Reducer;
//!
//! #[derive(Debug, Clone)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//!     Unrecognized,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = i64;
//!     type Action = CounterAction;
//!
//!     fn initial_state(&self) -> i64 {
//!         0
//!     }
//!
//!     fn reduce(&self, state: i64, action: &CounterAction) -> i64 {
//!         match action {
//!             CounterAction::Increment => state + 1,
//!             CounterAction::Decrement => state - 1,
//!             CounterAction::Unrecognized => state,
//!         }
//!     }
//! }
//!
//! assert_eq!(CounterReducer.reduce(0, &CounterAction::Increment), 1);
//! assert_eq!(CounterReducer.reduce_or_init(None, &CounterAction::Unrecognized), 0);
//! ```

// Lets `#[derive(Action)]` expansions resolve `::unistate_core` inside this crate's own tests.
extern crate self as unistate_core;

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};

/// Action trait and raw (JSON) action decoding
pub mod action;

/// Entity and collection reducers
pub mod collection;

/// Reducer composition (`combine_reducers!`)
pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action) → State`
///
/// They contain all state transition logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// Every implementation must satisfy the reducer contract:
    ///
    /// - **Default state**: [`initial_state`](Reducer::initial_state) returns a
    ///   well-defined value without seeing any action.
    /// - **Unknown actions**: `reduce` returns its input unchanged for any
    ///   action it does not recognize.
    /// - **Purity**: the result depends only on the two arguments; no I/O.
    /// - **Totality**: `reduce` never fails. Unrecognized actions are no-ops.
    ///
    /// The state is taken by value and handed back, so the identity
    /// passthrough is literally `state`. Slices that consumers compare by
    /// reference keep their data behind an `Arc`.
    ///
    /// # Type Parameters
    ///
    /// - `State`: The slice of state this reducer owns
    /// - `Action`: The action type this reducer processes
    ///
    /// # Example
    ///
    /// ```
    /// use unistate_core::reducer::Reducer;
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq)]
    /// enum Theme {
    ///     Light,
    ///     Dark,
    /// }
    ///
    /// enum ThemeAction {
    ///     SetTheme(Theme),
    ///     Other,
    /// }
    ///
    /// struct ThemeReducer;
    ///
    /// impl Reducer for ThemeReducer {
    ///     type State = Theme;
    ///     type Action = ThemeAction;
    ///
    ///     fn initial_state(&self) -> Theme {
    ///         Theme::Light
    ///     }
    ///
    ///     fn reduce(&self, state: Theme, action: &ThemeAction) -> Theme {
    ///         match action {
    ///             ThemeAction::SetTheme(theme) => *theme,
    ///             ThemeAction::Other => state,
    ///         }
    ///     }
    /// }
    ///
    /// let theme = ThemeReducer.reduce(Theme::Light, &ThemeAction::SetTheme(Theme::Dark));
    /// assert_eq!(theme, Theme::Dark);
    /// ```
    pub trait Reducer {
        /// The slice of state this reducer operates on
        type State: Clone;

        /// The action type this reducer processes
        type Action;

        /// The default value of this slice
        ///
        /// Called whenever there is no previous state: store initialization,
        /// or a slice that has never been populated.
        fn initial_state(&self) -> Self::State;

        /// Reduce an action into the next state
        ///
        /// # Arguments
        ///
        /// - `state`: The previous state (moved in)
        /// - `action`: The action to process
        ///
        /// # Returns
        ///
        /// The next state. For unrecognized actions this is `state` itself.
        fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State;

        /// Reduce starting from an optional previous state
        ///
        /// An absent state is replaced by [`initial_state`](Reducer::initial_state)
        /// before the action is applied.
        fn reduce_or_init(&self, state: Option<Self::State>, action: &Self::Action) -> Self::State {
            let state = state.unwrap_or_else(|| self.initial_state());
            self.reduce(state, action)
        }
    }

    /// A reducer built from a pair of plain functions
    ///
    /// Created by [`from_fn`].
    #[derive(Clone)]
    pub struct FnReducer<S, A, I, F> {
        initial: I,
        reduce: F,
        _phantom: std::marker::PhantomData<fn(S, &A) -> S>,
    }

    impl<S, A, I, F> std::fmt::Debug for FnReducer<S, A, I, F> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("FnReducer").finish_non_exhaustive()
        }
    }

    /// Wraps an initial-state function and a transition function as a [`Reducer`]
    ///
    /// Convenient for small reducers that need no type of their own.
    ///
    /// # Example
    ///
    /// ```
    /// use unistate_core::reducer::{from_fn, Reducer};
    ///
    /// let doubling = from_fn(|| 1_u32, |state: u32, action: &bool| if *action { state * 2 } else { state });
    ///
    /// assert_eq!(doubling.reduce_or_init(None, &true), 2);
    /// assert_eq!(doubling.reduce(4, &false), 4);
    /// ```
    pub const fn from_fn<S, A, I, F>(initial: I, reduce: F) -> FnReducer<S, A, I, F>
    where
        S: Clone,
        I: Fn() -> S,
        F: Fn(S, &A) -> S,
    {
        FnReducer {
            initial,
            reduce,
            _phantom: std::marker::PhantomData,
        }
    }

    impl<S, A, I, F> Reducer for FnReducer<S, A, I, F>
    where
        S: Clone,
        I: Fn() -> S,
        F: Fn(S, &A) -> S,
    {
        type State = S;
        type Action = A;

        fn initial_state(&self) -> S {
            (self.initial)()
        }

        fn reduce(&self, state: S, action: &A) -> S {
            (self.reduce)(state, action)
        }
    }
}

pub use action::{Action, ActionError};
pub use collection::{CollectionReducer, EntityReducer};
pub use reducer::{from_fn, Reducer};

#[cfg(test)]
mod tests {
    use super::reducer::{from_fn, Reducer};

    #[derive(Debug)]
    enum TestAction {
        Add(i32),
        Noop,
    }

    fn adder() -> impl Reducer<State = i32, Action = TestAction> {
        from_fn(
            || 10,
            |state: i32, action: &TestAction| match action {
                TestAction::Add(n) => state + n,
                TestAction::Noop => state,
            },
        )
    }

    #[test]
    fn test_reduce_or_init_uses_initial_state_when_absent() {
        let reducer = adder();
        assert_eq!(reducer.reduce_or_init(None, &TestAction::Noop), 10);
        assert_eq!(reducer.reduce_or_init(None, &TestAction::Add(5)), 15);
    }

    #[test]
    fn test_reduce_or_init_keeps_present_state() {
        let reducer = adder();
        assert_eq!(reducer.reduce_or_init(Some(1), &TestAction::Add(1)), 2);
        assert_eq!(reducer.reduce_or_init(Some(1), &TestAction::Noop), 1);
    }
}
