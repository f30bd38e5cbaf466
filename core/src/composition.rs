//! Reducer composition
//!
//! [`combine_reducers!`](crate::combine_reducers) builds one root reducer from a
//! fixed set of slice reducers. It generates:
//!
//! - the root reducer struct, one field per slice reducer;
//! - the root state struct, one field per slice state, statically typed;
//! - the [`Reducer`](crate::reducer::Reducer) impl tying them together.
//!
//! On every call the root reducer hands the same action to each slice reducer
//! along with that slice's previous value, and assembles a new root state from
//! the results. A slice reducer that ignores the action returns its slice
//! as-is, so unchanged slices keep their identity inside the new root.
//!
//! All slice reducers must share the root action type; a mismatch is a
//! compile error rather than a runtime surprise. Sibling slices must not
//! depend on the order in which they are updated.
//!
//! # Example
//!
//! ```
//! use unistate_core::combine_reducers;
//! use unistate_core::reducer::Reducer;
//!
//! #[derive(Debug, Clone)]
//! pub enum AppAction {
//!     Increment,
//!     Rename(String),
//! }
//!
//! #[derive(Debug, Clone, Default)]
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = u32;
//!     type Action = AppAction;
//!
//!     fn initial_state(&self) -> u32 {
//!         0
//!     }
//!
//!     fn reduce(&self, state: u32, action: &AppAction) -> u32 {
//!         match action {
//!             AppAction::Increment => state + 1,
//!             AppAction::Rename(_) => state,
//!         }
//!     }
//! }
//!
//! #[derive(Debug, Clone, Default)]
//! struct NameReducer;
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!
//!     fn initial_state(&self) -> String {
//!         String::new()
//!     }
//!
//!     fn reduce(&self, state: String, action: &AppAction) -> String {
//!         match action {
//!             AppAction::Rename(name) => name.clone(),
//!             AppAction::Increment => state,
//!         }
//!     }
//! }
//!
//! combine_reducers! {
//!     /// Root reducer
//!     #[derive(Debug, Clone, Default)]
//!     pub struct AppReducer;
//!
//!     /// Root state
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct AppState;
//!
//!     action: AppAction;
//!
//!     slices {
//!         counter: CounterReducer,
//!         name: NameReducer,
//!     }
//! }
//!
//! let reducer = AppReducer::default();
//! let state = reducer.reduce_or_init(None, &AppAction::Increment);
//! let state = reducer.reduce(state, &AppAction::Rename("Ada".to_string()));
//!
//! assert_eq!(state, AppState { counter: 1, name: "Ada".to_string() });
//! ```

/// Builds a root reducer and root state from a fixed set of slice reducers
///
/// The root state struct must derive (at least) `Clone`, as required of every
/// [`Reducer::State`](crate::reducer::Reducer::State). Attributes written on a
/// slice entry are placed on the corresponding *state* field, which is where
/// serialization renames belong.
///
/// See the [module documentation](crate::composition) for a full example.
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$reducer_meta:meta])*
        $reducer_vis:vis struct $reducer:ident;

        $(#[$state_meta:meta])*
        $state_vis:vis struct $state:ident;

        action: $action:ty;

        slices {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $slice:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$reducer_meta])*
        $reducer_vis struct $reducer {
            $(
                #[doc = concat!("Reducer owning the `", stringify!($field), "` slice")]
                $reducer_vis $field: $slice,
            )+
        }

        impl $reducer {
            /// Assembles the root reducer from its slice reducers
            #[must_use]
            #[allow(clippy::too_many_arguments)]
            $reducer_vis const fn new($($field: $slice),+) -> Self {
                Self { $($field),+ }
            }
        }

        $(#[$state_meta])*
        $state_vis struct $state {
            $(
                #[doc = concat!("State of the `", stringify!($field), "` slice")]
                $(#[$field_meta])*
                $state_vis $field: <$slice as $crate::reducer::Reducer>::State,
            )+
        }

        impl $crate::reducer::Reducer for $reducer {
            type State = $state;
            type Action = $action;

            fn initial_state(&self) -> $state {
                $state {
                    $(
                        $field: $crate::reducer::Reducer::initial_state(&self.$field),
                    )+
                }
            }

            fn reduce(&self, state: $state, action: &$action) -> $state {
                $state {
                    $(
                        $field: $crate::reducer::Reducer::reduce(&self.$field, state.$field, action),
                    )+
                }
            }
        }
    };
}
