//! # Unistate Runtime
//!
//! Runtime implementation for the Unistate architecture.
//!
//! This crate provides the [`Store`]: the single owner of the current state and
//! of the listener registry, driven by one root reducer.
//!
//! ## Core Components
//!
//! - **Store**: Holds state, runs the reducer on dispatch, notifies listeners
//! - **Listener registry**: Ordered subscriptions with idempotent removal
//! - **Config**: Store name and optional re-entrancy bound
//!
//! ## Data Flow
//!
//! `dispatch(action)` → root reducer `(state, action)` → new state replaces the
//! old one → every listener is called, in subscription order, with no
//! arguments → listeners call `get_state()`.
//!
//! Everything is synchronous and single-threaded: `dispatch` returns only
//! after the reducer and every listener have run.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use unistate_core::reducer::Reducer;
//! use unistate_macros::Action;
//! use unistate_runtime::create_store;
//!
//! #[derive(Action, Debug, Clone)]
//! enum CounterAction {
//!     Increment,
//!     #[unrecognized]
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
//!             CounterAction::Unrecognized => state,
//!         }
//!     }
//! }
//!
//! let store = create_store(CounterReducer);
//! let renders = Rc::new(Cell::new(0));
//! let counted = Rc::clone(&renders);
//! store.subscribe(move || counted.set(counted.get() + 1));
//!
//! store.dispatch(CounterAction::Increment).unwrap();
//!
//! assert_eq!(*store.get_state(), 1);
//! assert_eq!(renders.get(), 1);
//! ```

/// Store configuration
pub mod config;

/// Listener registry and unsubscribe handles
pub mod listener;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;
    use unistate_core::action::ActionError;

    /// Errors that can occur during Store operations
    ///
    /// With the default configuration the only failure is a raw action that
    /// could not be decoded. Reducers themselves never fail; a panicking
    /// reducer is a programming error and unwinds through `dispatch`.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// A raw action could not be decoded
        #[error(transparent)]
        Action(#[from] ActionError),

        /// A listener dispatched deeper than the configured limit
        ///
        /// The rejected action was not reduced and no listener was notified.
        #[error("Dispatch nested deeper than the configured limit of {limit}")]
        DispatchDepthExceeded {
            /// The configured `max_dispatch_depth`
            limit: usize,
        },
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::config::StoreConfig;
    use super::error::StoreError;
    use super::listener::{ListenerRegistry, Unsubscribe};
    use std::cell::{Cell, RefCell};
    use std::fmt;
    use std::rc::Rc;
    use std::sync::Arc;
    use unistate_core::action::{decode, Action};
    use unistate_core::reducer::Reducer;

    /// The Store - state holder for one root reducer
    ///
    /// The Store owns:
    /// 1. The current state, as an `Arc` snapshot replaced on every dispatch
    /// 2. The root reducer
    /// 3. The listener registry
    ///
    /// It is deliberately `!Send` and `!Sync`: one logical thread of control
    /// drives it. Independent stores share nothing and can coexist freely.
    ///
    /// # Re-entrancy
    ///
    /// A listener may call [`dispatch`](Store::dispatch). The nested dispatch
    /// runs its reducer pass and its own full notification loop before the
    /// outer loop resumes with its next listener. Set
    /// [`StoreConfig::max_dispatch_depth`] to bound the recursion.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(TodoAppReducer::default());
    ///
    /// store.dispatch(TodoAppAction::AddTodo { id: 0, text: "Learn".into() })?;
    /// assert_eq!(store.get_state().todos.len(), 1);
    /// ```
    pub struct Store<R>
    where
        R: Reducer,
    {
        reducer: R,
        config: StoreConfig,
        state: RefCell<Arc<R::State>>,
        listeners: Rc<RefCell<ListenerRegistry>>,
        depth: Cell<usize>,
    }

    /// Creates a store driven by `reducer` with the default configuration
    ///
    /// Equivalent to [`Store::new`].
    #[must_use]
    pub fn create_store<R>(reducer: R) -> Store<R>
    where
        R: Reducer,
        R::Action: Action,
    {
        Store::new(reducer)
    }

    /// Restores the dispatch depth when a dispatch ends, including by unwinding
    struct DepthGuard<'a>(&'a Cell<usize>);

    impl Drop for DepthGuard<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get().saturating_sub(1));
        }
    }

    impl<R> Store<R>
    where
        R: Reducer,
        R::Action: Action,
    {
        /// Create a new store for `reducer`
        ///
        /// Before returning, the store dispatches the unrecognized action
        /// against an absent state so that every reducer populates its default
        /// value. [`get_state`](Store::get_state) therefore never observes an
        /// uninitialized store.
        #[must_use]
        pub fn new(reducer: R) -> Self {
            Self::with_config(reducer, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub fn with_config(reducer: R, config: StoreConfig) -> Self {
            let init = R::Action::unrecognized();
            let initial_state = reducer.reduce_or_init(None, &init);

            tracing::debug!(
                store = %config.name,
                action_type = init.action_type(),
                "Store initialized"
            );

            Self {
                reducer,
                config,
                state: RefCell::new(Arc::new(initial_state)),
                listeners: Rc::new(RefCell::new(ListenerRegistry::default())),
                depth: Cell::new(0),
            }
        }

        /// The configuration this store was created with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// The current state
        ///
        /// Returns the shared snapshot itself (no deep copy). Snapshots taken
        /// before and after a dispatch can be compared with `Arc::ptr_eq`,
        /// and so can `Arc`-backed slices inside them.
        #[must_use]
        pub fn get_state(&self) -> Arc<R::State> {
            Arc::clone(&self.state.borrow())
        }

        /// Dispatch an action
        ///
        /// Runs the root reducer on the current state, replaces the state with
        /// the result, then calls every listener registered at that moment,
        /// in subscription order. Listeners added during the notification pass
        /// are first called on the next dispatch; listeners removed during the
        /// pass are still called in it.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::DispatchDepthExceeded`] if a
        /// `max_dispatch_depth` is configured and this dispatch is nested
        /// that deep inside listener callbacks. Never fails otherwise.
        ///
        /// # Panics
        ///
        /// A panic inside the reducer or a listener propagates to the caller.
        /// The store remains usable afterwards.
        pub fn dispatch(&self, action: R::Action) -> Result<(), StoreError> {
            let depth = self.depth.get();
            if let Some(limit) = self.config.dispatch_depth_limit() {
                if depth >= limit {
                    tracing::warn!(
                        store = %self.config.name,
                        action_type = action.action_type(),
                        depth,
                        limit,
                        "Rejected action: dispatch nested too deeply"
                    );
                    metrics::counter!("store.dispatch.rejected", "store" => self.config.name.clone())
                        .increment(1);
                    return Err(StoreError::DispatchDepthExceeded { limit });
                }
            }

            self.depth.set(depth + 1);
            let _guard = DepthGuard(&self.depth);

            let span = tracing::debug_span!(
                "store_dispatch",
                store = %self.config.name,
                action_type = action.action_type(),
                depth
            );
            let _enter = span.enter();

            metrics::counter!("store.dispatch.total", "store" => self.config.name.clone()).increment(1);

            // The stored snapshot stays intact if the reducer panics
            let previous = R::State::clone(&self.state.borrow());
            let start = std::time::Instant::now();
            let next = self.reducer.reduce(previous, &action);
            metrics::histogram!("store.reducer.duration_seconds", "store" => self.config.name.clone())
                .record(start.elapsed().as_secs_f64());
            tracing::trace!("Reducer completed");

            *self.state.borrow_mut() = Arc::new(next);

            let listeners = self.listeners.borrow().snapshot();
            tracing::trace!("Notifying {} listeners", listeners.len());
            for listener in listeners {
                listener();
            }

            Ok(())
        }

        /// Decode a raw JSON action and dispatch it
        ///
        /// A value without a string `type` field, or with a tag no variant
        /// matches, is dispatched as the unrecognized action: reducers pass
        /// it through and listeners are still notified.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Action`] if the action's tag is known but
        /// its payload is malformed, and any error of [`dispatch`](Store::dispatch).
        pub fn dispatch_value(&self, value: serde_json::Value) -> Result<(), StoreError>
        where
            R::Action: serde::de::DeserializeOwned,
        {
            let action = decode::<R::Action>(value)?;
            self.dispatch(action)
        }

        /// Register a listener
        ///
        /// The listener is called with no arguments after every subsequent
        /// dispatch. The returned handle removes exactly this subscription;
        /// subscribing the same closure twice yields two subscriptions.
        pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
        where
            F: Fn() + 'static,
        {
            let id = self.listeners.borrow_mut().insert(Rc::new(listener));
            let count = self.listener_count();

            tracing::debug!(store = %self.config.name, listener = ?id, "Listener subscribed");
            #[allow(clippy::cast_precision_loss)]
            metrics::gauge!("store.listeners", "store" => self.config.name.clone()).set(count as f64);

            Unsubscribe::new(&self.listeners, id, &self.config.name)
        }

        /// Number of currently registered listeners
        #[must_use]
        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl<R> fmt::Debug for Store<R>
    where
        R: Reducer + fmt::Debug,
        R::State: fmt::Debug,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Store")
                .field("config", &self.config)
                .field("reducer", &self.reducer)
                .field("state", &self.state.borrow())
                .field("listeners", &self.listeners.borrow().len())
                .finish_non_exhaustive()
        }
    }
}

// Re-export commonly used types
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use listener::{ListenerId, Unsubscribe};
pub use store::{create_store, Store};
