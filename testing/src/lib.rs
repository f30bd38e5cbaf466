//! # Unistate Testing
//!
//! Testing utilities and helpers for the Unistate architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: checks for the reducer contract (purity, identity on
//!   unrecognized actions, reference preservation)
//! - [`ListenerLog`]: records listener invocations in order
//! - [`properties`]: proptest strategies shared by domain tests
//!
//! ## Example
//!
//! ```
//! use unistate_core::reducer::from_fn;
//! use unistate_testing::ReducerTest;
//!
//! let counter = from_fn(|| 0_i64, |state: i64, step: &i64| state + step);
//!
//! ReducerTest::new(counter)
//!     .given_initial_state()
//!     .when_action(3)
//!     .then_state(|state| assert_eq!(*state, 3))
//!     .run();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Records which listeners ran, in call order
///
/// Each listener produced by [`listener`](ListenerLog::listener) appends its
/// label to a shared log when called.
///
/// # Example
///
/// ```
/// use unistate_testing::ListenerLog;
///
/// let log = ListenerLog::new();
/// let first = log.listener("L1");
/// let second = log.listener("L2");
///
/// first();
/// second();
/// first();
///
/// assert_eq!(log.calls(), vec!["L1", "L2", "L1"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListenerLog {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl ListenerLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that records `label` each time it runs
    pub fn listener(&self, label: &'static str) -> impl Fn() + 'static {
        let calls = Rc::clone(&self.calls);
        move || calls.borrow_mut().push(label)
    }

    /// Labels recorded so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// Number of times `label` was recorded
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.calls.borrow().iter().filter(|call| **call == label).count()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

/// Install a `tracing` subscriber that writes through the test harness
///
/// Honors `RUST_LOG`; defaults to `debug`. Safe to call from every test,
/// only the first call installs the subscriber.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::collection::btree_set;
    use proptest::prelude::*;

    /// Distinct ids in ascending order, at most `max_len` of them
    pub fn arb_ids(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
        btree_set(0_u64..1_000, 0..=max_len).prop_map(|ids| ids.into_iter().collect())
    }

    /// Short printable text, possibly empty
    pub fn arb_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,24}"
    }
}
