//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use unistate_core::reducer::Reducer;

/// Type alias for state assertion functions, called with `(before, after)`
type StateAssertion<S> = Box<dyn FnOnce(&S, &S)>;

/// Starting point of a reducer test
enum Given<S> {
    Missing,
    /// No previous state; the reducer must produce its default
    Undefined,
    State(S),
}

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use unistate_core::reducer::from_fn;
/// use unistate_testing::ReducerTest;
///
/// let counter = from_fn(|| 0_i64, |state: i64, up: &bool| if *up { state + 1 } else { state });
///
/// ReducerTest::new(counter.clone())
///     .given_state(41)
///     .when_action(true)
///     .then_state(|state| {
///         assert_eq!(*state, 42);
///     })
///     .run();
///
/// ReducerTest::new(counter)
///     .given_state(41)
///     .when_action(false)
///     .then_same_state()
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    given: Given<R::State>,
    action: Option<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            given: Given::Missing,
            action: None,
            state_assertions: Vec::new(),
        }
    }

    /// Set the previous state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.given = Given::State(state);
        self
    }

    /// Start from no previous state (Given)
    ///
    /// The action is applied through [`Reducer::reduce_or_init`], so the
    /// reducer must fill in its default first.
    #[must_use]
    pub fn given_initial_state(mut self) -> Self {
        self.given = Given::Undefined;
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions
            .push(Box::new(move |_before, after| assertion(after)));
        self
    }

    /// Assert the resulting state equals the previous one (Then)
    ///
    /// This is an equality check; use [`assertions::assert_same_ref`] to
    /// check that a shared node was passed through by reference.
    ///
    /// With [`given_initial_state`](Self::given_initial_state) the previous
    /// state is the reducer's default.
    #[must_use]
    pub fn then_same_state(mut self) -> Self
    where
        R::State: PartialEq + std::fmt::Debug,
    {
        self.state_assertions.push(Box::new(|before, after| {
            assert_eq!(after, before, "Expected the reducer to return its input state");
        }));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if the given state or action is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let action = self.action.expect("Action must be set with when_action()");

        let (before, after) = match self.given {
            Given::Missing => {
                panic!("Previous state must be set with given_state() or given_initial_state()")
            }
            Given::Undefined => (
                self.reducer.initial_state(),
                self.reducer.reduce_or_init(None, &action),
            ),
            Given::State(state) => (state.clone(), self.reducer.reduce(state, &action)),
        };

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&before, &after);
        }
    }
}

/// Helper assertions for the reducer contract
pub mod assertions {
    use std::fmt::Debug;
    use std::sync::Arc;
    use unistate_core::action::Action;
    use unistate_core::reducer::Reducer;

    /// Assert that reducing the same input twice yields equal states and
    /// leaves the input untouched
    ///
    /// The input is snapshotted through its `Debug` rendering, which reaches
    /// through shared `Arc` nodes that a plain clone would alias.
    ///
    /// # Panics
    ///
    /// Panics if the two results differ or if `state` changed.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_pure<R>(reducer: &R, state: &R::State, action: &R::Action)
    where
        R: Reducer,
        R::State: PartialEq + Debug,
        R::Action: Debug,
    {
        let snapshot = format!("{state:?}");
        let first = reducer.reduce(state.clone(), action);
        let second = reducer.reduce(state.clone(), action);
        assert_eq!(
            first, second,
            "Reducer produced different states for the same input and action {action:?}"
        );
        assert_eq!(
            format!("{state:?}"),
            snapshot,
            "Reducer modified its input state on action {action:?}"
        );
    }

    /// Assert that the unrecognized action leaves `state` unchanged
    ///
    /// # Panics
    ///
    /// Panics if the reducer changes the state.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unrecognized_is_identity<R>(reducer: &R, state: &R::State)
    where
        R: Reducer,
        R::State: PartialEq + Debug,
        R::Action: Action,
    {
        let next = reducer.reduce(state.clone(), &<R::Action as Action>::unrecognized());
        assert_eq!(
            &next, state,
            "Reducer changed its state on the unrecognized action"
        );
    }

    /// Assert that two handles point to the same allocation
    ///
    /// # Panics
    ///
    /// Panics if `actual` is a different allocation from `expected`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_same_ref<T: ?Sized + Debug>(actual: &Arc<T>, expected: &Arc<T>) {
        assert!(
            Arc::ptr_eq(actual, expected),
            "Expected the same reference, found a copy: {actual:?} vs {expected:?}"
        );
    }

    /// Assert that two handles point to different allocations
    ///
    /// # Panics
    ///
    /// Panics if both point to the same allocation.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_new_ref<T: ?Sized + Debug>(actual: &Arc<T>, previous: &Arc<T>) {
        assert!(
            !Arc::ptr_eq(actual, previous),
            "Expected a new value, found the previous reference: {actual:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use unistate_macros::Action;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: i32,
        history: Arc<Vec<i32>>,
    }

    #[derive(Action, Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        #[unrecognized]
        Unrecognized,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn initial_state(&self) -> TestState {
            TestState {
                count: 0,
                history: Arc::new(Vec::new()),
            }
        }

        fn reduce(&self, state: TestState, action: &TestAction) -> TestState {
            match action {
                TestAction::Increment => TestState {
                    count: state.count + 1,
                    ..state
                },
                TestAction::Decrement => {
                    let mut history = (*state.history).clone();
                    history.push(state.count);
                    TestState {
                        count: state.count - 1,
                        history: Arc::new(history),
                    }
                }
                TestAction::Unrecognized => state,
            }
        }
    }

    fn state(count: i32) -> TestState {
        TestState {
            count,
            history: Arc::new(Vec::new()),
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .given_state(state(0))
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_decrement() {
        ReducerTest::new(TestReducer)
            .given_state(state(5))
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 4);
                assert_eq!(*state.history, vec![5]);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_from_initial_state() {
        ReducerTest::new(TestReducer)
            .given_initial_state()
            .when_action(TestAction::Unrecognized)
            .then_same_state()
            .then_state(|state| assert_eq!(state.count, 0))
            .run();
    }

    #[test]
    #[should_panic(expected = "return its input state")]
    fn test_then_same_state_detects_change() {
        ReducerTest::new(TestReducer)
            .given_state(state(1))
            .when_action(TestAction::Increment)
            .then_same_state()
            .run();
    }

    #[test]
    #[should_panic(expected = "given_state()")]
    fn test_run_without_given_state() {
        ReducerTest::new(TestReducer)
            .when_action(TestAction::Increment)
            .run();
    }

    #[test]
    fn test_assertions_contract() {
        let given = state(3);
        assertions::assert_pure(&TestReducer, &given, &TestAction::Decrement);
        assertions::assert_unrecognized_is_identity(&TestReducer, &given);
    }

    #[derive(Action, Clone, Debug)]
    enum TallyAction {
        Bump,
        #[unrecognized]
        Unrecognized,
    }

    /// Writes through the shared cell instead of building a new state
    struct LeakyReducer;

    impl Reducer for LeakyReducer {
        type State = std::rc::Rc<std::cell::Cell<i32>>;
        type Action = TallyAction;

        fn initial_state(&self) -> Self::State {
            std::rc::Rc::new(std::cell::Cell::new(0))
        }

        fn reduce(&self, state: Self::State, action: &TallyAction) -> Self::State {
            if matches!(action, TallyAction::Bump) {
                state.set(state.get() + 1);
            }
            state
        }
    }

    #[test]
    #[should_panic(expected = "modified its input state")]
    fn test_assert_pure_detects_mutated_input() {
        let given = LeakyReducer.initial_state();
        assertions::assert_pure(&LeakyReducer, &given, &TallyAction::Bump);
    }

    #[test]
    fn test_assertions_references() {
        let given = state(3);
        let same = TestReducer.reduce(given.clone(), &TestAction::Increment);
        let changed = TestReducer.reduce(given.clone(), &TestAction::Decrement);

        assertions::assert_same_ref(&same.history, &given.history);
        assertions::assert_new_ref(&changed.history, &given.history);
    }
}
