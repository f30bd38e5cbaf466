//! Integration tests for Counter with Store
//!
//! These tests demonstrate the full end-to-end flow of the
//! Unistate architecture.

#![allow(clippy::unwrap_used)] // Test code can use unwrap

use counter::{CounterAction, CounterReducer};
use proptest::prelude::*;
use std::rc::Rc;
use unistate_runtime::{create_store, Store};
use unistate_testing::ListenerLog;

#[test]
fn test_counter_with_store() {
    let store = create_store(CounterReducer::new());

    // Initial state
    assert_eq!(*store.get_state(), 0);

    // Increment
    store.dispatch(CounterAction::Increment).unwrap();
    assert_eq!(*store.get_state(), 1);

    // Increment again
    store.dispatch(CounterAction::Increment).unwrap();
    assert_eq!(*store.get_state(), 2);

    // Decrement
    store.dispatch(CounterAction::Decrement).unwrap();
    assert_eq!(*store.get_state(), 1);

    // Anything else
    store.dispatch_value(serde_json::json!({ "type": "SOMETHING_ELSE" })).unwrap();
    assert_eq!(*store.get_state(), 1);
}

#[test]
fn test_listeners_run_in_subscription_order() {
    let store = create_store(CounterReducer::new());
    let log = ListenerLog::new();
    store.subscribe(log.listener("L1"));
    store.subscribe(log.listener("L2"));

    store.dispatch(CounterAction::Increment).unwrap();

    assert_eq!(log.calls(), vec!["L1", "L2"]);
}

#[test]
fn test_unsubscribed_render_is_not_called() {
    let store = Rc::new(create_store(CounterReducer::new()));
    let rendered = Rc::new(std::cell::RefCell::new(Vec::new()));

    let weak = Rc::downgrade(&store);
    let log = Rc::clone(&rendered);
    let render = store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            log.borrow_mut().push(*store.get_state());
        }
    });

    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::Increment).unwrap();
    render.unsubscribe();
    store.dispatch(CounterAction::Increment).unwrap();

    assert_eq!(*rendered.borrow(), vec![1, 2]);
    assert_eq!(*store.get_state(), 3);
}

#[test]
fn test_state_isolation() {
    let store1 = Store::new(CounterReducer::new());
    let store2 = Store::new(CounterReducer::new());

    // Modify store1
    store1.dispatch(CounterAction::Increment).unwrap();
    store1.dispatch(CounterAction::Increment).unwrap();

    // Modify store2
    store2.dispatch(CounterAction::Increment).unwrap();

    // Verify isolation
    assert_eq!(*store1.get_state(), 2);
    assert_eq!(*store2.get_state(), 1);
}

#[test]
fn test_negative_count() {
    let store = Store::new(CounterReducer::new());

    // Decrement below zero
    for _ in 0..3 {
        store.dispatch(CounterAction::Decrement).unwrap();
    }

    assert_eq!(*store.get_state(), -3);
}

proptest! {
    #[test]
    fn count_is_increments_minus_decrements(ups in prop::collection::vec(any::<bool>(), 0..64)) {
        let store = Store::new(CounterReducer::new());
        for up in &ups {
            let action = if *up { CounterAction::Increment } else { CounterAction::Decrement };
            store.dispatch(action).unwrap();
        }

        let increments = ups.iter().filter(|up| **up).count();
        let decrements = ups.len() - increments;
        let expected = i64::try_from(increments).unwrap() - i64::try_from(decrements).unwrap();
        prop_assert_eq!(*store.get_state(), expected);
    }
}
