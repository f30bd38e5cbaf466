//! Counter example binary
//!
//! Demonstrates the Unistate architecture with a simple counter.

use counter::{CounterAction, CounterReducer};
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unistate_runtime::{Store, StoreConfig};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,unistate_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter Example: Unistate ===\n");

    let store = Rc::new(Store::with_config(CounterReducer::new(), StoreConfig::from_env()?));

    // Initial state
    println!("Initial count: {}", store.get_state());

    // Render listener
    let weak = Rc::downgrade(&store);
    let render = store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            println!("  render: count = {}", store.get_state());
        }
    });

    for action in [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
    ] {
        println!("\n>>> Dispatching: {action:?}");
        store.dispatch(action)?;
    }

    // Raw action from outside the type system
    println!("\n>>> Dispatching raw: {{\"type\":\"INCREMENT\"}}");
    store.dispatch_value(serde_json::json!({ "type": "INCREMENT" }))?;

    // After unsubscribing, dispatches no longer render
    render.unsubscribe();
    println!("\n>>> Unsubscribed; dispatching: Increment");
    store.dispatch(CounterAction::Increment)?;
    println!("Final count: {}", store.get_state());

    println!("\n=== Demo Complete ===");
    Ok(())
}
