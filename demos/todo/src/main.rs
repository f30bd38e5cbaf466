//! Todo example binary
//!
//! Feeds a scripted list of raw JSON actions through the store and renders
//! the state after every dispatch.

use anyhow::Context;
use std::rc::Rc;
use todo::{visible_todos, TodoAppReducer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unistate_runtime::{Store, StoreConfig};

fn script() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({ "type": "ADD_TODO", "id": 0, "text": "Learn about actions" }),
        serde_json::json!({ "type": "ADD_TODO", "id": 1, "text": "Learn about reducers" }),
        serde_json::json!({ "type": "ADD_TODO", "id": 2, "text": "Learn about the store" }),
        serde_json::json!({ "type": "TOGGLE_TODO", "id": 0 }),
        serde_json::json!({ "type": "TOGGLE_TODO", "id": 1 }),
        serde_json::json!({ "type": "SET_VISIBILITY_FILTER", "filter": "SHOW_COMPLETED" }),
        // No discriminant: dispatched as the unrecognized action, state unchanged
        serde_json::json!({ "id": 2 }),
    ]
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,unistate_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Example: Unistate ===\n");

    let config = StoreConfig::from_env().context("reading store configuration")?;
    let store = Rc::new(Store::with_config(TodoAppReducer::default(), config));

    let initial = serde_json::to_string(&*store.get_state())?;
    println!("Initial state: {initial}");

    // Render listener: re-queries the store on every notification
    let weak = Rc::downgrade(&store);
    let render = store.subscribe(move || {
        let Some(store) = weak.upgrade() else {
            return;
        };
        let state = store.get_state();
        match serde_json::to_string(&*state) {
            Ok(json) => println!("  state: {json}"),
            Err(error) => tracing::error!(%error, "Failed to render state"),
        }
        let visible = visible_todos(&state);
        let texts: Vec<&str> = visible.iter().map(|todo| todo.text.as_str()).collect();
        println!("  visible: {texts:?}");
    });

    for action in script() {
        println!("\n>>> Dispatching: {action}");
        store
            .dispatch_value(action)
            .context("dispatching scripted action")?;
    }

    render.unsubscribe();

    println!("\n=== Demo Complete ===");
    Ok(())
}
