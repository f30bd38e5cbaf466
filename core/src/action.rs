//! Actions and their JSON boundary
//!
//! Actions are closed enums, one variant per action kind, tagged by a
//! SCREAMING_SNAKE_CASE discriminant (`ADD_TODO`, `TOGGLE_TODO`, ...).
//! Each action type also has exactly one variant that no reducer recognizes.
//! The store dispatches it once at construction to populate default state,
//! and [`decode`] falls back to it for foreign or untagged input.
//!
//! Use `#[derive(Action)]` from `unistate-macros` rather than implementing
//! the trait by hand.
//!
//! # Example
//!
//! ```
//! use serde::Deserialize;
//! use unistate_core::action::{decode, Action};
//! use unistate_macros::Action;
//!
//! #[derive(Action, Debug, Clone, PartialEq, Deserialize)]
//! #[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//!     #[unrecognized]
//!     #[serde(other)]
//!     Unrecognized,
//! }
//!
//! let action: CounterAction = decode(serde_json::json!({ "type": "INCREMENT" })).unwrap();
//! assert_eq!(action, CounterAction::Increment);
//! assert_eq!(action.action_type(), "INCREMENT");
//!
//! let untagged: CounterAction = decode(serde_json::json!({ "amount": 2 })).unwrap();
//! assert!(untagged.is_unrecognized());
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Name of the discriminant field in raw actions
pub const TYPE_FIELD: &str = "type";

/// Tag reported by the unrecognized variant of every action type
pub const UNRECOGNIZED_TYPE: &str = "@@UNRECOGNIZED";

/// A tagged record describing an intended state change
pub trait Action: std::fmt::Debug {
    /// The discriminant tag of this action, e.g. `"ADD_TODO"`
    fn action_type(&self) -> &'static str;

    /// An action recognized by no reducer
    fn unrecognized() -> Self
    where
        Self: Sized;

    /// Whether this is the unrecognized action
    fn is_unrecognized(&self) -> bool;
}

/// Errors produced while decoding raw actions
#[derive(Error, Debug)]
pub enum ActionError {
    /// The action carried a known tag but its payload did not match
    #[error("Malformed payload for action {action_type}: {source}")]
    MalformedPayload {
        /// Tag of the offending action
        action_type: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

/// Decodes a raw JSON action
///
/// - Missing or non-string `type` → `A::unrecognized()`
/// - Unknown `type` → whatever `A` deserializes it to (normally its
///   `#[serde(other)]` unrecognized variant)
/// - Known `type` with a bad payload → [`ActionError::MalformedPayload`]
///
/// # Errors
///
/// Returns [`ActionError::MalformedPayload`] when the payload of a tagged
/// action cannot be deserialized.
pub fn decode<A>(value: Value) -> Result<A, ActionError>
where
    A: Action + DeserializeOwned,
{
    let action_type = match value.get(TYPE_FIELD) {
        Some(Value::String(tag)) => tag.clone(),
        _ => {
            tracing::debug!("Raw action has no string discriminant, treating as unrecognized");
            return Ok(A::unrecognized());
        }
    };

    let action: A = serde_json::from_value(value).map_err(|source| ActionError::MalformedPayload {
        action_type: action_type.clone(),
        source,
    })?;

    if action.is_unrecognized() {
        tracing::debug!(action_type = %action_type, "Unknown action type, treating as unrecognized");
    }

    Ok(action)
}
