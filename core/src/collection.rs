//! Entity and collection reducers
//!
//! A collection of entities is reduced in two layers:
//!
//! - An [`EntityReducer`] knows how to create one entity from an action and how
//!   to transition one existing entity.
//! - A [`CollectionReducer`] owns the ordered sequence, appends newly created
//!   entities and maps per-element actions over every element.
//!
//! The collection state is an `Arc<[E]>`. Actions the entity reducer neither
//! creates from nor targets existing entities with hand back the very same
//! `Arc`, so `Arc::ptr_eq` detects "nothing changed".

use crate::reducer::Reducer;
use std::sync::Arc;

/// A reducer specialized to one domain entity
///
/// # Contract
///
/// - [`create`](EntityReducer::create) returns `Some` only for creation actions
///   and builds the entity from the action alone.
/// - [`reduce`](EntityReducer::reduce) returns the entity unchanged (the same
///   value, pointer-identical when the entity is an `Arc`) whenever the action
///   does not address it.
pub trait EntityReducer {
    /// The entity type, typically an `Arc` around the domain record
    type Entity: Clone;

    /// The action type this reducer processes
    type Action;

    /// Builds a fresh entity if `action` is a creation action
    fn create(&self, action: &Self::Action) -> Option<Self::Entity>;

    /// Whether `action` is addressed to existing entities
    fn targets_existing(&self, action: &Self::Action) -> bool;

    /// Transitions one existing entity
    fn reduce(&self, entity: Self::Entity, action: &Self::Action) -> Self::Entity;
}

/// Reducer over an ordered collection of entities
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use unistate_core::collection::{CollectionReducer, EntityReducer};
/// use unistate_core::reducer::Reducer;
///
/// enum TagAction {
///     Add(&'static str),
///     Upper,
///     Other,
/// }
///
/// struct TagReducer;
///
/// impl EntityReducer for TagReducer {
///     type Entity = Arc<String>;
///     type Action = TagAction;
///
///     fn create(&self, action: &TagAction) -> Option<Arc<String>> {
///         match action {
///             TagAction::Add(tag) => Some(Arc::new((*tag).to_string())),
///             _ => None,
///         }
///     }
///
///     fn targets_existing(&self, action: &TagAction) -> bool {
///         matches!(action, TagAction::Upper)
///     }
///
///     fn reduce(&self, tag: Arc<String>, action: &TagAction) -> Arc<String> {
///         match action {
///             TagAction::Upper => Arc::new(tag.to_uppercase()),
///             _ => tag,
///         }
///     }
/// }
///
/// let tags = CollectionReducer::new(TagReducer);
/// let state = tags.reduce_or_init(None, &TagAction::Add("rust"));
/// let state = tags.reduce(state, &TagAction::Upper);
/// assert_eq!(state[0].as_str(), "RUST");
///
/// let unchanged = tags.reduce(Arc::clone(&state), &TagAction::Other);
/// assert!(Arc::ptr_eq(&state, &unchanged));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionReducer<R> {
    item: R,
}

impl<R> CollectionReducer<R> {
    /// Creates a collection reducer delegating to `item`
    #[must_use]
    pub const fn new(item: R) -> Self {
        Self { item }
    }

    /// The entity reducer elements are delegated to
    #[must_use]
    pub const fn item(&self) -> &R {
        &self.item
    }
}

impl<R> Reducer for CollectionReducer<R>
where
    R: EntityReducer,
{
    type State = Arc<[R::Entity]>;
    type Action = R::Action;

    fn initial_state(&self) -> Self::State {
        Arc::from(Vec::new())
    }

    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
        if let Some(entity) = self.item.create(action) {
            // Appended at the end; insertion order is the only ordering
            return state.iter().cloned().chain(std::iter::once(entity)).collect();
        }

        if self.item.targets_existing(action) {
            return state
                .iter()
                .cloned()
                .map(|entity| self.item.reduce(entity, action))
                .collect();
        }

        state
    }
}
