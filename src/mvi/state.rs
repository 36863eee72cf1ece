//! Base trait for store state.

/// Marker trait for state owned by a store.
///
/// States should be:
/// - Cheap enough to Clone (middleware receive snapshots)
/// - Self-contained (everything a reducer needs to compute the next state)
pub trait State: Clone + Send + Sync + 'static {}

/// Absent state is itself a state; see `MiddlewareExt::optional`.
impl<S: State> State for Option<S> {}
