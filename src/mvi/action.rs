//! Base trait for actions fed to a store.

/// Marker trait for action values.
///
/// Actions represent:
/// - User requests (refresh, restore)
/// - Results of side effects (a looked-up item, a load finishing)
///
/// Actions are consumed by reducers and observed by middleware.
pub trait Action: Clone + Send + Sync + 'static {}
