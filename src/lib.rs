//! A small unidirectional store.
//!
//! A [`Store`] owns one state value. [`Store::send`] reduces an action with a
//! pure [`Reducer`], then hands the new state and the action to every
//! [`Middleware`] concurrently. Middleware answer with at most one follow-up
//! action, which is sent back into the store.
//!
//! Middleware written against a narrow state/action pair can be reused in a
//! larger one through the adapters on [`MiddlewareExt`] and the optics in
//! [`optics`].
//!
//! The [`clock`] module is a complete feature built on the store: a
//! literature clock that looks up quotes for the time of day.

pub mod clock;
pub mod config;
pub mod logging;
pub mod middleware;
pub mod mvi;
pub mod optics;
pub mod store;

pub use middleware::{Middleware, MiddlewareExt};
pub use mvi::{Action, Reducer, State};
pub use optics::{KeyPath, Prism};
pub use store::Store;
