use std::sync::Arc;

use tokio::task::JoinHandle;

use super::Store;
use crate::mvi::{Action, State};

/// Read/write handle onto one value derived from a store's state.
///
/// Reads go through `extract`; writes are turned into actions by `embed` and
/// sent to the store on a detached task.
pub struct Binding<S: State, A: Action, V> {
    store: Store<S, A>,
    extract: Arc<dyn Fn(&S) -> V + Send + Sync>,
    embed: Arc<dyn Fn(V) -> A + Send + Sync>,
}

impl<S: State, A: Action, V> Binding<S, A, V> {
    pub(super) fn new<X, E>(store: Store<S, A>, extract: X, embed: E) -> Self
    where
        X: Fn(&S) -> V + Send + Sync + 'static,
        E: Fn(V) -> A + Send + Sync + 'static,
    {
        Self {
            store,
            extract: Arc::new(extract),
            embed: Arc::new(embed),
        }
    }

    /// Current value. `extract` runs under the store's state lock, so it
    /// must not touch the store.
    pub fn get(&self) -> V {
        self.store.read(|state| (self.extract)(state))
    }

    /// Send the action for `value`.
    ///
    /// Must be called inside a tokio runtime. The returned handle may be
    /// awaited to wait for the send to settle, or dropped.
    pub fn set(&self, value: V) -> JoinHandle<()> {
        tokio::spawn(self.store.send((self.embed)(value)))
    }
}

impl<S: State, A: Action, V> Clone for Binding<S, A, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            extract: Arc::clone(&self.extract),
            embed: Arc::clone(&self.embed),
        }
    }
}
