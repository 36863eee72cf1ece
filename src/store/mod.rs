//! The store: single owner of state, coordinator of middleware.
//!
//! Every mutation goes through [`Store::send`]. The reduction step runs
//! inside one exclusive critical section, so concurrent sends never lose or
//! interleave updates. Middleware then run on their own tasks and any
//! follow-up they produce is sent back into the store before the original
//! `send` resolves.
//!
//! Cancelling a send (dropping its future, or aborting the task that polls
//! it) aborts every middleware task it started and every recursive send
//! those tasks triggered. A reduction that has begun always completes.

mod binding;

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::middleware::SharedMiddleware;
use crate::mvi::{Action, Reducer, State};
use crate::optics::KeyPath;

pub use binding::Binding;

type SharedReducer<S, A> = Arc<dyn Reducer<State = S, Action = A>>;

/// Owner of one state value.
///
/// Cloning a `Store` yields another handle to the same state. The reducer
/// and middleware list are fixed at construction.
///
/// Sending requires a running tokio runtime: middleware are spawned with
/// [`tokio::task::JoinSet`].
pub struct Store<S: State, A: Action> {
    inner: Arc<StoreInner<S, A>>,
}

struct StoreInner<S: State, A: Action> {
    state: Mutex<S>,
    reducer: SharedReducer<S, A>,
    middlewares: Vec<SharedMiddleware<S, A>>,
    changes: watch::Sender<S>,
}

impl<S: State, A: Action> Store<S, A> {
    /// Store holding `initial_state`, reduced by `reducer`. Every action is
    /// handed to each of `middlewares`.
    pub fn new<R>(initial_state: S, reducer: R, middlewares: Vec<SharedMiddleware<S, A>>) -> Self
    where
        R: Reducer<State = S, Action = A>,
    {
        let (changes, _) = watch::channel(initial_state.clone());
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(initial_state),
                reducer: Arc::new(reducer),
                middlewares,
                changes,
            }),
        }
    }

    /// Feed an action into the store.
    ///
    /// The returned future resolves once the action has been reduced, every
    /// middleware has finished with it, and every follow-up action has
    /// itself settled. The future is `'static` and can be spawned.
    pub fn send(&self, action: A) -> BoxFuture<'static, ()> {
        let store = self.clone();
        async move { store.dispatch(action).await }.boxed()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.inner.state.lock().clone()
    }

    /// Project the current state without cloning all of it.
    ///
    /// `project` runs while the state lock is held. Calling back into this
    /// store from it deadlocks.
    pub fn read<T>(&self, project: impl FnOnce(&S) -> T) -> T {
        let state = self.inner.state.lock();
        project(&*state)
    }

    /// Clone the value at `path` in the current state.
    pub fn select<T: Clone>(&self, path: &KeyPath<S, T>) -> T {
        self.read(|state| path.get(state).clone())
    }

    /// Receiver that observes every reduced state.
    ///
    /// Latest-value semantics: a slow receiver skips intermediate states.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.inner.changes.subscribe()
    }

    /// Two-way view of one value derived from the state.
    pub fn binding<V, X, E>(&self, extract: X, embed: E) -> Binding<S, A, V>
    where
        X: Fn(&S) -> V + Send + Sync + 'static,
        E: Fn(V) -> A + Send + Sync + 'static,
    {
        Binding::new(self.clone(), extract, embed)
    }

    async fn dispatch(self, action: A) {
        let state = self.reduce(action.clone());

        let mut units = JoinSet::new();
        for middleware in &self.inner.middlewares {
            let middleware = Arc::clone(middleware);
            let state = state.clone();
            let action = action.clone();
            units.spawn(async move { middleware.process(state, action).await });
        }

        while let Some(joined) = units.join_next().await {
            match joined {
                Ok(Some(next)) => {
                    tracing::debug!("middleware produced follow-up action");
                    self.send(next).await;
                }
                Ok(None) => {}
                Err(err) if err.is_panic() => {
                    tracing::warn!("middleware panicked, dropping its follow-up: {}", err);
                }
                Err(err) => {
                    tracing::trace!("middleware task ended without result: {}", err);
                }
            }
        }
    }

    /// Apply the reducer and publish the result in one critical section.
    fn reduce(&self, action: A) -> S {
        let mut state = self.inner.state.lock();
        let next = self.inner.reducer.reduce(state.clone(), action);
        *state = next.clone();
        self.inner.changes.send_replace(next.clone());
        tracing::trace!(
            middlewares = self.inner.middlewares.len(),
            "action reduced"
        );
        next
    }
}

impl<S: State, A: Action> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
