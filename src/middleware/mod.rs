//! Effectful units observing reduced state.
//!
//! A [`Middleware`] sees every action a store reduces, together with the
//! state that reduction produced, and may answer with one follow-up action.
//! Follow-ups are sent back into the store, so a middleware never mutates
//! state directly.
//!
//! "Nothing to do", "failed" and "not applicable" are all expressed as
//! `None`; there is no error channel back into the store.
//!
//! # Scoping
//!
//! [`MiddlewareExt`] adapts a middleware written against a narrow
//! state/action pair to a wider one without touching the original:
//!
//! | Adapter | State focus | Action focus |
//! |---|---|---|
//! | [`optional`](MiddlewareExt::optional) | `Option<Local>` | identity |
//! | [`lifted`](MiddlewareExt::lifted) | `KeyPath<Global, Local>` | `Prism<GlobalAction, Local>` |
//! | [`keyed`](MiddlewareExt::keyed) | `KeyPath<Global, HashMap<K, Local>>` | `Prism<GlobalAction, (K, Local)>` |
//! | [`offset`](MiddlewareExt::offset) | `KeyPath<Global, Vec<Local>>` | `Prism<GlobalAction, (usize, Local)>` |
//!
//! When narrowing fails the adapter answers `None` without invoking the
//! inner middleware.

mod keyed;
mod lifted;
mod offset;
mod optional;

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::mvi::{Action, State};
use crate::optics::{KeyPath, Prism};

pub use keyed::Keyed;
pub use lifted::Lifted;
pub use offset::Offset;
pub use optional::Optional;

/// Type-erased middleware as stored by [`Store`](crate::store::Store).
pub type SharedMiddleware<S, A> = Arc<dyn Middleware<State = S, Action = A>>;

/// Side-effect handler.
#[async_trait]
pub trait Middleware: Send + Sync + 'static {
    /// State snapshot type this middleware observes.
    type State: State;

    /// Action type this middleware observes and produces.
    type Action: Action;

    /// Observe `action` and the state it reduced to.
    ///
    /// Runs on its own task. The future may be dropped at any await point
    /// when the owning `send` is cancelled, in which case no follow-up is
    /// delivered.
    async fn process(&self, state: Self::State, action: Self::Action) -> Option<Self::Action>;
}

/// Middleware backed by an async closure.
pub struct FnMiddleware<S, A, F> {
    process: F,
    _marker: PhantomData<fn(S, A) -> A>,
}

/// Wrap an async closure as a [`Middleware`].
///
/// ```
/// use mimer::middleware::{middleware_fn, Middleware};
/// use mimer::mvi::{Action, State};
///
/// #[derive(Clone)]
/// struct Count(u32);
/// impl State for Count {}
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Tick {
///     Ping,
///     Pong,
/// }
/// impl Action for Tick {}
///
/// let echo = middleware_fn(|_: Count, action: Tick| async move {
///     (action == Tick::Ping).then_some(Tick::Pong)
/// });
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// assert_eq!(echo.process(Count(0), Tick::Ping).await, Some(Tick::Pong));
/// assert_eq!(echo.process(Count(0), Tick::Pong).await, None);
/// # });
/// ```
pub fn middleware_fn<S, A, F, Fut>(process: F) -> FnMiddleware<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(S, A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<A>> + Send + 'static,
{
    FnMiddleware {
        process,
        _marker: PhantomData,
    }
}

#[async_trait]
impl<S, A, F, Fut> Middleware for FnMiddleware<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(S, A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<A>> + Send + 'static,
{
    type State = S;
    type Action = A;

    async fn process(&self, state: S, action: A) -> Option<A> {
        (self.process)(state, action).await
    }
}

/// Scoping adapters available on every middleware.
pub trait MiddlewareExt: Middleware + Sized {
    /// Run only while the state is present.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Run against the sub-state at `path` for actions `prism` extracts.
    fn lifted<GS, GA>(
        self,
        path: KeyPath<GS, Self::State>,
        prism: Prism<GA, Self::Action>,
    ) -> Lifted<Self, GS, GA>
    where
        GS: State,
        GA: Action,
    {
        Lifted::new(self, path, prism)
    }

    /// Run against the map entry named by the action's key.
    fn keyed<GS, GA, K>(
        self,
        path: KeyPath<GS, HashMap<K, Self::State>>,
        prism: Prism<GA, (K, Self::Action)>,
    ) -> Keyed<Self, GS, GA, K>
    where
        GS: State,
        GA: Action,
        K: Eq + Hash + Clone + Send + Sync + 'static,
    {
        Keyed::new(self, path, prism)
    }

    /// Run against the collection element at the action's index.
    fn offset<GS, GA>(
        self,
        path: KeyPath<GS, Vec<Self::State>>,
        prism: Prism<GA, (usize, Self::Action)>,
    ) -> Offset<Self, GS, GA>
    where
        GS: State,
        GA: Action,
    {
        Offset::new(self, path, prism)
    }

    /// Erase the concrete type for a store's middleware list.
    fn shared(self) -> SharedMiddleware<Self::State, Self::Action> {
        Arc::new(self)
    }
}

impl<M: Middleware> MiddlewareExt for M {}
