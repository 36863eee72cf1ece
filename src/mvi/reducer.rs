//! Reducer trait.

use std::marker::PhantomData;

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects. The store calls
    /// it while holding its state lock, so it must not block or re-enter the
    /// store.
    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State;
}

/// Reducer backed by a plain function or closure.
pub struct FnReducer<S, A, F> {
    reduce: F,
    _marker: PhantomData<fn(S, A) -> S>,
}

/// Wrap a closure as a [`Reducer`].
pub fn reducer_fn<S, A, F>(reduce: F) -> FnReducer<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(S, A) -> S + Send + Sync + 'static,
{
    FnReducer {
        reduce,
        _marker: PhantomData,
    }
}

impl<S, A, F> Reducer for FnReducer<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(S, A) -> S + Send + Sync + 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: S, action: A) -> S {
        (self.reduce)(state, action)
    }
}
