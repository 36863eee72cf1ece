//! Shared test fixtures: a counter feature and instrumented middleware.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use mimer::{Action, Middleware, Reducer, State};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterState {
    pub counter: i64,
}

impl State for CounterState {}

impl CounterState {
    pub fn with(counter: i64) -> Self {
        Self { counter }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CounterAction {
    Increment,
    Decrement,
    SideEffect,
    Set(i64),
}

impl Action for CounterAction {}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(&self, state: CounterState, action: CounterAction) -> CounterState {
        match action {
            CounterAction::Increment => CounterState::with(state.counter + 1),
            CounterAction::Decrement => CounterState::with(state.counter - 1),
            CounterAction::Set(value) => CounterState::with(value),
            CounterAction::SideEffect => state,
        }
    }
}

/// Answers `Increment` with `Decrement` and vice versa.
pub struct Flip;

#[async_trait]
impl Middleware for Flip {
    type State = CounterState;
    type Action = CounterAction;

    async fn process(&self, _state: CounterState, action: CounterAction) -> Option<CounterAction> {
        match action {
            CounterAction::Increment => Some(CounterAction::Decrement),
            CounterAction::Decrement => Some(CounterAction::Increment),
            _ => None,
        }
    }
}

/// Answers `SideEffect` with `Increment` after `delay`.
pub struct DelayedIncrement {
    pub delay: Duration,
}

impl DelayedIncrement {
    pub fn after(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Middleware for DelayedIncrement {
    type State = CounterState;
    type Action = CounterAction;

    async fn process(&self, _state: CounterState, action: CounterAction) -> Option<CounterAction> {
        if action != CounterAction::SideEffect {
            return None;
        }
        tokio::time::sleep(self.delay).await;
        Some(CounterAction::Increment)
    }
}

/// Answers `Set(n)` with `Set(n - 1)` until zero.
pub struct Countdown;

#[async_trait]
impl Middleware for Countdown {
    type State = CounterState;
    type Action = CounterAction;

    async fn process(&self, _state: CounterState, action: CounterAction) -> Option<CounterAction> {
        match action {
            CounterAction::Set(value) if value > 0 => Some(CounterAction::Set(value - 1)),
            _ => None,
        }
    }
}

pub type Observations = Arc<Mutex<Vec<(CounterState, CounterAction)>>>;

/// Records every `(state, action)` pair it sees and never answers.
pub struct Recorder {
    pub seen: Observations,
}

impl Recorder {
    pub fn new() -> (Self, Observations) {
        let seen = Observations::default();
        (
            Self {
                seen: Arc::clone(&seen),
            },
            seen,
        )
    }
}

#[async_trait]
impl Middleware for Recorder {
    type State = CounterState;
    type Action = CounterAction;

    async fn process(&self, state: CounterState, action: CounterAction) -> Option<CounterAction> {
        self.seen.lock().push((state, action));
        None
    }
}

/// Wraps a middleware and counts how often it is invoked.
pub struct Counting<M> {
    inner: M,
    calls: Arc<AtomicUsize>,
}

impl<M: Middleware> Counting<M> {
    pub fn new(inner: M) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl<M: Middleware> Middleware for Counting<M> {
    type State = M::State;
    type Action = M::Action;

    async fn process(&self, state: M::State, action: M::Action) -> Option<M::Action> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.process(state, action).await
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
