mod common;

use std::time::Duration;

use async_trait::async_trait;
use proptest::prelude::*;
use tokio::task::JoinSet;

use common::{
    Countdown, CounterAction, CounterReducer, CounterState, DelayedIncrement, Recorder,
};
use mimer::middleware::middleware_fn;
use mimer::{KeyPath, Middleware, MiddlewareExt, Reducer, Store};

fn counter_store(
    middlewares: Vec<mimer::middleware::SharedMiddleware<CounterState, CounterAction>>,
) -> Store<CounterState, CounterAction> {
    Store::new(CounterState::default(), CounterReducer, middlewares)
}

fn delayed_store(delay: Duration) -> Store<CounterState, CounterAction> {
    counter_store(vec![DelayedIncrement::after(delay).shared()])
}

#[tokio::test]
async fn send_applies_reduction() {
    let store = delayed_store(Duration::from_millis(50));

    assert_eq!(store.read(|state| state.counter), 0);
    store.send(CounterAction::Increment).await;
    assert_eq!(store.read(|state| state.counter), 1);
    store.send(CounterAction::Decrement).await;
    assert_eq!(store.read(|state| state.counter), 0);
}

#[tokio::test]
async fn send_resolves_after_follow_up_is_applied() {
    let store = delayed_store(Duration::from_millis(100));

    let task = tokio::spawn(store.send(CounterAction::SideEffect));
    assert_eq!(store.state().counter, 0);

    task.await.expect("send task");
    assert_eq!(store.state().counter, 1);
}

#[tokio::test]
async fn cancelled_send_drops_pending_follow_up() {
    let store = delayed_store(Duration::from_millis(300));

    let task = tokio::spawn(store.send(CounterAction::SideEffect));
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(store.state().counter, 0);

    task.abort();
    let joined = task.await;
    assert!(joined.expect_err("task was aborted").is_cancelled());

    // Well past the middleware delay: the follow-up must never land.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(store.state().counter, 0);
}

#[tokio::test]
async fn dropped_send_future_cancels_middleware() {
    let store = delayed_store(Duration::from_millis(200));

    let timed_out =
        tokio::time::timeout(Duration::from_millis(20), store.send(CounterAction::SideEffect)).await;
    assert!(timed_out.is_err());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(store.state().counter, 0);
}

/// Answers `SideEffect` with `Set(100)` at once, then `Set(100)` with
/// `Increment` after `delay`.
struct TwoStep {
    delay: Duration,
}

#[async_trait]
impl Middleware for TwoStep {
    type State = CounterState;
    type Action = CounterAction;

    async fn process(&self, _state: CounterState, action: CounterAction) -> Option<CounterAction> {
        match action {
            CounterAction::SideEffect => Some(CounterAction::Set(100)),
            CounterAction::Set(100) => {
                tokio::time::sleep(self.delay).await;
                Some(CounterAction::Increment)
            }
            _ => None,
        }
    }
}

#[tokio::test]
async fn cancelled_send_drops_nested_follow_ups() {
    let store = counter_store(vec![TwoStep {
        delay: Duration::from_millis(200),
    }
    .shared()]);

    let task = tokio::spawn(store.send(CounterAction::SideEffect));
    tokio::time::sleep(Duration::from_millis(50)).await;
    // The first follow-up has landed; the second is still sleeping.
    assert_eq!(store.state().counter, 100);

    task.abort();
    assert!(task.await.expect_err("task was aborted").is_cancelled());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(store.state().counter, 100);
}

#[tokio::test]
async fn binding_reads_and_writes_through_store() {
    let store = delayed_store(Duration::from_millis(50));
    let binding = store.binding(|state: &CounterState| state.counter, CounterAction::Set);

    assert_eq!(binding.get(), 0);
    binding.set(10).await.expect("binding send");
    assert_eq!(store.state().counter, 10);
    assert_eq!(binding.get(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sends_lose_no_updates() {
    let store = delayed_store(Duration::from_millis(1));

    let mut sends = JoinSet::new();
    for _ in 0..1_000_000 {
        sends.spawn(store.send(CounterAction::Increment));
    }
    while let Some(joined) = sends.join_next().await {
        joined.expect("send task");
    }

    assert_eq!(store.state().counter, 1_000_000);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn middleware_observes_state_produced_by_its_action() {
    let (recorder, seen) = Recorder::new();
    let store = counter_store(vec![recorder.shared()]);

    let mut sends = JoinSet::new();
    for _ in 0..100 {
        sends.spawn(store.send(CounterAction::Increment));
    }
    while let Some(joined) = sends.join_next().await {
        joined.expect("send task");
    }

    let mut counters: Vec<i64> = seen.lock().iter().map(|(state, _)| state.counter).collect();
    counters.sort_unstable();
    assert_eq!(counters, (1..=100).collect::<Vec<_>>());
}

#[tokio::test]
async fn follow_up_chain_settles_before_send_returns() {
    let (recorder, seen) = Recorder::new();
    let store = counter_store(vec![Countdown.shared(), recorder.shared()]);

    store.send(CounterAction::Set(3)).await;

    assert_eq!(store.state().counter, 0);
    let mut values: Vec<i64> = seen
        .lock()
        .iter()
        .filter_map(|(_, action)| match action {
            CounterAction::Set(value) => Some(*value),
            _ => None,
        })
        .collect();
    values.sort_unstable();
    assert_eq!(values, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn every_middleware_sees_every_action() {
    let (first, first_seen) = Recorder::new();
    let (second, second_seen) = Recorder::new();
    let store = counter_store(vec![first.shared(), second.shared()]);

    store.send(CounterAction::Set(7)).await;

    assert_eq!(
        *first_seen.lock(),
        vec![(CounterState::with(7), CounterAction::Set(7))]
    );
    assert_eq!(*first_seen.lock(), *second_seen.lock());
}

#[tokio::test]
async fn closure_middleware_follow_up_is_reduced() {
    let store = counter_store(vec![middleware_fn(
        |state: CounterState, action: CounterAction| async move {
            (action == CounterAction::Increment && state.counter == 1)
                .then_some(CounterAction::Decrement)
        },
    )
    .shared()]);

    store.send(CounterAction::Increment).await;

    assert_eq!(store.state().counter, 0);
}

struct Panicking;

#[async_trait]
impl Middleware for Panicking {
    type State = CounterState;
    type Action = CounterAction;

    async fn process(&self, _state: CounterState, action: CounterAction) -> Option<CounterAction> {
        if action == CounterAction::SideEffect {
            panic!("middleware failure");
        }
        None
    }
}

#[tokio::test]
async fn panicking_middleware_yields_nothing() {
    let store = counter_store(vec![
        Panicking.shared(),
        DelayedIncrement::after(Duration::from_millis(10)).shared(),
    ]);

    store.send(CounterAction::SideEffect).await;

    assert_eq!(store.state().counter, 1);
}

#[tokio::test]
async fn subscribers_observe_reduced_state() {
    let store = counter_store(Vec::new());
    let mut changes = store.subscribe();
    assert_eq!(changes.borrow().counter, 0);

    store.send(CounterAction::Set(42)).await;

    assert!(changes.has_changed().expect("store alive"));
    assert_eq!(changes.borrow_and_update().counter, 42);
}

#[tokio::test]
async fn subscriber_wakes_on_change() {
    let store = delayed_store(Duration::from_millis(20));
    let mut changes = store.subscribe();

    let sender = tokio::spawn(store.send(CounterAction::SideEffect));
    // SideEffect leaves the counter alone; the follow-up Increment moves it.
    loop {
        changes.changed().await.expect("store alive");
        if changes.borrow_and_update().counter == 1 {
            break;
        }
    }
    sender.await.expect("send task");
}

#[tokio::test]
async fn select_reads_through_key_path() {
    let store = counter_store(Vec::new());
    let counter = KeyPath::new(|state: &CounterState| &state.counter);

    store.send(CounterAction::Set(5)).await;

    assert_eq!(store.select(&counter), 5);
}

fn counter_action() -> impl Strategy<Value = CounterAction> {
    prop_oneof![
        Just(CounterAction::Increment),
        Just(CounterAction::Decrement),
        Just(CounterAction::SideEffect),
        (-1_000i64..1_000).prop_map(CounterAction::Set),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn serial_sends_match_left_fold(actions in prop::collection::vec(counter_action(), 0..40)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");

        let (recorder, _seen) = Recorder::new();
        let store = counter_store(vec![recorder.shared()]);

        let final_state = runtime.block_on(async {
            for action in actions.clone() {
                store.send(action).await;
            }
            store.state()
        });

        let expected = actions
            .into_iter()
            .fold(CounterState::default(), |state, action| CounterReducer.reduce(state, action));
        prop_assert_eq!(final_state, expected);
    }
}
