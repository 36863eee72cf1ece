use async_trait::async_trait;

use super::Middleware;

/// Middleware over `Option<S>` that only runs while the state is `Some`.
pub struct Optional<M> {
    inner: M,
}

impl<M: Middleware> Optional<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<M: Middleware> Middleware for Optional<M> {
    type State = Option<M::State>;
    type Action = M::Action;

    async fn process(&self, state: Self::State, action: Self::Action) -> Option<Self::Action> {
        // Absent state vetoes regardless of the action.
        let state = state?;
        self.inner.process(state, action).await
    }
}
