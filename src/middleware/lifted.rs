use async_trait::async_trait;

use super::Middleware;
use crate::mvi::{Action, State};
use crate::optics::{KeyPath, Prism};

/// Middleware focused on one field of a larger state and one case of a
/// larger action.
pub struct Lifted<M: Middleware, GS, GA> {
    inner: M,
    path: KeyPath<GS, M::State>,
    prism: Prism<GA, M::Action>,
}

impl<M: Middleware, GS, GA> Lifted<M, GS, GA> {
    pub fn new(inner: M, path: KeyPath<GS, M::State>, prism: Prism<GA, M::Action>) -> Self {
        Self { inner, path, prism }
    }
}

#[async_trait]
impl<M, GS, GA> Middleware for Lifted<M, GS, GA>
where
    M: Middleware,
    GS: State,
    GA: Action,
{
    type State = GS;
    type Action = GA;

    async fn process(&self, state: GS, action: GA) -> Option<GA> {
        let local_action = self.prism.extract(&action)?;
        let local_state = self.path.get(&state).clone();

        let next = self.inner.process(local_state, local_action).await?;
        Some(self.prism.embed(next))
    }
}
