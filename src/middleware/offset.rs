use async_trait::async_trait;

use super::Middleware;
use crate::mvi::{Action, State};
use crate::optics::{KeyPath, Prism};

/// Middleware focused on one element of an indexed collection.
///
/// Like [`Keyed`](super::Keyed), the index used for the lookup is the one
/// embedded in the follow-up, even if the collection changed meanwhile.
pub struct Offset<M: Middleware, GS, GA> {
    inner: M,
    path: KeyPath<GS, Vec<M::State>>,
    prism: Prism<GA, (usize, M::Action)>,
}

impl<M: Middleware, GS, GA> Offset<M, GS, GA> {
    pub fn new(
        inner: M,
        path: KeyPath<GS, Vec<M::State>>,
        prism: Prism<GA, (usize, M::Action)>,
    ) -> Self {
        Self { inner, path, prism }
    }
}

#[async_trait]
impl<M, GS, GA> Middleware for Offset<M, GS, GA>
where
    M: Middleware,
    GS: State,
    GA: Action,
{
    type State = GS;
    type Action = GA;

    async fn process(&self, state: GS, action: GA) -> Option<GA> {
        let (index, local_action) = self.prism.extract(&action)?;
        let Some(local_state) = self.path.get(&state).get(index).cloned() else {
            tracing::trace!(index, "offset middleware skipped: index out of bounds");
            return None;
        };

        let next = self.inner.process(local_state, local_action).await?;
        Some(self.prism.embed((index, next)))
    }
}
