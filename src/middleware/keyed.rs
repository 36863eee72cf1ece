use std::collections::HashMap;
use std::hash::Hash;

use async_trait::async_trait;

use super::Middleware;
use crate::mvi::{Action, State};
use crate::optics::{KeyPath, Prism};

/// Middleware focused on one entry of a keyed collection.
///
/// The key carried by the incoming action selects the entry and is reused
/// verbatim when the follow-up is embedded. The entry is not looked up
/// again after the inner middleware finishes.
pub struct Keyed<M: Middleware, GS, GA, K> {
    inner: M,
    path: KeyPath<GS, HashMap<K, M::State>>,
    prism: Prism<GA, (K, M::Action)>,
}

impl<M: Middleware, GS, GA, K> Keyed<M, GS, GA, K> {
    pub fn new(
        inner: M,
        path: KeyPath<GS, HashMap<K, M::State>>,
        prism: Prism<GA, (K, M::Action)>,
    ) -> Self {
        Self { inner, path, prism }
    }
}

#[async_trait]
impl<M, GS, GA, K> Middleware for Keyed<M, GS, GA, K>
where
    M: Middleware,
    GS: State,
    GA: Action,
    K: Eq + Hash + Clone + Send + Sync + 'static,
{
    type State = GS;
    type Action = GA;

    async fn process(&self, state: GS, action: GA) -> Option<GA> {
        let (key, local_action) = self.prism.extract(&action)?;
        let Some(local_state) = self.path.get(&state).get(&key).cloned() else {
            tracing::trace!("keyed middleware skipped: key not present");
            return None;
        };

        let next = self.inner.process(local_state, local_action).await?;
        Some(self.prism.embed((key, next)))
    }
}
