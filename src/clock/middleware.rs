use std::sync::Arc;

use async_trait::async_trait;

use crate::clock::action::ClockAction;
use crate::clock::lookup::{LookupError, QuoteLookup};
use crate::clock::quote::Quote;
use crate::clock::state::ClockState;
use crate::clock::time::TimeOfDay;
use crate::middleware::Middleware;

/// Resolves refresh and restore requests through a [`QuoteLookup`].
pub struct ClockMiddleware {
    lookup: Arc<dyn QuoteLookup>,
}

impl ClockMiddleware {
    pub fn new(lookup: Arc<dyn QuoteLookup>) -> Self {
        Self { lookup }
    }

    /// Unseen quote for `at`. Once every quote for `at` has been seen, any
    /// quote for `at` as a [`ClockAction::Recycle`]. Otherwise the fallback.
    fn pick(&self, at: TimeOfDay, seen: &[String]) -> ClockAction {
        let picked = match self.lookup.random_excluding(at, seen) {
            Err(LookupError::NotFound) if !seen.is_empty() => {
                tracing::debug!("All quotes for {} seen, starting over", at);
                self.lookup.random_excluding(at, &[]).map(ClockAction::Recycle)
            }
            other => other.map(ClockAction::Show),
        };

        picked.unwrap_or_else(|err| {
            tracing::info!("No quote for {} ({}), showing fallback", at, err);
            ClockAction::Show(Quote::fallback())
        })
    }
}

#[async_trait]
impl Middleware for ClockMiddleware {
    type State = ClockState;
    type Action = ClockAction;

    async fn process(&self, state: ClockState, action: ClockAction) -> Option<ClockAction> {
        match action {
            ClockAction::Refresh { at } => Some(self.pick(at, &state.seen)),
            ClockAction::Restore { id, at } => match self.lookup.fetch(&id) {
                Ok(quote) => Some(ClockAction::Show(quote)),
                Err(err) => {
                    tracing::debug!("Restore of '{}' failed ({}), refreshing instead", id, err);
                    Some(ClockAction::Refresh { at })
                }
            },
            ClockAction::Show(_) | ClockAction::Recycle(_) => None,
        }
    }
}
