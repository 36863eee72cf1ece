use thiserror::Error;

use super::quote::Quote;
use super::time::TimeOfDay;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no matching quote found")]
    NotFound,
}

/// Source of quotes consumed by [`ClockMiddleware`](super::ClockMiddleware).
pub trait QuoteLookup: Send + Sync + 'static {
    /// A random quote filed under `at` whose id is not in `excluding`.
    fn random_excluding(&self, at: TimeOfDay, excluding: &[String]) -> Result<Quote, LookupError>;

    /// The quote with identifier `id`.
    fn fetch(&self, id: &str) -> Result<Quote, LookupError>;
}
