//! Literature clock: a quote for the current time of day.
//!
//! The feature is a regular store client. [`ClockReducer`] records which
//! quote is shown; [`ClockMiddleware`] asks an injected [`QuoteLookup`] for
//! quotes and answers with a [`ClockAction::Show`] follow-up. Lookup
//! failures never reach the store: they become the fallback quote or a
//! fresh refresh.

mod action;
mod catalog;
mod lookup;
mod middleware;
mod quote;
mod reducer;
mod state;
mod time;

pub use action::ClockAction;
pub use catalog::{CatalogError, QuoteCatalog};
pub use lookup::{LookupError, QuoteLookup};
pub use middleware::ClockMiddleware;
pub use quote::Quote;
pub use reducer::ClockReducer;
pub use state::ClockState;
pub use time::{TimeOfDay, TimeOfDayError};
