use crate::clock::quote::Quote;
use crate::clock::time::TimeOfDay;
use crate::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum ClockAction {
    /// Show a quote for `at` that has not been shown yet.
    Refresh { at: TimeOfDay },
    /// Show the quote with `id` again. Falls back to a refresh for `at` when
    /// the id is unknown.
    Restore { id: String, at: TimeOfDay },
    /// Result of a lookup.
    Show(Quote),
    /// Every quote for the current minute has been seen; `Quote` starts a
    /// new cycle.
    Recycle(Quote),
}

impl Action for ClockAction {}
