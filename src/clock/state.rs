use crate::clock::quote::Quote;
use crate::clock::time::TimeOfDay;
use crate::mvi::State;

#[derive(Debug, Clone, PartialEq)]
pub struct ClockState {
    /// Quote currently shown.
    pub quote: Quote,
    /// Ids of quotes already shown for `seen_at`, oldest first.
    pub seen: Vec<String>,
    /// Minute `seen` belongs to.
    pub seen_at: Option<TimeOfDay>,
    /// A lookup is in flight.
    pub is_loading: bool,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            quote: Quote::empty(),
            seen: Vec::new(),
            seen_at: None,
            is_loading: false,
        }
    }
}

impl State for ClockState {}
