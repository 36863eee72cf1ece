use crate::clock::action::ClockAction;
use crate::clock::quote::Quote;
use crate::clock::state::ClockState;
use crate::clock::time::TimeOfDay;
use crate::mvi::Reducer;

pub struct ClockReducer;

impl Reducer for ClockReducer {
    type State = ClockState;
    type Action = ClockAction;

    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ClockAction::Refresh { at } if state.seen_at != Some(at) => ClockState {
                seen: Vec::new(),
                seen_at: Some(at),
                is_loading: true,
                ..state
            },
            ClockAction::Refresh { .. } | ClockAction::Restore { .. } => ClockState {
                is_loading: true,
                ..state
            },
            ClockAction::Show(quote) => show(state.seen, state.seen_at, quote),
            ClockAction::Recycle(quote) => show(Vec::new(), state.seen_at, quote),
        }
    }
}

fn show(mut seen: Vec<String>, seen_at: Option<TimeOfDay>, quote: Quote) -> ClockState {
    // Built-in quotes have no id and are never excluded.
    if !quote.id.is_empty() && !seen.contains(&quote.id) {
        seen.push(quote.id.clone());
    }
    ClockState {
        quote,
        seen,
        seen_at,
        is_loading: false,
    }
}
