//! Unidirectional data flow primitives.
//!
//! # Architecture
//!
//! ```text
//! send(Action) ──→ Reducer ──→ State ──→ Middleware ─┐
//!      ↑                                             │
//!      └──────────── Option<Action> ─────────────────┘
//! ```
//!
//! - **State**: value owned by a store, replaced wholesale on every reduction
//! - **Action**: intent or event fed to the store
//! - **Reducer**: pure function that transforms state based on actions

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::{reducer_fn, FnReducer, Reducer};
pub use state::State;
