//! Polling client - Typed API access and the poll-render loop
//!
//! The viewer shows one of three screens (adventure list, party view,
//! character modal) and refetches whichever is active on a timer. There is
//! one owned, cancellable refresh task keyed by the current view; fetches
//! are idempotent so the user-driven and timer-driven paths share them.

mod api;
mod scheduler;
mod view;

pub use api::{BoardClient, BoardError};
pub use scheduler::RefreshScheduler;
pub use view::ViewState;
