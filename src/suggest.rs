//! Search suggestions
//!
//! A reusable controller that turns keystrokes into debounced, race-safe
//! suggestion lookups. The worker and popup live alongside it.

mod controller;
mod debouncer;
mod selection;
mod source;
pub mod suggest_render;
mod worker;

pub use controller::{SuggestController, SuggestRequest, SuggestResponse};
pub use debouncer::Debouncer;
pub use selection::{Direction, SelectionState};
pub use source::SuggestionSource;
pub use worker::spawn_worker;
