//! Terminal shell
//!
//! Wires the search bar, the suggestion controller and the content pages
//! together, routes keyboard and mouse input, and draws the frame.

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

pub use app_state::{App, Focus, LayoutRegions};
