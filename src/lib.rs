//! vidq: a terminal video browser with debounced, race-safe search suggestions

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod input;
pub mod suggest;
pub mod widgets;
mod worker;
