//! Content pages
//!
//! The browsing half of the client. Pages load on a background worker and
//! only the newest load is shown.

pub mod content_render;
mod content_state;
mod loader;
mod navigator;
mod page;

pub use content_state::{ContentRequest, ContentResponse, ContentState};
pub use loader::{ContentSource, load_page, spawn_worker};
pub use navigator::Navigator;
pub use page::{Page, PageData, PageStatus};
