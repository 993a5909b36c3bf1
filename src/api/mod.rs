//! Backend REST Bindings
//!
//! Thin wrappers over the backend HTTP API, organized by resource.

mod analytics;
mod menu;
mod restaurant;
mod upload;

// Re-export all public items
pub use analytics::*;
pub use menu::*;
pub use restaurant::*;
pub use upload::*;
