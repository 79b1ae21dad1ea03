//! Command implementations for the symview CLI

pub mod list;
pub mod pick;
pub mod preview;
pub mod render;
mod source;

// Re-export dispatcher functions for flat access from main.rs
pub use list::run_list;
pub use pick::{run_pick, run_pick_url};
pub use preview::FlowOutcome;
pub use render::run_render;
