//! symview-server: the preview "panel"
//!
//! Serves one rendered preview page with its stylesheet, and receives
//! clipboard messages posted by the page.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ServerError};
pub use routes::{MESSAGE_PATH, STYLESHEET_PATH};
pub use server::{build_router, PreviewServer, ServerConfig};
pub use state::PreviewSession;
