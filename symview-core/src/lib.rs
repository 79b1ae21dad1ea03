pub mod bridge;
pub mod config;
pub mod error;
pub mod extract;
pub mod locator;
pub mod remote;
pub mod render;

pub use bridge::{BridgeOutcome, ClipboardBridge, ClipboardSink, Notifier, PanelMessage};
pub use config::{ConfirmationStyle, SymviewConfig};
pub use error::{Result, SymbolError};
pub use extract::{extract_symbols, SymbolFragment};
pub use locator::{list_candidates, read_local, resolve_workspace, Candidate, LocatorOptions};
pub use remote::{build_client, fetch_text};
pub use render::{render_preview, MessageBridge, RenderOptions, Stylesheet};
