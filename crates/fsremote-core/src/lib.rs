// fsremote-core: Views, player state, and navigation between fsremote-api and the CLI.

pub mod config;
pub mod context;
pub mod error;
pub mod nodes;
pub mod router;
pub mod state;
pub mod views;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::RemoteConfig;
pub use context::{AppContext, Session};
pub use error::CoreError;
pub use router::Router;
pub use state::PlayerState;
pub use views::{
    AppInfo, HomeView, InfoView, NavAction, PresetsView, Route, SettingsView, View,
};

// Gateway types that show up in core signatures.
pub use fsremote_api::{FsapiClient, ListItem, NodeId, NodeResponse, NodeValue, Parameters};

// Cancellation for enter hooks.
pub use tokio_util::sync::CancellationToken;
