//! Views: the screens of the remote, each a thin owner of local display
//! state on top of the gateway.
//!
//! Every view is built from the shared [`AppContext`](crate::AppContext)
//! and exposes an [`View::on_enter`] hook that the
//! [`Router`](crate::Router) awaits whenever the view becomes active.

pub mod home;
pub mod info;
pub mod presets;
pub mod settings;

use std::future::Future;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::CoreError;

pub use home::HomeView;
pub use info::{AppInfo, InfoView};
pub use presets::PresetsView;
pub use settings::SettingsView;

/// Named destinations the router knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Presets,
    Settings,
    Info,
}

/// What a view asks the router to do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Stay,
    Back,
}

/// Navigation lifecycle of a view.
pub trait View {
    /// Load whatever the view needs before it is shown.
    fn on_enter(&mut self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
