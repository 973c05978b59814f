//! Static about page.

use serde::Serialize;

use crate::context::AppContext;
use crate::error::CoreError;
use crate::views::View;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub device: String,
}

pub struct InfoView {
    ctx: AppContext,
}

impl InfoView {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn info(&self) -> AppInfo {
        AppInfo {
            name: "fsremote",
            version: env!("CARGO_PKG_VERSION"),
            device: self.ctx.config().url.to_string(),
        }
    }
}

impl View for InfoView {
    async fn on_enter(&mut self) -> Result<(), CoreError> {
        Ok(())
    }
}
