// ── Settings view ──
//
// The only writer of the shared context. Discovery reports where the
// device itself answers on the network; switching the facade address is a
// separate, explicit step.

use tracing::info;
use url::Url;

use crate::context::AppContext;
use crate::error::CoreError;
use crate::views::View;

pub struct SettingsView {
    ctx: AppContext,
    discovered: Option<Url>,
}

impl SettingsView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            discovered: None,
        }
    }

    /// Address of the REST facade currently in use.
    pub fn current_url(&self) -> Url {
        self.ctx.config().url
    }

    /// Device address found by the last [`discover`](Self::discover).
    pub fn discovered(&self) -> Option<&Url> {
        self.discovered.as_ref()
    }

    /// Ask the facade for the device's network address.
    pub async fn discover(&mut self) -> Result<Url, CoreError> {
        let found = self.ctx.gateway().discover().await?;
        let url = found.device_url().map_err(|e| CoreError::Decode {
            message: format!("discovered address {}:{} is not a URL: {e}", found.ip, found.value.port),
        })?;
        info!(%url, "device discovered");
        self.discovered = Some(url.clone());
        Ok(url)
    }

    /// Point every view at another facade.
    pub fn use_url(&self, url: Url) -> Result<(), CoreError> {
        self.ctx.set_device_url(url)
    }

    /// Change the step used by relative volume changes.
    pub fn set_volume_step(&self, step: i64) -> Result<(), CoreError> {
        if step <= 0 {
            return Err(CoreError::ValidationFailed {
                message: format!("volume step must be positive, got {step}"),
            });
        }
        let mut config = self.ctx.config();
        config.volume_step = step;
        self.ctx.set_config(config)
    }
}

impl View for SettingsView {
    async fn on_enter(&mut self) -> Result<(), CoreError> {
        Ok(())
    }
}
