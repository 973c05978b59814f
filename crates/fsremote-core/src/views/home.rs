// ── Home view ──
//
// Power, volume, mute, and now-playing. Every write assigns the intended
// value locally only after the device confirmed it; a failed write leaves
// local state exactly as it was.

use fsremote_api::NodeValue;
use tracing::{debug, info};

use crate::context::AppContext;
use crate::error::CoreError;
use crate::nodes;
use crate::state::PlayerState;
use crate::views::View;

pub struct HomeView {
    ctx: AppContext,
    state: PlayerState,
}

impl HomeView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            state: PlayerState::default(),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Re-read every home node and replace the local state.
    pub async fn refresh(&mut self) -> Result<&PlayerState, CoreError> {
        let params = self.ctx.gateway().get_multiple(&nodes::HOME).await?;
        debug!(?params, "home refresh");
        self.state = PlayerState::from_parameters(&params);
        Ok(&self.state)
    }

    // ── Power ────────────────────────────────────────────────────────

    pub async fn set_power(&mut self, on: bool) -> Result<(), CoreError> {
        self.ctx
            .gateway()
            .set(&nodes::POWER, &NodeValue::from(on))
            .await?;
        info!(on, "power set");
        self.state.on = on;
        Ok(())
    }

    /// Flip power relative to the last known state. Returns the new state.
    pub async fn toggle_power(&mut self) -> Result<bool, CoreError> {
        let on = !self.state.on;
        self.set_power(on).await?;
        Ok(on)
    }

    // ── Mute ─────────────────────────────────────────────────────────

    pub async fn set_mute(&mut self, muted: bool) -> Result<(), CoreError> {
        self.ctx
            .gateway()
            .set(&nodes::MUTE, &NodeValue::from(muted))
            .await?;
        info!(muted, "mute set");
        self.state.muted = muted;
        Ok(())
    }

    /// Flip mute relative to the last known state. Returns the new state.
    pub async fn toggle_mute(&mut self) -> Result<bool, CoreError> {
        let muted = !self.state.muted;
        self.set_mute(muted).await?;
        Ok(muted)
    }

    // ── Volume ───────────────────────────────────────────────────────

    /// Set an absolute volume level. Returns the level now shown.
    pub async fn set_volume(&mut self, level: i64) -> Result<i64, CoreError> {
        if level < 0 {
            return Err(CoreError::ValidationFailed {
                message: format!("volume must not be negative, got {level}"),
            });
        }
        self.ctx
            .gateway()
            .set(&nodes::VOLUME, &NodeValue::Int(level))
            .await?;
        info!(level, "volume set");
        self.state.volume = level;
        Ok(level)
    }

    /// Step the volume relative to the last known level.
    pub async fn change_volume(&mut self, delta: i64) -> Result<i64, CoreError> {
        let level = self.state.volume.saturating_add(delta);
        self.set_volume(level).await
    }
}

impl View for HomeView {
    async fn on_enter(&mut self) -> Result<(), CoreError> {
        self.refresh().await.map(|_| ())
    }
}
