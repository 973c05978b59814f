//! Volume command handlers.

use fsremote_core::Route;

use crate::cli::{GlobalOpts, VolumeArgs, VolumeCommand};
use crate::error::CliError;
use crate::output;

use super::Remote;

pub async fn handle(
    remote: &mut Remote,
    args: VolumeArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let level = match args.command {
        VolumeCommand::Up { step } => step_by(remote, step, 1).await?,
        VolumeCommand::Down { step } => step_by(remote, step, -1).await?,
        VolumeCommand::Set { level } => remote.router.home_mut().set_volume(level).await?,
    };
    output::notice(global, &format!("Volume {level}"));
    Ok(())
}

/// Relative change from the device's current level.
async fn step_by(remote: &mut Remote, step: Option<i64>, sign: i64) -> Result<i64, CliError> {
    if let Some(step) = step {
        remote.router.settings_mut().set_volume_step(step)?;
    }
    let step = remote.ctx.config().volume_step;

    remote.router.navigate(Route::Home, &remote.cancel).await?;
    Ok(remote
        .router
        .home_mut()
        .change_volume(step.saturating_mul(sign))
        .await?)
}
