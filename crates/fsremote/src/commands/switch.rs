//! `power` and `mute`: on, off, or toggle against the last known state.

use fsremote_core::Route;

use crate::cli::{GlobalOpts, SwitchState};
use crate::error::CliError;
use crate::output;

use super::Remote;

pub async fn power(
    remote: &mut Remote,
    state: SwitchState,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let on = match state {
        SwitchState::On => {
            remote.router.home_mut().set_power(true).await?;
            true
        }
        SwitchState::Off => {
            remote.router.home_mut().set_power(false).await?;
            false
        }
        SwitchState::Toggle => {
            // Toggle needs the current state first.
            remote.router.navigate(Route::Home, &remote.cancel).await?;
            remote.router.home_mut().toggle_power().await?
        }
    };
    output::notice(global, &format!("Power {}", if on { "on" } else { "off" }));
    Ok(())
}

pub async fn mute(
    remote: &mut Remote,
    state: SwitchState,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let muted = match state {
        SwitchState::On => {
            remote.router.home_mut().set_mute(true).await?;
            true
        }
        SwitchState::Off => {
            remote.router.home_mut().set_mute(false).await?;
            false
        }
        SwitchState::Toggle => {
            remote.router.navigate(Route::Home, &remote.cancel).await?;
            remote.router.home_mut().toggle_mute().await?
        }
    };
    output::notice(global, if muted { "Muted" } else { "Unmuted" });
    Ok(())
}
