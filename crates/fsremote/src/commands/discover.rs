//! `discover`: report where the device answers on the network.

use serde::Serialize;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::Remote;

#[derive(Serialize)]
struct Found {
    facade: String,
    device: String,
}

pub async fn handle(remote: &mut Remote, global: &GlobalOpts) -> Result<(), CliError> {
    let settings = remote.router.settings_mut();
    let device = settings.discover().await?;
    let found = Found {
        facade: settings.current_url().to_string(),
        device: device.to_string(),
    };

    let out = output::render_single(
        &global.output,
        &found,
        |f| format!("Facade: {}\nDevice: {}", f.facade, f.device),
        |f| f.device.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
