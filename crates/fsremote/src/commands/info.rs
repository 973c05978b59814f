use fsremote_core::Route;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::Remote;

pub async fn handle(remote: &mut Remote, global: &GlobalOpts) -> Result<(), CliError> {
    remote.router.navigate(Route::Info, &remote.cancel).await?;
    let info = remote.router.info().info();

    let out = output::render_single(
        &global.output,
        &info,
        |i| format!("{} {}\nDevice: {}", i.name, i.version, i.device),
        |i| i.version.to_owned(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
