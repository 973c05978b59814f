//! `status`: the home view, rendered once.

use fsremote_core::{PlayerState, Route};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::Remote;

pub async fn handle(remote: &mut Remote, global: &GlobalOpts) -> Result<(), CliError> {
    remote.router.navigate(Route::Home, &remote.cancel).await?;
    let color = output::should_color(&global.color);

    let out = output::render_single(
        &global.output,
        remote.router.home().state(),
        |s| detail(s, color),
        |s| s.volume.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub(crate) fn detail(s: &PlayerState, color: bool) -> String {
    let name = if s.name.is_empty() { "-" } else { &s.name };
    let mut lines = vec![
        output::heading(name, color),
        format!("Power:   {}", output::on_off(s.on, color)),
        format!("Volume:  {}", s.volume),
        format!("Muted:   {}", if s.muted { "yes" } else { "no" }),
    ];
    if !s.first_line.is_empty() {
        lines.push(format!("Playing: {}", s.first_line));
    }
    if !s.second_line.is_empty() {
        lines.push(format!("         {}", s.second_line));
    }
    lines.join("\n")
}
