//! Preset command handlers.

use tabled::Tabled;

use fsremote_core::{ListItem, Route};

use crate::cli::{GlobalOpts, PresetsArgs, PresetsCommand};
use crate::error::CliError;
use crate::output;

use super::Remote;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PresetRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&ListItem> for PresetRow {
    fn from(item: &ListItem) -> Self {
        Self {
            key: item.key.to_string(),
            name: item.name.clone().unwrap_or_default(),
        }
    }
}

pub async fn handle(
    remote: &mut Remote,
    args: PresetsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PresetsCommand::List => {
            remote.router.navigate(Route::Presets, &remote.cancel).await?;
            let out = output::render_list(
                &global.output,
                remote.router.presets().items(),
                |p| PresetRow::from(p),
                |p| p.label(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PresetsCommand::Select { preset } => {
            // Home first so selecting can navigate back to it.
            remote.router.navigate(Route::Home, &remote.cancel).await?;
            remote.router.navigate(Route::Presets, &remote.cancel).await?;

            let item = remote
                .router
                .presets()
                .find(&preset)
                .cloned()
                .ok_or_else(|| CliError::NotFound {
                    what: format!("Preset '{preset}'"),
                    hint: "Run: fsremote presets list".into(),
                })?;

            let action = remote.router.presets_mut().select(&item.key).await?;
            remote.router.follow(action, &remote.cancel).await?;

            output::notice(global, &format!("Playing preset {}", item.label()));
            Ok(())
        }
    }
}
