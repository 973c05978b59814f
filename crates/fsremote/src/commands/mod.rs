//! Command dispatch: bridges CLI args -> views -> output formatting.

pub mod config_cmd;
pub mod discover;
pub mod info;
pub mod nodes;
pub mod presets;
pub mod status;
pub mod switch;
pub mod volume;

use fsremote_core::{AppContext, CancellationToken, Router};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Everything a device-bound handler needs.
pub struct Remote {
    pub ctx: AppContext,
    pub router: Router,
    pub cancel: CancellationToken,
}

impl Remote {
    pub fn new(ctx: AppContext, cancel: CancellationToken) -> Self {
        let router = Router::new(&ctx);
        Self {
            ctx,
            router,
            cancel,
        }
    }
}

/// Dispatch a device-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, remote: &mut Remote, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Status => status::handle(remote, global).await,
        Command::Power(args) => switch::power(remote, args.state, global).await,
        Command::Mute(args) => switch::mute(remote, args.state, global).await,
        Command::Volume(args) => volume::handle(remote, args, global).await,
        Command::Presets(args) => presets::handle(remote, args, global).await,
        Command::Discover => discover::handle(remote, global).await,
        Command::Get { nodes } => nodes::get(remote, nodes, global).await,
        Command::Set { node, value } => nodes::set(remote, &node, &value, global).await,
        Command::Info => info::handle(remote, global).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Validation {
            field: "command".into(),
            reason: "handled without a device connection".into(),
        }),
    }
}
