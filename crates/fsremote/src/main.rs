mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fsremote_core::{AppContext, CancellationToken};

use crate::cli::{Cli, Command};
use crate::commands::Remote;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a device
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "fsremote", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let cfg = config::load_config()?;
            let remote_config = config::resolve(&cli.global, &cfg)?;
            tracing::debug!(url = %remote_config.url, "resolved device");

            let ctx = AppContext::new(remote_config)?;
            let cancel = CancellationToken::new();
            spawn_interrupt_watch(cancel.clone());

            let mut remote = Remote::new(ctx, cancel);
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &mut remote, &cli.global).await
        }
    }
}

/// Ctrl-C cancels whichever view is still entering.
fn spawn_interrupt_watch(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupt received");
            cancel.cancel();
        }
    });
}
