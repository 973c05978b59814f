//! Clap derive structures for the `fsremote` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Only depends on clap and clap_complete so `build.rs` can include it.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fsremote -- remote control for FSAPI network audio devices
#[derive(Debug, Parser)]
#[command(
    name = "fsremote",
    version,
    about = "Control FSAPI network audio devices from the command line",
    long_about = "A remote control for network radios and streamers that expose the\n\
        FSAPI REST facade: power, volume, mute, now-playing, and presets.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device profile to use
    #[arg(long, short = 'p', env = "FSREMOTE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// REST facade URL (overrides profile)
    #[arg(long, short = 'd', env = "FSREMOTE_DEVICE", global = true)]
    pub device: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FSREMOTE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (0 disables; overrides profile)
    #[arg(long, env = "FSREMOTE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show power, volume, mute, and now-playing
    #[command(alias = "st", alias = "home")]
    Status,

    /// Switch the device on or off
    Power(SwitchArgs),

    /// Mute or unmute audio
    Mute(SwitchArgs),

    /// Change the volume
    #[command(alias = "vol")]
    Volume(VolumeArgs),

    /// List and select presets
    Presets(PresetsArgs),

    /// Ask the facade for the device's network address
    Discover,

    /// Read raw nodes
    Get {
        /// Node identifiers (e.g. netRemote.sys.power)
        #[arg(required = true)]
        nodes: Vec<String>,
    },

    /// Write a raw node value
    Set {
        /// Node identifier
        node: String,

        /// Value; integers are sent as numbers, anything else as text
        value: String,
    },

    /// Show version and target device
    Info,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SWITCHES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SwitchArgs {
    /// Target state (defaults to toggle)
    #[arg(value_enum, default_value = "toggle")]
    pub state: SwitchState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwitchState {
    On,
    Off,
    Toggle,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VOLUME
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VolumeArgs {
    #[command(subcommand)]
    pub command: VolumeCommand,
}

#[derive(Debug, Subcommand)]
pub enum VolumeCommand {
    /// Raise the volume
    Up {
        /// Step size (defaults to the profile's volume_step)
        #[arg(long, short = 's')]
        step: Option<i64>,
    },

    /// Lower the volume
    Down {
        /// Step size (defaults to the profile's volume_step)
        #[arg(long, short = 's')]
        step: Option<i64>,
    },

    /// Set an absolute level
    Set {
        /// Volume level
        level: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRESETS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    pub command: PresetsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PresetsCommand {
    /// List stored presets
    #[command(alias = "ls")]
    List,

    /// Select a preset by key or name
    Select {
        /// Preset key or name
        preset: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration
    Show,

    /// Add or update a profile's device URL
    SetDevice {
        /// Profile name
        name: String,

        /// REST facade URL
        url: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
