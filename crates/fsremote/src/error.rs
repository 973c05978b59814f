//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use fsremote_config::ConfigError;
use fsremote_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const REJECTED: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to device at {url}")]
    #[diagnostic(
        code(fsremote::connection_failed),
        help(
            "Check that the REST facade is running and reachable.\n\
             Reason: {reason}\n\
             Try: fsremote --device http://<host>:<port>/ status"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Device did not answer in time")]
    #[diagnostic(
        code(fsremote::timeout),
        help("Increase the timeout with --timeout or check the device is awake.")
    )]
    Timeout,

    #[error("Device returned HTTP {status}: {status_text}")]
    #[diagnostic(code(fsremote::http))]
    Http { status: u16, status_text: String },

    // ── Device ───────────────────────────────────────────────────────
    #[error("Device rejected the request (status {status})")]
    #[diagnostic(
        code(fsremote::rejected),
        help("The node may be read-only, or the value out of range for this device.")
    )]
    Rejected { status: String },

    #[error("Unexpected response from device: {message}")]
    #[diagnostic(code(fsremote::decode))]
    Decode { message: String },

    #[error("{what} not found")]
    #[diagnostic(code(fsremote::not_found), help("{hint}"))]
    NotFound { what: String, hint: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fsremote::validation))]
    Validation { field: String, reason: String },

    #[error("Interrupted")]
    #[diagnostic(code(fsremote::cancelled))]
    Cancelled,

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(fsremote::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: fsremote config set-device {name} <url>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No device configured")]
    #[diagnostic(
        code(fsremote::no_config),
        help(
            "Pass --device <url>, set FSREMOTE_DEVICE, or run: fsremote config init\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(fsremote::config))]
    Config(ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(fsremote::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::NotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NoConfig { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Timeout => Self::Timeout,
            CoreError::Http {
                status,
                status_text,
            } => Self::Http {
                status,
                status_text,
            },
            CoreError::Rejected { status } => Self::Rejected { status },
            CoreError::Decode { message } => Self::Decode { message },
            CoreError::NotFound { what } => Self::NotFound {
                what,
                hint: "Check the node name; `fsremote get <node>` reads raw nodes.".into(),
            },
            CoreError::ValidationFailed { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::Config { message } => Self::Validation {
                field: "device".into(),
                reason: message,
            },
            CoreError::Cancelled { .. } => Self::Cancelled,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::NoProfile { profile } => Self::ProfileNotFound {
                name: profile,
                available: String::new(),
            },
            other => Self::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_maps_to_its_own_exit_code() {
        let err = CliError::from(CoreError::Rejected {
            status: "42".into(),
        });
        assert_eq!(err.exit_code(), exit_code::REJECTED);
        assert_eq!(err.to_string(), "Device rejected the request (status 42)");
    }

    #[test]
    fn connection_problems_have_distinct_codes() {
        assert_eq!(
            CliError::from(CoreError::Timeout).exit_code(),
            exit_code::TIMEOUT
        );
        let refused = CliError::from(CoreError::ConnectionFailed {
            url: "http://127.0.0.1:9/".into(),
            reason: "connection refused".into(),
        });
        assert_eq!(refused.exit_code(), exit_code::CONNECTION);
    }

    #[test]
    fn http_failures_are_general() {
        let err = CliError::from(CoreError::Http {
            status: 502,
            status_text: "Bad Gateway".into(),
        });
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn validation_is_a_usage_error() {
        let err = CliError::from(ConfigError::Validation {
            field: "device".into(),
            reason: "invalid URL".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
