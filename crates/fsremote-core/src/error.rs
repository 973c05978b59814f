// ── Core error types ──
//
// User-facing errors from fsremote-core. Consumers never match on reqwest
// or serde errors directly; the `From<fsremote_api::Error>` impl sorts
// gateway failures into connection, device, and data problems.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to device at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Device did not answer in time")]
    Timeout,

    #[error("Device returned HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    // ── Device errors ────────────────────────────────────────────────
    #[error("Device rejected the request (status {status})")]
    Rejected { status: String },

    #[error("Unexpected response from device: {message}")]
    Decode { message: String },

    #[error("Not found: {what}")]
    NotFound { what: String },

    // ── Caller errors ────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Cancelled while entering {route}")]
    Cancelled { route: String },
}

impl CoreError {
    /// Returns `true` when the device never answered.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::Timeout)
    }
}

// ── Conversion from gateway errors ───────────────────────────────────

impl From<fsremote_api::Error> for CoreError {
    fn from(err: fsremote_api::Error) -> Self {
        match err {
            fsremote_api::Error::Transport {
                status: 404,
                status_text: _,
            } => CoreError::NotFound {
                what: "node or endpoint".into(),
            },
            fsremote_api::Error::Transport {
                status,
                status_text,
            } => CoreError::Http {
                status,
                status_text,
            },
            fsremote_api::Error::Network(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            fsremote_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid device URL: {e}"),
            },
            fsremote_api::Error::Client(message) => CoreError::Config { message },
            fsremote_api::Error::Application { status } => CoreError::Rejected {
                status: match status {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                },
            },
            fsremote_api::Error::Decode { message, body: _ } => CoreError::Decode { message },
            fsremote_api::Error::InvalidRequest(reason) => CoreError::ValidationFailed {
                message: reason.into(),
            },
        }
    }
}
