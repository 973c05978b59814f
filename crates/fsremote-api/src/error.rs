use thiserror::Error;

/// Top-level error type for the `fsremote-api` crate.
///
/// Every gateway call fails in exactly one of these ways. The HTTP
/// exchange is validated in stages, and each stage has its own variant:
/// a non-2xx status is [`Error::Transport`], a body that does not match
/// the expected shape is [`Error::Decode`], and an envelope whose
/// `success` flag is falsy is [`Error::Application`].
/// `fsremote-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// The device answered with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Transport { status: u16, status_text: String },

    /// No response at all (connection refused, DNS failure, client timeout).
    #[error("HTTP transport error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    // ── Application ─────────────────────────────────────────────────
    /// The exchange succeeded but the envelope reported failure.
    ///
    /// `status` is the envelope's status field, passed through verbatim
    /// (`Null` when the device omitted it).
    #[error("Device rejected the request (status {status})")]
    Application { status: serde_json::Value },

    // ── Data ────────────────────────────────────────────────────────
    /// The body did not decode into the expected shape, with the raw body
    /// for debugging.
    #[error("Unexpected response body: {message}")]
    Decode { message: String, body: String },

    /// The request was rejected locally before anything was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(&'static str),
}

impl Error {
    /// Returns `true` if the HTTP exchange itself failed, with or without
    /// a status code.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Network(_))
    }

    /// Returns `true` if the device answered but refused the operation.
    pub fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport { status, .. } => *status == 404,
            Self::Network(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// The HTTP status code, when the device answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
