// ── Runtime connection configuration ──
//
// Describes *where* the device is and how to reach it. Never touches disk;
// the CLI builds a `RemoteConfig` from its profile and flags and hands it in.

use std::time::Duration;

use fsremote_api::TransportConfig;
use url::Url;

/// Default volume step for `volume up` / `volume down`.
pub const DEFAULT_VOLUME_STEP: i64 = 1;

/// Configuration for talking to a single device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Device base URL (e.g. `http://192.168.1.40/`).
    pub url: Url,
    /// Request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Step applied by relative volume changes.
    pub volume_step: i64,
}

impl RemoteConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: Some(Duration::from_secs(30)),
            volume_step: DEFAULT_VOLUME_STEP,
        }
    }

    /// Transport settings derived from this config.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig::default().with_timeout(self.timeout)
    }
}
