// ── Shared application context ──
//
// One `AppContext` is created at startup and handed to every view. It owns
// the current `RemoteConfig` and the gateway built from it. Reads are
// lock-free snapshots; writes swap in a whole new session, so a call
// already in flight finishes against the gateway it started with.

use std::sync::Arc;

use arc_swap::ArcSwap;
use fsremote_api::FsapiClient;
use tracing::info;
use url::Url;

use crate::config::RemoteConfig;
use crate::error::CoreError;

/// Settings plus the gateway built from them.
#[derive(Debug)]
pub struct Session {
    pub config: RemoteConfig,
    pub gateway: FsapiClient,
}

impl Session {
    fn open(config: RemoteConfig) -> Result<Self, CoreError> {
        let gateway = FsapiClient::new(config.url.as_str(), &config.transport())?;
        Ok(Self { config, gateway })
    }
}

/// Process-wide state visible to every view.
///
/// Cheaply cloneable; clones share the same session.
#[derive(Debug, Clone)]
pub struct AppContext {
    session: Arc<ArcSwap<Session>>,
}

impl AppContext {
    pub fn new(config: RemoteConfig) -> Result<Self, CoreError> {
        let session = Session::open(config)?;
        Ok(Self {
            session: Arc::new(ArcSwap::from_pointee(session)),
        })
    }

    /// Build a context around an existing gateway (tests, custom transports).
    pub fn with_gateway(config: RemoteConfig, gateway: FsapiClient) -> Self {
        Self {
            session: Arc::new(ArcSwap::from_pointee(Session { config, gateway })),
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Arc<Session> {
        self.session.load_full()
    }

    /// Current settings.
    pub fn config(&self) -> RemoteConfig {
        self.session.load().config.clone()
    }

    /// Gateway for the current device.
    pub fn gateway(&self) -> FsapiClient {
        self.session.load().gateway.clone()
    }

    /// Replace the whole configuration.
    pub fn set_config(&self, config: RemoteConfig) -> Result<(), CoreError> {
        let session = Session::open(config)?;
        info!(url = %session.config.url, "device settings updated");
        self.session.store(Arc::new(session));
        Ok(())
    }

    /// Point every view at a different device.
    pub fn set_device_url(&self, url: Url) -> Result<(), CoreError> {
        let mut config = self.config();
        config.url = url;
        self.set_config(config)
    }
}
