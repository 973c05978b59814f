// FSAPI gateway HTTP client
//
// Wraps `reqwest::Client` with REST-facade URL construction and the staged
// validation every call goes through: transport (status code), decode
// (JSON shape), and, for enveloped endpoints, application (`success`).

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::models::{Discovery, Envelope, ListResponse, NodeId, NodeValue, Parameters, SetResponse};
use crate::transport::TransportConfig;

/// Async client for a device's FSAPI REST facade.
///
/// Stateless between calls and cheap to clone; every method is a single
/// HTTP exchange with no retry.
#[derive(Debug, Clone)]
pub struct FsapiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FsapiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a device base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and make sure its path ends with `/`, so that
    /// relative joins append instead of replacing the last segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The device base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    fn node_url(&self, node: &NodeId, action: &str) -> Result<Url, Error> {
        self.url(&format!("rest/fsapi/{node}/{action}"))
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Read several nodes in one exchange.
    ///
    /// `POST rest/fsapi/get-multiple` with a JSON array of node identifiers.
    /// The response is a bare array with no success envelope, so only the
    /// transport and decode stages apply.
    pub async fn get_multiple(&self, nodes: &[NodeId]) -> Result<Parameters, Error> {
        if nodes.is_empty() {
            return Err(Error::InvalidRequest("get-multiple needs at least one node"));
        }

        let url = self.url("rest/fsapi/get-multiple")?;
        debug!(count = nodes.len(), "POST {url}");

        let resp = self.http.post(url).json(nodes).send().await?;
        let resp = Self::check_status(resp)?;
        let params: Parameters = Self::decode(resp).await?;

        debug!(records = params.len(), "get-multiple decoded");
        Ok(params)
    }

    /// Set one node.
    ///
    /// `POST rest/fsapi/{node}/set` with the value's raw text as the body
    /// (`37`, not `"37"`). Fails with [`Error::Application`] when the
    /// envelope's `success` flag is not set.
    pub async fn set(&self, node: &NodeId, value: &NodeValue) -> Result<SetResponse, Error> {
        let url = self.node_url(node, "set")?;
        debug!(%value, "POST {url}");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(value.to_string())
            .send()
            .await?;
        let resp = Self::check_status(resp)?;
        let envelope: SetResponse = Self::decode(resp).await?;
        Self::check_envelope(envelope)
    }

    /// List the entries of a list node (e.g. presets).
    ///
    /// `GET rest/fsapi/{node}/list`, validated like [`set`](Self::set).
    pub async fn list(&self, node: &NodeId) -> Result<ListResponse, Error> {
        let url = self.node_url(node, "list")?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let resp = Self::check_status(resp)?;
        let envelope: ListResponse = Self::decode(resp).await?;
        Self::check_envelope(envelope)
    }

    /// Ask the facade where the device lives on the network.
    ///
    /// `POST rest/discover` with no body.
    pub async fn discover(&self) -> Result<Discovery, Error> {
        let url = self.url("rest/discover")?;
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        let resp = Self::check_status(resp)?;
        Self::decode(resp).await
    }

    // ── Validation stages ────────────────────────────────────────────

    /// Transport stage: anything outside 2xx is a failure, and the body is
    /// left unread.
    fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        // hyper only records the phrase when it differs from the canonical one.
        let status_text = resp
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_owned());
        Err(Error::Transport {
            status: status.as_u16(),
            status_text,
        })
    }

    /// Decode stage: the body must parse into `T`.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::Decode {
            message: e.to_string(),
            body,
        })
    }

    /// Application stage: the envelope's `success` must be set.
    fn check_envelope<E: Envelope>(envelope: E) -> Result<E, Error> {
        if envelope.success() {
            return Ok(envelope);
        }
        warn!(status = %envelope.status(), "device rejected request");
        Err(Error::Application {
            status: envelope.status().clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let c = FsapiClient::from_reqwest("http://radio.local:8080/app", reqwest::Client::new())
            .unwrap();
        assert_eq!(c.base_url().as_str(), "http://radio.local:8080/app/");
    }

    #[test]
    fn node_urls_keep_dots() {
        let c = FsapiClient::from_reqwest("http://radio.local/", reqwest::Client::new()).unwrap();
        let url = c
            .node_url(&NodeId::from_static("netRemote.sys.audio.volume"), "set")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://radio.local/rest/fsapi/netRemote.sys.audio.volume/set"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = FsapiClient::from_reqwest("not a url", reqwest::Client::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
