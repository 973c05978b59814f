// FSAPI wire types
//
// Node identifiers are opaque dotted paths. Values are JSON scalars whose
// meaning belongs to the caller. Envelopes use `#[serde(default)]` for the
// success/status pair because devices omit `status` on success.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

// ── NodeId ───────────────────────────────────────────────────────────

/// Opaque identifier of one device parameter, e.g. `netRemote.sys.power`.
///
/// No structure is parsed out of it. Known identifiers can be declared as
/// constants through [`NodeId::from_static`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Cow<'static, str>);

impl NodeId {
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl FromStr for NodeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// ── NodeValue ────────────────────────────────────────────────────────

/// A node's value as it travels on the wire.
///
/// Flags are integers `0`/`1`; levels are integers; everything else is text.
/// Values of any other JSON shape are kept as-is so one odd node never
/// fails a whole batch; they read as neither a number, text, nor "on".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeValue {
    Int(i64),
    Text(String),
    Other(serde_json::Value),
}

impl NodeValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) | Self::Other(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) | Self::Other(_) => None,
        }
    }

    /// `true` only for the integer `1`.
    pub fn is_on(&self) -> bool {
        matches!(self, Self::Int(1))
    }
}

/// The raw text form sent as a `set` body: digits for integers, the string
/// itself for text.
impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Parses integers as [`NodeValue::Int`] and anything else as text.
impl FromStr for NodeValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map_or_else(|_| Self::Text(s.to_owned()), Self::Int))
    }
}

impl From<i64> for NodeValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for NodeValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<bool> for NodeValue {
    fn from(on: bool) -> Self {
        Self::Int(i64::from(on))
    }
}

impl From<&str> for NodeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for NodeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// ── Batch read ───────────────────────────────────────────────────────

/// One `{node, value}` record from `get-multiple`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeResponse {
    pub node: NodeId,
    /// `None` when the device answered `null` or left the value out.
    #[serde(default)]
    pub value: Option<NodeValue>,
}

/// Decoded `get-multiple` result.
///
/// Keeps the records in wire order. Lookups are linear and the first
/// record with a matching node wins; duplicates are not collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Vec<NodeResponse>);

impl Parameters {
    pub fn new(records: Vec<NodeResponse>) -> Self {
        Self(records)
    }

    /// First record for `node`, if any.
    pub fn find(&self, node: &NodeId) -> Option<&NodeResponse> {
        self.0.iter().find(|r| r.node == *node)
    }

    pub fn get(&self, node: &NodeId) -> Option<&NodeValue> {
        self.find(node).and_then(|r| r.value.as_ref())
    }

    /// `true` only when the node is present and equal to `1`.
    pub fn flag(&self, node: &NodeId) -> bool {
        self.get(node).is_some_and(NodeValue::is_on)
    }

    pub fn int(&self, node: &NodeId) -> Option<i64> {
        self.get(node).and_then(NodeValue::as_int)
    }

    pub fn text(&self, node: &NodeId) -> Option<&str> {
        self.get(node).and_then(NodeValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeResponse> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<NodeResponse> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a NodeResponse;
    type IntoIter = std::slice::Iter<'a, NodeResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Envelopes ────────────────────────────────────────────────────────

/// Reads a `success` indicator by truthiness: `true`, a non-zero number, or
/// a non-empty string pass; `false`, zero, `""`, and `null` do not.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}

/// Anything carrying the `{ success, status }` pair checked by the
/// application stage.
pub trait Envelope {
    fn success(&self) -> bool;
    fn status(&self) -> &serde_json::Value;
}

/// Envelope returned by `{node}/set`.
///
/// ```json
/// { "success": false, "status": "FS_NODE_BLOCKED" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub status: serde_json::Value,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Envelope for SetResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn status(&self) -> &serde_json::Value {
        &self.status
    }
}

/// Envelope returned by `{node}/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub status: serde_json::Value,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl Envelope for ListResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn status(&self) -> &serde_json::Value {
        &self.status
    }
}

/// One entry of a node list (a preset slot, a menu item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub key: NodeValue,
    #[serde(default)]
    pub name: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ListItem {
    /// Human-readable label: `name` if present, else the key.
    pub fn label(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .map_or_else(|| self.key.to_string(), str::to_owned)
    }
}

// ── Discovery ────────────────────────────────────────────────────────

/// Result of `rest/discover`: where the device answered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    pub ip: String,
    pub value: DiscoveryValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryValue {
    pub port: u16,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Discovery {
    /// Base URL of the discovered device: `http://{ip}:{port}/`.
    pub fn device_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("http://{}:{}/", self.ip, self.value.port))
    }
}
