// fsremote-api: Async Rust client for the FSAPI REST facade of network audio devices

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::FsapiClient;
pub use error::Error;
pub use models::{
    Discovery, DiscoveryValue, Envelope, ListItem, ListResponse, NodeId, NodeResponse, NodeValue,
    Parameters, SetResponse,
};
pub use transport::TransportConfig;
