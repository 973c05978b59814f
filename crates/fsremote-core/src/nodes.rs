//! Device parameters the remote reads and writes.

use fsremote_api::NodeId;

pub const POWER: NodeId = NodeId::from_static("netRemote.sys.power");
pub const VOLUME: NodeId = NodeId::from_static("netRemote.sys.audio.volume");
pub const MUTE: NodeId = NodeId::from_static("netRemote.sys.audio.mute");
pub const PLAY_NAME: NodeId = NodeId::from_static("netRemote.play.info.name");
pub const PLAY_TEXT: NodeId = NodeId::from_static("netRemote.play.info.text");
pub const FRIENDLY_NAME: NodeId = NodeId::from_static("netRemote.sys.info.friendlyName");
pub const NAV_STATE: NodeId = NodeId::from_static("netRemote.nav.state");
pub const NAV_PRESETS: NodeId = NodeId::from_static("netRemote.nav.presets");
pub const SELECT_PRESET: NodeId = NodeId::from_static("netRemote.nav.action.selectPreset");

/// Everything the home view shows, in request order.
pub const HOME: [NodeId; 6] = [POWER, VOLUME, MUTE, PLAY_NAME, PLAY_TEXT, FRIENDLY_NAME];
