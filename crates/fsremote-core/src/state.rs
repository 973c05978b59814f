// ── Player state ──
//
// What the home view shows, derived from one batch read. Absent nodes fall
// back to "off", `0`, or empty text rather than failing the refresh.

use fsremote_api::{NodeId, Parameters};
use serde::{Deserialize, Serialize};

use crate::nodes;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Device friendly name.
    pub name: String,
    pub on: bool,
    pub muted: bool,
    pub volume: i64,
    /// Now-playing first line (station or track).
    pub first_line: String,
    /// Now-playing second line (free text).
    pub second_line: String,
}

impl PlayerState {
    pub fn from_parameters(params: &Parameters) -> Self {
        let text = |node: &NodeId| params.text(node).unwrap_or_default().to_owned();
        Self {
            name: text(&nodes::FRIENDLY_NAME),
            on: params.flag(&nodes::POWER),
            muted: params.flag(&nodes::MUTE),
            volume: params.int(&nodes::VOLUME).unwrap_or(0),
            first_line: text(&nodes::PLAY_NAME),
            second_line: text(&nodes::PLAY_TEXT),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn full_read_maps_every_field() {
        let params: Parameters = serde_json::from_value(json!([
            { "node": "netRemote.sys.power", "value": 1 },
            { "node": "netRemote.sys.audio.volume", "value": 20 },
            { "node": "netRemote.sys.audio.mute", "value": 0 },
            { "node": "netRemote.play.info.name", "value": "Radio One" },
            { "node": "netRemote.play.info.text", "value": "Morning show" },
            { "node": "netRemote.sys.info.friendlyName", "value": "Kitchen" },
        ]))
        .unwrap();

        assert_eq!(
            PlayerState::from_parameters(&params),
            PlayerState {
                name: "Kitchen".into(),
                on: true,
                muted: false,
                volume: 20,
                first_line: "Radio One".into(),
                second_line: "Morning show".into(),
            }
        );
    }

    #[test]
    fn empty_read_yields_defaults() {
        let state = PlayerState::from_parameters(&Parameters::default());
        assert_eq!(state, PlayerState::default());
    }

    #[test]
    fn wrong_types_fall_back() {
        let params: Parameters = serde_json::from_value(json!([
            { "node": "netRemote.sys.audio.volume", "value": "loud" },
            { "node": "netRemote.sys.info.friendlyName", "value": 7 },
        ]))
        .unwrap();

        let state = PlayerState::from_parameters(&params);
        assert_eq!(state.volume, 0);
        assert_eq!(state.name, "");
    }
}
