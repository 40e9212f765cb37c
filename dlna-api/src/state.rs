//! Renderer transport states
//!
//! The renderer is the only source of truth for its state; this enum just
//! gives callers a closed set to match on after a `GetTransportInfo` query.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Transport state reported in `CurrentTransportState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportState {
    Stopped,
    Playing,
    PausedPlayback,
    Transitioning,
    NoMediaPresent,
    Recording,
    PausedRecording,
}

impl TransportState {
    /// All states, in the order the AVTransport service lists them
    pub const ALL: [TransportState; 7] = [
        TransportState::Stopped,
        TransportState::Playing,
        TransportState::PausedPlayback,
        TransportState::Transitioning,
        TransportState::NoMediaPresent,
        TransportState::Recording,
        TransportState::PausedRecording,
    ];

    /// The wire representation of this state
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportState::Stopped => "STOPPED",
            TransportState::Playing => "PLAYING",
            TransportState::PausedPlayback => "PAUSED_PLAYBACK",
            TransportState::Transitioning => "TRANSITIONING",
            TransportState::NoMediaPresent => "NO_MEDIA_PRESENT",
            TransportState::Recording => "RECORDING",
            TransportState::PausedRecording => "PAUSED_RECORDING",
        }
    }

    /// Whether media is currently moving (playing or recording)
    pub fn is_active(&self) -> bool {
        matches!(self, TransportState::Playing | TransportState::Recording)
    }
}

impl fmt::Display for TransportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportState {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TransportState::ALL
            .into_iter()
            .find(|state| state.as_str() == trimmed)
            .ok_or_else(|| ApiError::MalformedResponse(format!("Unknown transport state: {}", trimmed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("STOPPED", TransportState::Stopped)]
    #[case("PLAYING", TransportState::Playing)]
    #[case("PAUSED_PLAYBACK", TransportState::PausedPlayback)]
    #[case("TRANSITIONING", TransportState::Transitioning)]
    #[case("NO_MEDIA_PRESENT", TransportState::NoMediaPresent)]
    #[case("RECORDING", TransportState::Recording)]
    #[case("PAUSED_RECORDING", TransportState::PausedRecording)]
    fn test_parse_known_states(#[case] raw: &str, #[case] expected: TransportState) {
        assert_eq!(raw.parse::<TransportState>().unwrap(), expected);
        assert_eq!(expected.to_string(), raw);
    }

    #[test]
    fn test_parse_unknown_state() {
        let result = "BUFFERING".parse::<TransportState>();
        match result {
            Err(ApiError::MalformedResponse(msg)) => {
                assert!(msg.contains("Unknown transport state: BUFFERING"))
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_matches_wire_names() {
        for state in TransportState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
        }
    }

    #[test]
    fn test_is_active() {
        assert!(TransportState::Playing.is_active());
        assert!(!TransportState::PausedPlayback.is_active());
        assert!(!TransportState::NoMediaPresent.is_active());
    }
}
