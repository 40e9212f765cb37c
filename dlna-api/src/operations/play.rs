//! Play action

use crate::envelope::AvTransportOperation;
use crate::service::INSTANCE_ID;
use crate::Result;

/// Start playback of the current URI at normal speed
///
/// Speed is always `1`; variable playback speed is not supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Play;

impl AvTransportOperation for Play {
    type Response = ();

    const ACTION: &'static str = "Play";

    fn build_payload(&self) -> String {
        format!("<InstanceID>{}</InstanceID><Speed>1</Speed>", INSTANCE_ID)
    }

    fn parse_response(_body: &[u8]) -> Result<Self::Response> {
        // Play operation has no meaningful response data
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::build_envelope;

    #[test]
    fn test_play_payload_construction() {
        assert_eq!(Play.build_payload(), "<InstanceID>0</InstanceID><Speed>1</Speed>");
    }

    #[test]
    fn test_play_envelope() {
        let envelope = build_envelope(&Play);
        assert!(envelope.contains(
            r#"<u:Play xmlns:u="urn:schemas-upnp-org:service:AVTransport:1"><InstanceID>0</InstanceID><Speed>1</Speed></u:Play>"#
        ));
    }

    #[test]
    fn test_play_response_is_not_parsed() {
        assert!(Play::parse_response(b"").is_ok());
    }
}
