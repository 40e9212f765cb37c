//! Stop action

use crate::envelope::AvTransportOperation;
use crate::service::INSTANCE_ID;
use crate::Result;

/// Stop playback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stop;

impl AvTransportOperation for Stop {
    type Response = ();

    const ACTION: &'static str = "Stop";

    fn build_payload(&self) -> String {
        format!("<InstanceID>{}</InstanceID>", INSTANCE_ID)
    }

    fn parse_response(_body: &[u8]) -> Result<Self::Response> {
        // Stop operation has no meaningful response data
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_payload_construction() {
        assert_eq!(Stop.build_payload(), "<InstanceID>0</InstanceID>");
    }

    #[test]
    fn test_stop_ignores_response_body() {
        assert!(Stop::parse_response(b"not even xml").is_ok());
    }
}
