//! Pause action

use crate::envelope::AvTransportOperation;
use crate::service::INSTANCE_ID;
use crate::Result;

/// Pause playback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pause;

impl AvTransportOperation for Pause {
    type Response = ();

    const ACTION: &'static str = "Pause";

    fn build_payload(&self) -> String {
        format!("<InstanceID>{}</InstanceID>", INSTANCE_ID)
    }

    fn parse_response(_body: &[u8]) -> Result<Self::Response> {
        Ok(())
    }
}
