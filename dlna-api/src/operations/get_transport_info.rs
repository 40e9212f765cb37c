//! GetTransportInfo action

use crate::decoder::{decode, ActionResponse};
use crate::envelope::AvTransportOperation;
use crate::service::INSTANCE_ID;
use crate::Result;

/// Query the renderer's transport state
///
/// The response carries `CurrentTransportState`, `CurrentTransportStatus`
/// and `CurrentSpeed`. Use [`ActionResponse::transport_state`] to interpret
/// the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetTransportInfo;

impl AvTransportOperation for GetTransportInfo {
    type Response = ActionResponse;

    const ACTION: &'static str = "GetTransportInfo";

    fn build_payload(&self) -> String {
        format!("<InstanceID>{}</InstanceID>", INSTANCE_ID)
    }

    fn parse_response(body: &[u8]) -> Result<Self::Response> {
        decode(body, "GetTransportInfoResponse")
    }
}
