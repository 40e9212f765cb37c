//! GetPositionInfo action

use crate::decoder::{decode, ActionResponse};
use crate::envelope::AvTransportOperation;
use crate::service::INSTANCE_ID;
use crate::Result;

/// Query track, duration and elapsed time
///
/// The response carries at least `Track`, `TrackDuration`, `TrackMetaData`,
/// `TrackURI`, `RelTime`, `AbsTime`, `RelCount` and `AbsCount`, all as the
/// renderer's own strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetPositionInfo;

impl AvTransportOperation for GetPositionInfo {
    type Response = ActionResponse;

    const ACTION: &'static str = "GetPositionInfo";

    fn build_payload(&self) -> String {
        format!("<InstanceID>{}</InstanceID>", INSTANCE_ID)
    }

    fn parse_response(body: &[u8]) -> Result<Self::Response> {
        decode(body, "GetPositionInfoResponse")
    }
}
