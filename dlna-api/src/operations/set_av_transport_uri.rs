//! SetAVTransportURI and SetNextAVTransportURI actions

use crate::envelope::{AvTransportOperation, UriMetadata};
use crate::service::INSTANCE_ID;
use crate::Result;

/// Point the renderer at a new URI
///
/// `current_uri` and the metadata must already be escaped for element
/// content. When metadata is absent the `CurrentURIMetaData` element is left
/// out altogether; some renderers reject an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetAvTransportUri {
    pub current_uri: String,
    pub metadata: UriMetadata,
}

impl SetAvTransportUri {
    pub fn new(current_uri: impl Into<String>, metadata: UriMetadata) -> Self {
        Self {
            current_uri: current_uri.into(),
            metadata,
        }
    }
}

impl AvTransportOperation for SetAvTransportUri {
    type Response = ();

    const ACTION: &'static str = "SetAVTransportURI";

    fn build_payload(&self) -> String {
        match &self.metadata {
            UriMetadata::WithMetadata(metadata) => format!(
                "<InstanceID>{}</InstanceID><CurrentURI>{}</CurrentURI><CurrentURIMetaData>{}</CurrentURIMetaData>",
                INSTANCE_ID, self.current_uri, metadata
            ),
            UriMetadata::WithoutMetadata => format!(
                "<InstanceID>{}</InstanceID><CurrentURI>{}</CurrentURI>",
                INSTANCE_ID, self.current_uri
            ),
        }
    }

    fn parse_response(_body: &[u8]) -> Result<Self::Response> {
        Ok(())
    }
}

/// Cue the URI the renderer should play after the current one
///
/// Same escaping and metadata rules as [`SetAvTransportUri`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNextAvTransportUri {
    pub next_uri: String,
    pub metadata: UriMetadata,
}

impl SetNextAvTransportUri {
    pub fn new(next_uri: impl Into<String>, metadata: UriMetadata) -> Self {
        Self {
            next_uri: next_uri.into(),
            metadata,
        }
    }
}

impl AvTransportOperation for SetNextAvTransportUri {
    type Response = ();

    const ACTION: &'static str = "SetNextAVTransportURI";

    fn build_payload(&self) -> String {
        match &self.metadata {
            UriMetadata::WithMetadata(metadata) => format!(
                "<InstanceID>{}</InstanceID><NextURI>{}</NextURI><NextURIMetaData>{}</NextURIMetaData>",
                INSTANCE_ID, self.next_uri, metadata
            ),
            UriMetadata::WithoutMetadata => format!(
                "<InstanceID>{}</InstanceID><NextURI>{}</NextURI>",
                INSTANCE_ID, self.next_uri
            ),
        }
    }

    fn parse_response(_body: &[u8]) -> Result<Self::Response> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::build_envelope;

    const URI: &str = "http://192.168.1.20:8200/MediaItems/22.mp3";

    #[test]
    fn test_set_uri_with_metadata() {
        let op = SetAvTransportUri::new(URI, UriMetadata::WithMetadata("&lt;DIDL-Lite/&gt;".to_string()));
        assert_eq!(
            op.build_payload(),
            "<InstanceID>0</InstanceID><CurrentURI>http://192.168.1.20:8200/MediaItems/22.mp3</CurrentURI>\
             <CurrentURIMetaData>&lt;DIDL-Lite/&gt;</CurrentURIMetaData>"
        );
    }

    #[test]
    fn test_set_uri_without_metadata_has_no_metadata_element() {
        let op = SetAvTransportUri::new(URI, UriMetadata::WithoutMetadata);
        let payload = op.build_payload();
        assert_eq!(
            payload,
            "<InstanceID>0</InstanceID><CurrentURI>http://192.168.1.20:8200/MediaItems/22.mp3</CurrentURI>"
        );
        assert!(!build_envelope(&op).contains("MetaData"));
    }

    #[test]
    fn test_set_next_uri_uses_its_own_action() {
        let op = SetNextAvTransportUri::new(URI, UriMetadata::WithMetadata("&lt;x/&gt;".to_string()));
        let envelope = build_envelope(&op);
        assert!(envelope.contains("<u:SetNextAVTransportURI "));
        assert!(envelope.contains("<NextURI>http://192.168.1.20:8200/MediaItems/22.mp3</NextURI>"));
        assert!(envelope.contains("<NextURIMetaData>&lt;x/&gt;</NextURIMetaData>"));
        assert!(!envelope.contains("CurrentURI"));
    }

    #[test]
    fn test_set_next_uri_without_metadata() {
        let op = SetNextAvTransportUri::new(URI, UriMetadata::WithoutMetadata);
        assert!(!op.build_payload().contains("NextURIMetaData"));
    }

    #[test]
    fn test_envelope_is_well_formed() {
        let op = SetAvTransportUri::new(
            "http://host/stream?id=1&amp;fmt=mp3",
            UriMetadata::WithMetadata("&lt;DIDL-Lite&gt;Rock &amp;amp; Roll&lt;/DIDL-Lite&gt;".to_string()),
        );
        let envelope = build_envelope(&op);
        let xml = xmltree::Element::parse(envelope.as_bytes()).unwrap();
        let action = xml
            .get_child("Body")
            .and_then(|body| body.get_child("SetAVTransportURI"))
            .unwrap();
        assert_eq!(
            action.get_child("CurrentURI").unwrap().get_text().unwrap(),
            "http://host/stream?id=1&fmt=mp3"
        );
        assert_eq!(
            action.get_child("CurrentURIMetaData").unwrap().get_text().unwrap(),
            "<DIDL-Lite>Rock &amp; Roll</DIDL-Lite>"
        );
    }
}
