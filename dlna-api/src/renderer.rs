use serde::{Deserialize, Serialize};

/// A media renderer's AVTransport control endpoint
///
/// Supplied by discovery or a device registry. Controllers only borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RendererEndpoint {
    control_url: String,
    #[serde(default)]
    include_metadata: bool,
}

impl RendererEndpoint {
    /// Create an endpoint for the absolute AVTransport `control_url`
    pub fn new(control_url: impl Into<String>, include_metadata: bool) -> Self {
        Self {
            control_url: control_url.into(),
            include_metadata,
        }
    }

    pub fn control_url(&self) -> &str {
        &self.control_url
    }

    /// Whether DIDL-Lite metadata should accompany URIs sent to this renderer
    pub fn include_metadata(&self) -> bool {
        self.include_metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_accessors() {
        let endpoint = RendererEndpoint::new("http://192.168.1.50:49152/AVTransport/ctrl", true);
        assert_eq!(endpoint.control_url(), "http://192.168.1.50:49152/AVTransport/ctrl");
        assert!(endpoint.include_metadata());
    }

    #[test]
    fn test_endpoint_deserializes_with_default_policy() {
        let endpoint: RendererEndpoint =
            serde_json::from_str(r#"{"control_url": "http://tv.local/upnp/control/AVTransport1"}"#)
                .unwrap();
        assert_eq!(endpoint.control_url(), "http://tv.local/upnp/control/AVTransport1");
        assert!(!endpoint.include_metadata());
    }
}
