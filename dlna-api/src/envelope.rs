//! SOAP envelope construction for AVTransport actions
//!
//! Each action is a typed value implementing [`AvTransportOperation`]; it only
//! carries the arguments its action needs. [`build_envelope`] wraps the
//! action's arguments in the fixed SOAP 1.1 envelope.
//!
//! Argument values are substituted verbatim. Anything that came from a
//! caller must already be escaped (see [`crate::escape`]).

use crate::service::{AV_TRANSPORT_URN, SOAP_ENCODING_STYLE, SOAP_ENVELOPE_NS};
use crate::Result;

/// XML declaration that starts every envelope
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#;

/// Escaped DIDL-Lite metadata for a URI argument, or its absence
///
/// The two variants select different envelope shapes, so the choice is made
/// when the value is built and not by inspecting a string afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriMetadata {
    /// Metadata already normalized and escaped for element content
    WithMetadata(String),
    /// No metadata: either the renderer policy disables it or none was supplied
    WithoutMetadata,
}

impl UriMetadata {
    /// Wrap escaped metadata, treating an empty string as absent
    pub fn from_escaped(escaped: impl Into<String>) -> Self {
        let escaped = escaped.into();
        if escaped.is_empty() {
            UriMetadata::WithoutMetadata
        } else {
            UriMetadata::WithMetadata(escaped)
        }
    }

    /// The escaped metadata text, or `""` when absent
    pub fn as_str(&self) -> &str {
        match self {
            UriMetadata::WithMetadata(escaped) => escaped,
            UriMetadata::WithoutMetadata => "",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, UriMetadata::WithMetadata(_))
    }
}

/// A typed AVTransport action
///
/// This trait defines the common interface for all AVTransport actions: the
/// action name, the arguments placed inside the action element, and how the
/// renderer's reply is turned into the typed response.
pub trait AvTransportOperation {
    /// The typed result of a successful action
    type Response;

    /// The SOAP action name, e.g. `SetAVTransportURI`
    const ACTION: &'static str;

    /// Build the argument elements that go inside `<u:ACTION>`
    ///
    /// Always starts with `<InstanceID>0</InstanceID>`.
    fn build_payload(&self) -> String;

    /// Turn the raw response body into the typed response
    fn parse_response(body: &[u8]) -> Result<Self::Response>;
}

/// Build the complete SOAP envelope for `operation`
pub fn build_envelope<Op: AvTransportOperation>(operation: &Op) -> String {
    wrap_envelope(Op::ACTION, &operation.build_payload())
}

fn wrap_envelope(action: &str, payload: &str) -> String {
    format!(
        concat!(
            "{declaration}\n",
            r#"<s:Envelope s:encodingStyle="{encoding}" xmlns:s="{envelope_ns}">"#,
            "<s:Body>",
            r#"<u:{action} xmlns:u="{service}">{payload}</u:{action}>"#,
            "</s:Body>",
            "</s:Envelope>"
        ),
        declaration = XML_DECLARATION,
        encoding = SOAP_ENCODING_STYLE,
        envelope_ns = SOAP_ENVELOPE_NS,
        action = action,
        service = AV_TRANSPORT_URN,
        payload = payload,
    )
}
