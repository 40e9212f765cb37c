//! Decoding of AVTransport action responses
//!
//! A response is located by namespace-qualified name anywhere in the
//! document, so renderers that wrap the body oddly still decode. The result
//! is a flat, ordered list of the response element's direct children.

use std::str::FromStr;

use xmltree::{Element, XMLNode};

use crate::service::AV_TRANSPORT_URN;
use crate::state::TransportState;
use crate::{ApiError, Result};

/// The flat set of values returned by an action, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionResponse {
    fields: Vec<(String, String)>,
}

impl ActionResponse {
    /// Value of the child element with local name `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`get`](Self::get) but a missing field is a protocol violation
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| ApiError::MalformedResponse(format!("Missing {} element", name)))
    }

    /// Iterate over `(name, value)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Interpret `CurrentTransportState` against the closed state set
    pub fn transport_state(&self) -> Result<TransportState> {
        TransportState::from_str(self.require("CurrentTransportState")?)
    }
}

impl FromIterator<(String, String)> for ActionResponse {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ActionResponse {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Decode `body` and extract the children of `{AVTransport}response_element`.
///
/// `response_element` is the full local name, e.g. `GetPositionInfoResponse`.
pub fn decode(body: &[u8], response_element: &str) -> Result<ActionResponse> {
    let root = Element::parse(body)
        .map_err(|e| ApiError::MalformedResponse(format!("XML parsing error: {}", e)))?;

    let response = find_response(&root, response_element).ok_or_else(|| {
        ApiError::MalformedResponse(format!("Missing {} element", response_element))
    })?;

    Ok(response
        .children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Element(child) => Some((
                child.name.clone(),
                child.get_text().map(|t| t.into_owned()).unwrap_or_default(),
            )),
            _ => None,
        })
        .collect())
}

fn find_response<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    if element.name == name && element.namespace.as_deref() == Some(AV_TRANSPORT_URN) {
        return Some(element);
    }
    element.children.iter().find_map(|node| match node {
        XMLNode::Element(child) => find_response(child, name),
        _ => None,
    })
}
