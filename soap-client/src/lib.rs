//! Private SOAP transport for UPnP control points
//!
//! This crate delivers pre-built SOAP envelopes to a device's control URL
//! and hands back the raw response body. Envelope construction and response
//! decoding live in `dlna-api`; this layer only knows about HTTP, the
//! `SOAPACTION` header, and UPnP fault bodies on error responses.

mod error;

pub use error::SoapError;

use std::io::Read;
use std::time::Duration;
use xmltree::{Element, XMLNode};

/// Upper bound on the size of a response body read from a device
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// `Accept` header sent with every action
pub const ACCEPT: &str = "text/xml, application/xml, */*; q=.2";

/// Something that can deliver a SOAP envelope to a control URL
///
/// `SoapClient` is the network implementation. Tests and alternative
/// transports implement this trait to stand in for a real device.
pub trait SoapTransport {
    /// POST `envelope` to `control_url` as the `action` of `service_uri`
    /// and return the raw response body.
    fn send(
        &self,
        control_url: &str,
        service_uri: &str,
        action: &str,
        envelope: &str,
    ) -> Result<Vec<u8>, SoapError>;
}

impl<T: SoapTransport + ?Sized> SoapTransport for &T {
    fn send(
        &self,
        control_url: &str,
        service_uri: &str,
        action: &str,
        envelope: &str,
    ) -> Result<Vec<u8>, SoapError> {
        (**self).send(control_url, service_uri, action, envelope)
    }
}

/// Timeouts and identification used by [`SoapClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapClientConfig {
    /// Time allowed to establish the TCP connection
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Time allowed for the device to answer once connected
    /// Default: 10 seconds
    pub read_timeout: Duration,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for SoapClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
            user_agent: format!(
                "{}/1.0 UPnP/1.0 dlna-avtransport/{}",
                std::env::consts::OS,
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

/// A minimal blocking SOAP client for UPnP device communication
#[derive(Debug, Clone)]
pub struct SoapClient {
    agent: ureq::Agent,
    user_agent: String,
}

impl SoapClient {
    /// Create a new SOAP client with default configuration
    pub fn new() -> Self {
        Self::with_config(&SoapClientConfig::default())
    }

    /// Create a SOAP client with custom timeouts and user agent
    pub fn with_config(config: &SoapClientConfig) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(config.connect_timeout)
                .timeout_read(config.read_timeout)
                .redirects(0)
                .build(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Build the quoted `SOAPACTION` header value for an action
    pub fn soap_action_header(service_uri: &str, action: &str) -> String {
        format!("\"{}#{}\"", service_uri, action)
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SoapTransport for SoapClient {
    fn send(
        &self,
        control_url: &str,
        service_uri: &str,
        action: &str,
        envelope: &str,
    ) -> Result<Vec<u8>, SoapError> {
        let soap_action = Self::soap_action_header(service_uri, action);
        tracing::debug!(url = control_url, action, "Sending SOAP action");

        let result = self
            .agent
            .post(control_url)
            .set("Content-Type", "text/xml; charset=\"utf-8\"")
            .set("SOAPACTION", &soap_action)
            .set("Connection", "close")
            .set("Accept", ACCEPT)
            .set("User-Agent", &self.user_agent)
            .send_bytes(envelope.as_bytes());

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                return Err(rejected(control_url, action, code, response));
            }
            Err(ureq::Error::Transport(transport)) => {
                let err = if is_timeout(&transport) {
                    SoapError::Timeout(transport.to_string())
                } else {
                    SoapError::Network(transport.to_string())
                };
                tracing::warn!(url = control_url, action, "SOAP action failed: {}", err);
                return Err(err);
            }
        };

        // ureq only turns 4xx/5xx into errors
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(rejected(control_url, action, status, response));
        }

        let mut body = Vec::new();
        response
            .into_reader()
            .take(MAX_BODY_BYTES + 1)
            .read_to_end(&mut body)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::TimedOut || e.kind() == std::io::ErrorKind::WouldBlock {
                    SoapError::Timeout(e.to_string())
                } else {
                    SoapError::Network(e.to_string())
                }
            })?;

        if body.len() as u64 > MAX_BODY_BYTES {
            tracing::warn!(url = control_url, action, "Response body over {} bytes", MAX_BODY_BYTES);
            return Err(SoapError::BodyTooLarge {
                limit: MAX_BODY_BYTES,
            });
        }

        tracing::debug!(action, status, bytes = body.len(), "SOAP action accepted");
        Ok(body)
    }
}

/// Map a non-2xx reply to a fault when the body carries one
fn rejected(control_url: &str, action: &str, status: u16, response: ureq::Response) -> SoapError {
    let body = response.into_string().unwrap_or_default();
    let err = fault_from_body(&body).unwrap_or(SoapError::Status(status));
    tracing::warn!(url = control_url, action, status, "SOAP action rejected: {}", err);
    err
}

/// Walk the error chain looking for an I/O timeout
fn is_timeout(transport: &ureq::Transport) -> bool {
    let mut source = std::error::Error::source(transport);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            return matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            );
        }
        source = err.source();
    }
    false
}

/// Extract a UPnP fault from an error response body, if it carries one
fn fault_from_body(body: &str) -> Option<SoapError> {
    let xml = Element::parse(body.as_bytes()).ok()?;
    let fault = xml.get_child("Body")?.get_child("Fault")?;

    let code = find_descendant(fault, "errorCode")
        .and_then(|e| e.get_text())
        .and_then(|t| t.trim().parse::<u16>().ok())
        .unwrap_or(500);
    let description = find_descendant(fault, "errorDescription")
        .and_then(|e| e.get_text())
        .map(|t| t.trim().to_string());

    Some(SoapError::Fault { code, description })
}

fn find_descendant<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    element.children.iter().find_map(|node| match node {
        XMLNode::Element(child) if child.name == name => Some(child),
        XMLNode::Element(child) => find_descendant(child, name),
        _ => None,
    })
}
