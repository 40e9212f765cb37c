//! AVTransport controller for a single renderer
//!
//! The controller turns high-level playback requests into typed actions,
//! sends them through a [`SoapTransport`] and decodes the replies. It keeps no
//! device state between calls: every query goes to the renderer.
//!
//! One controller should issue one action at a time. Callers sharing a
//! renderer across threads must serialize access themselves.

use soap_client::{SoapClient, SoapTransport};

use crate::config::ControllerConfig;
use crate::decoder::ActionResponse;
use crate::didl::{MetadataComposer, PlayableResource};
use crate::envelope::{build_envelope, AvTransportOperation, UriMetadata};
use crate::escape::{check_xml_chars, escape_cow, EscapePolicy};
use crate::operations::{
    GetPositionInfo, GetTransportInfo, Pause, Play, SetAvTransportUri, SetNextAvTransportUri, Stop,
};
use crate::renderer::RendererEndpoint;
use crate::service::AV_TRANSPORT_URN;
use crate::Result;

/// Controls playback on one renderer through its AVTransport service
///
/// # Example
/// ```rust,ignore
/// use dlna_api::{AvTransportController, RendererEndpoint};
///
/// let renderer = RendererEndpoint::new("http://192.168.1.50:49152/upnp/control/AVTransport1", true);
/// let controller = AvTransportController::new(&renderer);
///
/// controller.play("http://192.168.1.20:8200/MediaItems/22.mp3", None)?;
/// let info = controller.transport_info()?;
/// println!("{}", info.transport_state()?);
/// ```
#[derive(Debug, Clone)]
pub struct AvTransportController<'a, T = SoapClient> {
    endpoint: &'a RendererEndpoint,
    transport: T,
    escape_policy: EscapePolicy,
}

impl<'a> AvTransportController<'a, SoapClient> {
    /// Create a controller with the default network transport
    pub fn new(endpoint: &'a RendererEndpoint) -> Self {
        Self::with_config(endpoint, &ControllerConfig::default())
    }

    /// Create a controller whose transport and escaping follow `config`
    pub fn with_config(endpoint: &'a RendererEndpoint, config: &ControllerConfig) -> Self {
        Self {
            endpoint,
            transport: SoapClient::with_config(&config.transport),
            escape_policy: config.escape_policy,
        }
    }
}

impl<'a, T: SoapTransport> AvTransportController<'a, T> {
    /// Create a controller over a custom transport
    pub fn with_transport(endpoint: &'a RendererEndpoint, transport: T) -> Self {
        Self {
            endpoint,
            transport,
            escape_policy: EscapePolicy::default(),
        }
    }

    /// Replace the escaping policy used for URLs and composed metadata
    pub fn with_escape_policy(mut self, policy: EscapePolicy) -> Self {
        self.escape_policy = policy;
        self
    }

    pub fn endpoint(&self) -> &RendererEndpoint {
        self.endpoint
    }

    pub fn escape_policy(&self) -> EscapePolicy {
        self.escape_policy
    }

    /// Execute any AVTransport action against the renderer
    pub fn execute<Op: AvTransportOperation>(&self, operation: &Op) -> Result<Op::Response> {
        let envelope = build_envelope(operation);
        let body = self.transport.send(
            self.endpoint.control_url(),
            AV_TRANSPORT_URN,
            Op::ACTION,
            &envelope,
        )?;
        Op::parse_response(&body)
    }

    /// Stop playback
    pub fn stop(&self) -> Result<()> {
        self.execute(&Stop)
    }

    /// Pause playback
    pub fn pause(&self) -> Result<()> {
        self.execute(&Pause)
    }

    /// Load `url` and start playing it.
    ///
    /// Sends `SetAVTransportURI` then `Play`. If the first action fails the
    /// second is never sent. A URL or metadata that XML cannot carry fails
    /// with `InvalidInput` before anything is sent. If `Play` fails the
    /// renderer already holds the new URI, so retrying
    /// [`resume`](Self::resume) is enough.
    ///
    /// Returns once the renderer accepted both actions; it does not wait
    /// for the transport state to reach `PLAYING`.
    pub fn play(&self, url: &str, resource: Option<PlayableResource<'_>>) -> Result<()> {
        let set_uri = SetAvTransportUri::new(self.escape_url(url)?, self.compose_metadata(resource)?);

        tracing::debug!(
            url,
            with_metadata = set_uri.metadata.is_present(),
            "Setting AVTransport URI"
        );
        self.execute(&set_uri).map_err(|e| {
            tracing::warn!(url, "SetAVTransportURI failed, not sending Play: {}", e);
            e
        })?;

        self.resume()
    }

    /// Send a bare `Play` for the URI the renderer already holds
    pub fn resume(&self) -> Result<()> {
        self.execute(&Play)
    }

    /// Cue `url` to play after the current track
    pub fn queue_next(&self, url: &str, resource: Option<PlayableResource<'_>>) -> Result<()> {
        let set_next =
            SetNextAvTransportUri::new(self.escape_url(url)?, self.compose_metadata(resource)?);
        self.execute(&set_next)
    }

    /// Query the current track position, returning every field the renderer sent
    pub fn position_info(&self) -> Result<ActionResponse> {
        self.execute(&GetPositionInfo)
    }

    /// Query the current transport state, returning every field the renderer sent
    pub fn transport_info(&self) -> Result<ActionResponse> {
        self.execute(&GetTransportInfo)
    }

    fn compose_metadata(&self, resource: Option<PlayableResource<'_>>) -> Result<UriMetadata> {
        MetadataComposer::new(self.endpoint.include_metadata(), self.escape_policy).compose(resource)
    }

    fn escape_url(&self, url: &str) -> Result<String> {
        check_xml_chars("URL", url)?;
        Ok(escape_cow(url, self.escape_policy).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soap_client::SoapError;
    use std::sync::Mutex;

    struct FailingTransport {
        calls: Mutex<u32>,
    }

    impl SoapTransport for FailingTransport {
        fn send(&self, _: &str, _: &str, _: &str, _: &str) -> std::result::Result<Vec<u8>, SoapError> {
            *self.calls.lock().unwrap() += 1;
            Err(SoapError::Network("connection refused".to_string()))
        }
    }

    #[test]
    fn test_controller_creation() {
        let endpoint = RendererEndpoint::new("http://127.0.0.1:1/ctrl", false);
        let controller = AvTransportController::new(&endpoint);
        assert_eq!(controller.endpoint().control_url(), "http://127.0.0.1:1/ctrl");
        assert_eq!(controller.escape_policy(), EscapePolicy::ElementText);
    }

    #[test]
    fn test_with_config_applies_escape_policy() {
        let endpoint = RendererEndpoint::new("http://127.0.0.1:1/ctrl", false);
        let config = ControllerConfig::default().with_escape_policy(EscapePolicy::ElementTextAndQuotes);
        let controller = AvTransportController::with_config(&endpoint, &config);
        assert_eq!(controller.escape_policy(), EscapePolicy::ElementTextAndQuotes);
    }

    #[test]
    fn test_escape_url() {
        let endpoint = RendererEndpoint::new("http://127.0.0.1:1/ctrl", false);
        let transport = FailingTransport { calls: Mutex::new(0) };
        let controller = AvTransportController::with_transport(&endpoint, &transport);
        assert_eq!(
            controller.escape_url("http://host/a?x=1&y=2").unwrap(),
            "http://host/a?x=1&amp;y=2"
        );
        assert!(controller.escape_url("http://host/a\u{7}.mp3").is_err());
    }

    #[test]
    fn test_play_stops_after_failed_set_uri() {
        let endpoint = RendererEndpoint::new("http://127.0.0.1:1/ctrl", false);
        let transport = FailingTransport { calls: Mutex::new(0) };
        let controller = AvTransportController::with_transport(&endpoint, &transport);

        let result = controller.play("http://host/a.mp3", None);
        assert!(result.unwrap_err().is_transport());
        assert_eq!(*transport.calls.lock().unwrap(), 1);
    }
}
