//! UPnP/DLNA AVTransport control point
//!
//! This crate drives a remote media renderer through its AVTransport
//! service: loading URIs with optional DIDL-Lite metadata, play/pause/stop,
//! and position and transport state queries. It uses the private
//! `soap-client` crate for the HTTP leg.
//!
//! ```rust,ignore
//! use dlna_api::{AvTransportController, PlayableResource, RendererEndpoint};
//!
//! let renderer = RendererEndpoint::new("http://192.168.1.50:49152/upnp/control/AVTransport1", true);
//! let controller = AvTransportController::new(&renderer);
//!
//! controller.play("http://192.168.1.20:8200/MediaItems/22.mp3", Some(PlayableResource::Item(&track)))?;
//! let position = controller.position_info()?;
//! println!("{:?}", position.get("RelTime"));
//! ```
//!
//! Discovery, eventing (GENA) and multi-instance transports are out of
//! scope; every action addresses `InstanceID` 0.

pub mod config;
pub mod controller;
pub mod decoder;
pub mod didl;
pub mod envelope;
pub mod error;
pub mod escape;
pub mod logging;
pub mod operations;
pub mod renderer;
pub mod service;
pub mod state;

pub use config::{ConfigError, ControllerConfig};
pub use controller::AvTransportController;
pub use decoder::{decode, ActionResponse};
pub use didl::{compose_didl, MediaItem, MetadataComposer, PlayableResource};
pub use envelope::{build_envelope, AvTransportOperation, UriMetadata};
pub use error::{ApiError, Result};
pub use escape::{check_xml_chars, escape, escape_xml, normalize, EscapePolicy};
pub use renderer::RendererEndpoint;
pub use state::TransportState;

pub use soap_client::{SoapClient, SoapClientConfig, SoapError, SoapTransport};
