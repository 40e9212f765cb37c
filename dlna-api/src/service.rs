//! Fixed namespace URIs used on the wire
//!
//! Only the AVTransport service is controlled by this crate, always on
//! `InstanceID` 0.

/// The AVTransport service type, used in the envelope and `SOAPACTION`
pub const AV_TRANSPORT_URN: &str = "urn:schemas-upnp-org:service:AVTransport:1";

/// SOAP 1.1 envelope namespace
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// SOAP 1.1 encoding style
pub const SOAP_ENCODING_STYLE: &str = "http://schemas.xmlsoap.org/soap/encoding/";

/// DIDL-Lite default namespace
pub const DIDL_LITE_NS: &str = "urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/";

/// UPnP metadata namespace (`upnp:` prefix)
pub const UPNP_METADATA_NS: &str = "urn:schemas-upnp-org:metadata-1-0/upnp/";

/// Dublin Core namespace (`dc:` prefix)
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// DLNA metadata namespace (`dlna:` prefix)
pub const DLNA_METADATA_NS: &str = "urn:schemas-dlna-org:metadata-1-0/";

/// The only transport instance addressed by this crate
pub const INSTANCE_ID: u32 = 0;
