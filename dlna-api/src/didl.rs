//! DIDL-Lite metadata composition for `SetAVTransportURI`
//!
//! DIDL-Lite format produced for a media item:
//! ```xml
//! <DIDL-Lite xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/" ...>
//!   <item id="<uuid>" parentID="<uuid>" restricted="1">
//!     <dc:title>Song Title</dc:title>
//!     <dc:creator>Artist Name</dc:creator>
//!     <upnp:artist>Artist Name</upnp:artist>
//!     <upnp:actor>Artist Name</upnp:actor>
//!     <upnp:author>Artist Name</upnp:author>
//!     <upnp:class>object.item.audioItem.musicTrack</upnp:class>
//!     <res protocolInfo="http-get:*:audio/mpeg:*">http://...</res>
//!   </item>
//! </DIDL-Lite>
//! ```
//!
//! The artist is repeated across four elements because renderers disagree
//! on which one they display.

use uuid::Uuid;

use crate::envelope::UriMetadata;
use crate::escape::{
    check_xml_chars, escape_cow, normalize_and_escape, validate_raw_metadata, EscapePolicy,
};
use crate::service::{DC_NS, DIDL_LITE_NS, DLNA_METADATA_NS, UPNP_METADATA_NS};
use crate::Result;

/// UPnP class assigned to every composed item
pub const MUSIC_TRACK_CLASS: &str = "object.item.audioItem.musicTrack";

/// Accessors a media server item must provide for metadata composition
///
/// Implemented by the content directory's item model; this crate never
/// constructs items itself.
pub trait MediaItem {
    /// Track title
    fn title(&self) -> &str;

    /// Artist, also used as creator, actor and author
    fn artist(&self) -> &str;

    /// A complete, valid `<res>` element describing the playable resource
    fn res_xml(&self) -> &str;
}

/// What a caller can attach to a URI when asking a renderer to play it
#[derive(Clone, Copy)]
pub enum PlayableResource<'a> {
    /// A structured item; DIDL-Lite is composed from its accessors
    Item(&'a dyn MediaItem),
    /// An opaque metadata blob that is already escaped for element content
    Raw(&'a str),
}

impl std::fmt::Debug for PlayableResource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayableResource::Item(item) => f
                .debug_struct("Item")
                .field("title", &item.title())
                .field("artist", &item.artist())
                .finish(),
            PlayableResource::Raw(raw) => f.debug_tuple("Raw").field(raw).finish(),
        }
    }
}

/// Compose an unescaped DIDL-Lite document for `item`.
///
/// Each call uses fresh `id` and `parentID` values. Title and artist are
/// escaped inside the document; `res_xml` is inserted verbatim.
pub fn compose_didl(item: &dyn MediaItem) -> String {
    let policy = EscapePolicy::ElementText;
    let title = escape_cow(item.title(), policy);
    let artist = escape_cow(item.artist(), policy);

    format!(
        r#"
<DIDL-Lite xmlns="{didl}"
    xmlns:upnp="{upnp}"
    xmlns:dc="{dc}"
    xmlns:dlna="{dlna}">
    <item id="{id}" parentID="{parent_id}" restricted="1">
        <dc:title>{title}</dc:title>
        <dc:creator>{artist}</dc:creator>
        <upnp:artist>{artist}</upnp:artist>
        <upnp:actor>{artist}</upnp:actor>
        <upnp:author>{artist}</upnp:author>
        <upnp:class>{class}</upnp:class>
        {res}
    </item>
</DIDL-Lite>
"#,
        didl = DIDL_LITE_NS,
        upnp = UPNP_METADATA_NS,
        dc = DC_NS,
        dlna = DLNA_METADATA_NS,
        id = Uuid::new_v4(),
        parent_id = Uuid::new_v4(),
        title = title,
        artist = artist,
        class = MUSIC_TRACK_CLASS,
        res = item.res_xml(),
    )
}

/// Turns an optional [`PlayableResource`] into envelope-ready metadata
/// according to a renderer's metadata policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataComposer {
    include_metadata: bool,
    policy: EscapePolicy,
}

impl MetadataComposer {
    pub fn new(include_metadata: bool, policy: EscapePolicy) -> Self {
        Self {
            include_metadata,
            policy,
        }
    }

    /// Produce the metadata argument for a URI action.
    ///
    /// Disabled policy or no resource gives [`UriMetadata::WithoutMetadata`].
    /// Items are composed, normalized and escaped; their fields must not hold
    /// characters XML cannot carry. Raw blobs are checked and passed through
    /// untouched.
    pub fn compose(&self, resource: Option<PlayableResource<'_>>) -> Result<UriMetadata> {
        if !self.include_metadata {
            return Ok(UriMetadata::WithoutMetadata);
        }

        match resource {
            None => Ok(UriMetadata::WithoutMetadata),
            Some(PlayableResource::Item(item)) => {
                check_xml_chars("item title", item.title())?;
                check_xml_chars("item artist", item.artist())?;
                check_xml_chars("item resource", item.res_xml())?;
                Ok(UriMetadata::from_escaped(normalize_and_escape(
                    &compose_didl(item),
                    self.policy,
                )))
            }
            Some(PlayableResource::Raw(raw)) => {
                Ok(UriMetadata::from_escaped(validate_raw_metadata(raw)?))
            }
        }
    }
}
