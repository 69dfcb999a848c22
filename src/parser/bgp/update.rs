//! UPDATE envelope decoding (RFC 4271 section 4.3).
//!
//! The payload handed in here has already had the 19-byte BGP header
//! stripped by the transport layer:
//!
//! ```text
//! +-----------------------------------------------------+
//! |   Withdrawn Routes Length (2 octets)                |
//! +-----------------------------------------------------+
//! |   Withdrawn Routes (variable)                       |
//! +-----------------------------------------------------+
//! |   Total Path Attribute Length (2 octets)            |
//! +-----------------------------------------------------+
//! |   Path Attributes (variable)                        |
//! +-----------------------------------------------------+
//! |   Network Layer Reachability Information (variable) |
//! +-----------------------------------------------------+
//! ```

use bytes::{Buf, Bytes};
use log::{debug, info, warn};

use crate::models::{Afi, ParsedUpdate, PeerCapabilities, Safi};
use crate::parser::bgp::attributes::parse_attributes;
use crate::parser::bgp::prefixes::parse_nlri_list;
use crate::parser::ReadUtils;

/// Decoder for one peer's UPDATE messages.
///
/// An instance is bound to a single peer's capability snapshot: the ASN
/// width latches mutate on the first AS_PATH parsed, so the instance is not
/// shareable across peers or threads. Create one decoder per peer; parsing
/// across peers is embarrassingly parallel.
#[derive(Debug, Clone, Default)]
pub struct UpdateParser {
    peer: PeerCapabilities,
}

impl UpdateParser {
    pub fn new(peer: PeerCapabilities) -> Self {
        UpdateParser { peer }
    }

    pub fn peer(&self) -> &PeerCapabilities {
        &self.peer
    }

    pub fn peer_mut(&mut self) -> &mut PeerCapabilities {
        &mut self.peer
    }

    /// Parse one UPDATE payload into `update`, which is cleared first.
    ///
    /// Returns the number of bytes consumed; 0 signals a fatal envelope
    /// failure, after which the caller should treat the stream as out of
    /// sync. Sub-buffer failures keep whatever was already decoded.
    pub fn parse_update(&mut self, data: &[u8], update: &mut ParsedUpdate) -> usize {
        update.clear();

        let size = data.len();
        let mut buf = Bytes::copy_from_slice(data);
        debug!("parsing update message of size {}", size);

        if size < 2 {
            warn!("update message is too short to parse the header");
            return 0;
        }

        let withdrawn_len = match buf.read_u16() {
            Ok(len) => len as usize,
            Err(_) => return 0,
        };
        if buf.remaining() < withdrawn_len {
            warn!("update message is too short to parse withdrawn data");
            return 0;
        }
        let withdrawn_bytes = buf.split_to(withdrawn_len);
        debug!("withdrawn len = {}", withdrawn_len);

        let attr_len = match buf.read_u16() {
            Ok(len) => len as usize,
            Err(_) => {
                warn!("update message is too short to parse the attribute length");
                return 0;
            }
        };
        if buf.remaining() < attr_len {
            warn!("update message is too short to parse attr data");
            return 0;
        }
        let attr_bytes = buf.split_to(attr_len);
        debug!("attribute len = {}", attr_len);

        let nlri_bytes = buf;

        if withdrawn_len == 0 && attr_len == 0 && nlri_bytes.is_empty() {
            info!("End-Of-RIB marker");
            return size;
        }

        if !withdrawn_bytes.is_empty() {
            parse_nlri_list(
                withdrawn_bytes,
                Afi::Ipv4,
                Safi::Unicast,
                &self.peer,
                &mut update.withdrawn_nlri_list,
            );
        }

        // MP_REACH / MP_UNREACH inside the attribute buffer append further
        // AFI/SAFI-tagged routes to the same lists.
        if !attr_bytes.is_empty() {
            parse_attributes(attr_bytes, &mut self.peer, update);
        }

        if !nlri_bytes.is_empty() {
            parse_nlri_list(
                nlri_bytes,
                Afi::Ipv4,
                Safi::Unicast,
                &self.peer,
                &mut update.nlri_list,
            );
        }

        size
    }
}
