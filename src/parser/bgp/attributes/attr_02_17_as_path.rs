//! AS_PATH decoding with runtime ASN-width detection.
//!
//! BMP-carried UPDATEs are supposed to be rewritten to 4-octet AS paths,
//! but several implementations forward the peer's encoding untouched. When
//! the OPEN capabilities do not guarantee 4-octet ASNs, the first AS_PATH
//! seen for a peer is dry-run walked assuming 4-octet ASNs; if the walk
//! does not land exactly on the attribute boundary, the peer is latched to
//! 2-octet parsing. The check runs once per peer.

use bytes::{Buf, Bytes};
use itertools::Itertools;
use log::{debug, info, warn};

use crate::error::ParserError;
use crate::models::PeerCapabilities;
use crate::parser::ReadUtils;

const AS_SET: u8 = 1;
const AS_SEQUENCE: u8 = 2;

/// Parse AS_PATH, returning one rendered value per sequence ASN and one
/// brace-wrapped value per AS_SET segment. Paths too short to hold a single
/// ASN yield no values.
pub(crate) fn parse_as_path(
    mut input: Bytes,
    peer: &mut PeerCapabilities,
) -> Result<Vec<String>, ParserError> {
    if input.remaining() < 4 {
        return Ok(Vec::new());
    }

    if !peer.checked_asn_octet_length && !peer.four_octet_asn() {
        if !walks_as_four_octet(&input) {
            info!("using 2-octet ASN path parsing");
            peer.using_2_octet_asn = true;
        }
        peer.checked_asn_octet_length = true;
    }

    let mut asn_octet_size: usize = if peer.using_2_octet_asn && !peer.four_octet_asn() {
        2
    } else {
        4
    };

    let mut values = Vec::new();
    while input.remaining() >= 2 {
        let seg_type = input.read_u8()?;
        let seg_len = input.read_u8()? as usize;

        if seg_len * asn_octet_size > input.remaining() {
            // Mid-stream defense against a mis-detected width.
            warn!(
                "AS path segment overruns the attribute at ASN octet size {}, \
                 switching to 2-octet",
                asn_octet_size
            );
            asn_octet_size = 2;
        }

        debug!(
            "as_path seg_type = {} seg_len = {} asn_octet_size = {}",
            seg_type, seg_len, asn_octet_size
        );

        let mut segment = Vec::with_capacity(seg_len);
        for _ in 0..seg_len {
            let asn = match asn_octet_size {
                2 => u32::from(input.read_u16()?),
                _ => input.read_u32()?,
            };
            segment.push(asn.to_string());
        }

        match seg_type {
            AS_SEQUENCE => values.extend(segment),
            AS_SET => values.push(format!("{{ {} }}", segment.iter().join(" "))),
            other => {
                warn!("malformed AS path segment of type {}", other);
            }
        }
    }

    Ok(values)
}

/// Dry-run the segment walk assuming 4-octet ASNs; true when it lands
/// exactly on the attribute boundary.
fn walks_as_four_octet(input: &Bytes) -> bool {
    let mut path_len = input.remaining() as i64;
    let mut offset = 0usize;
    while path_len > 0 {
        let Some(&seg_len) = input.get(offset + 1) else {
            return false;
        };
        path_len -= 2 + i64::from(seg_len) * 4;
        offset += 2 + usize::from(seg_len) * 4;
    }
    path_len == 0
}
