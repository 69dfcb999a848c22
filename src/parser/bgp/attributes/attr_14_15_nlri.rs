//! MP_REACH_NLRI / MP_UNREACH_NLRI decoding (RFC 4760).
//!
//! The attribute wraps an inner AFI/SAFI-tagged blob:
//!
//! ```text
//! +---------------------------------------------------------+
//! | Address Family Identifier (2 octets)                    |
//! +---------------------------------------------------------+
//! | Subsequent Address Family Identifier (1 octet)          |
//! +---------------------------------------------------------+
//! | Length of Next Hop Network Address (1 octet)            |  reach only
//! +---------------------------------------------------------+
//! | Network Address of Next Hop (variable)                  |  reach only
//! +---------------------------------------------------------+
//! | Reserved (1 octet)                                      |  reach only
//! +---------------------------------------------------------+
//! | Network Layer Reachability Information (variable)       |
//! +---------------------------------------------------------+
//! ```
//!
//! The NLRI portion recurses into the prefix, EVPN, or link-state decoder
//! depending on the address family.

use bytes::Bytes;
use log::warn;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::ParserError;
use crate::models::{Afi, AttrKind, AttrType, Nlri, ParsedUpdate, PeerCapabilities, Safi};
use crate::parser::bgp::attributes::attr_29_linkstate::parse_link_state_nlri_list;
use crate::parser::bgp::evpn::parse_evpn_nlri_list;
use crate::parser::bgp::prefixes::parse_nlri_list;
use crate::parser::ReadUtils;

pub(crate) fn parse_mp_reach_nlri(
    mut input: Bytes,
    peer: &PeerCapabilities,
    update: &mut ParsedUpdate,
) -> Result<(), ParserError> {
    let afi = input.read_afi()?;
    let safi = input.read_safi()?;

    let next_hop_length = input.read_u8()? as usize;
    input.has_n_remaining(next_hop_length)?;
    let next_hop_bytes = input.split_to(next_hop_length);
    if let Some(next_hop) = render_next_hop(&next_hop_bytes) {
        let entry = update.attr_entry(AttrKind::NextHop, AttrType::NEXT_HOP.into());
        entry.values = vec![next_hop];
    }

    // Reserved octet between next hop and NLRI.
    let reserved = input.read_u8()?;
    if reserved != 0 {
        warn!("MP_REACH reserved byte not 0");
    }

    parse_family_nlri(input, afi, safi, peer, &mut update.nlri_list)
}

pub(crate) fn parse_mp_unreach_nlri(
    mut input: Bytes,
    peer: &PeerCapabilities,
    update: &mut ParsedUpdate,
) -> Result<(), ParserError> {
    let afi = input.read_afi()?;
    let safi = input.read_safi()?;
    parse_family_nlri(input, afi, safi, peer, &mut update.withdrawn_nlri_list)
}

fn parse_family_nlri(
    input: Bytes,
    afi: Afi,
    safi: Safi,
    peer: &PeerCapabilities,
    out: &mut Vec<Nlri>,
) -> Result<(), ParserError> {
    match (afi, safi) {
        (Afi::Ipv4 | Afi::Ipv6, Safi::Unicast | Safi::Multicast | Safi::NlriLabel) => {
            parse_nlri_list(input, afi, safi, peer, out);
            Ok(())
        }
        (Afi::L2vpn, Safi::Evpn) => {
            parse_evpn_nlri_list(input, out);
            Ok(())
        }
        (Afi::BgpLs, Safi::BgpLs) => {
            parse_link_state_nlri_list(input, safi, out);
            Ok(())
        }
        (afi, safi) => Err(ParserError::Unsupported(format!(
            "multiprotocol NLRI for AFI {afi:?} / SAFI {safi:?} is not implemented"
        ))),
    }
}

/// Render the next-hop network address. A 32-byte IPv6 next hop carries a
/// global followed by a link-local address; the global one is rendered.
fn render_next_hop(bytes: &Bytes) -> Option<String> {
    match bytes.len() {
        0 => None,
        4 => {
            let mut raw = [0u8; 4];
            raw.copy_from_slice(bytes);
            Some(Ipv4Addr::from(raw).to_string())
        }
        16 | 32 => {
            let mut raw = [0u8; 16];
            raw.copy_from_slice(&bytes[..16]);
            Some(Ipv6Addr::from(raw).to_string())
        }
        other => {
            warn!("unexpected MP_REACH next hop length {}", other);
            None
        }
    }
}
