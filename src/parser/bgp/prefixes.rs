//! Length-prefixed NLRI prefix lists (RFC 4271 section 4.3, RFC 7911
//! Add-Path, RFC 8277 labeled unicast).
//!
//! Each decoded prefix carries a content hash identifying the
//! (peer, path-id, prefix) tuple. The digest feed order is part of the
//! external contract; see the crate docs.

use bytes::{Buf, Bytes};
use ipnet::{Ipv4Net, Ipv6Net};
use log::{debug, warn};
use md5::{Digest, Md5};
use smallvec::SmallVec;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::hasher;
use crate::models::{Afi, Nlri, NlriKind, NlriType, PeerCapabilities, Safi};
use crate::parser::ReadUtils;

/// Compatibility label marking a labeled-unicast withdraw (RFC 8277).
const LABEL_WITHDRAW: u32 = 0x800000;

/// Decode a buffer of length-prefixed prefixes into `out`.
///
/// Iterates until the buffer is consumed. A prefix whose address length
/// overruns the family width (or the buffer) is an irrecoverable framing
/// error: it is logged and iteration of this list stops, keeping whatever
/// was already decoded.
pub(crate) fn parse_nlri_list(
    mut data: Bytes,
    afi: Afi,
    safi: Safi,
    peer: &PeerCapabilities,
    out: &mut Vec<Nlri>,
) {
    let max_addr_bytes: u8 = match afi {
        Afi::Ipv4 => 4,
        Afi::Ipv6 => 16,
        _ => {
            warn!("prefix list decoding is not defined for AFI {:?}", afi);
            return;
        }
    };
    let add_path = peer.add_path_enabled(afi, safi);
    let labeled = safi == Safi::NlriLabel;

    while data.remaining() > 0 {
        let mut nlri = Nlri::new(afi, safi, NlriType::Prefix);
        let mut hash = Md5::new();

        let path_id = if add_path && data.remaining() >= 4 {
            match data.read_u32() {
                Ok(id) => id,
                Err(_) => break,
            }
        } else {
            0
        };
        nlri.push_value(NlriKind::PathId, path_id.to_string());
        if path_id > 0 {
            hasher::update_values(&mut hash, &nlri.fields[&NlriKind::PathId].values);
        }

        let mut prefix_bits = match data.read_u8() {
            Ok(bits) => bits,
            Err(e) => {
                warn!("prefix list ended mid-entry: {}", e);
                break;
            }
        };

        if labeled {
            let labels = match read_label_stack(&mut data, &mut prefix_bits) {
                Ok(labels) => labels,
                Err(e) => {
                    warn!("could not read label stack: {}", e);
                    break;
                }
            };
            for label in labels {
                nlri.push_value(NlriKind::Labels, label.to_string());
            }
        }

        let addr_bytes = prefix_bits.div_ceil(8);
        if addr_bytes > max_addr_bytes {
            warn!(
                "prefix address is larger than {} bytes: bytes={} bits={}",
                max_addr_bytes, addr_bytes, prefix_bits
            );
            break;
        }

        let (prefix_str, raw) = match afi {
            Afi::Ipv4 => {
                let mut raw = [0u8; 4];
                if data.read_exact(&mut raw[..addr_bytes as usize]).is_err() {
                    warn!("prefix list too short for {} address bytes", addr_bytes);
                    break;
                }
                let net = match Ipv4Net::new(Ipv4Addr::from(raw), prefix_bits) {
                    Ok(net) => net,
                    Err(_) => break,
                };
                debug!("adding prefix {} path_id {}", net, path_id);
                (net.addr().to_string(), raw.to_vec())
            }
            Afi::Ipv6 => {
                let mut raw = [0u8; 16];
                if data.read_exact(&mut raw[..addr_bytes as usize]).is_err() {
                    warn!("prefix list too short for {} address bytes", addr_bytes);
                    break;
                }
                let net = match Ipv6Net::new(Ipv6Addr::from(raw), prefix_bits) {
                    Ok(net) => net,
                    Err(_) => break,
                };
                debug!("adding prefix {} path_id {}", net, path_id);
                (net.addr().to_string(), raw.to_vec())
            }
            _ => unreachable!(),
        };

        nlri.push_value(NlriKind::PrefixLength, prefix_bits.to_string());
        hasher::update_values(&mut hash, &nlri.fields[&NlriKind::PrefixLength].values);

        nlri.push_value(NlriKind::Prefix, prefix_str);
        hasher::update_values(&mut hash, &nlri.fields[&NlriKind::Prefix].values);

        // Hash over the raw left-aligned address; the field itself renders
        // as hex because output values are strings.
        hash.update(&raw);
        nlri.push_value(NlriKind::PrefixBin, hex::encode(&raw));

        if let Some(peer_hash_str) = &peer.peer_hash_str {
            hash.update(peer_hash_str.as_bytes());
        }
        nlri.push_value(NlriKind::Hash, hasher::finalize_hex(hash));

        out.push(nlri);
    }
}

/// Read the MPLS label stack of a labeled-unicast prefix, adjusting the
/// remaining prefix bits. Labels are 20-bit values; the low nibble of each
/// 3-byte entry holds EXP and the bottom-of-stack bit.
fn read_label_stack(
    data: &mut Bytes,
    prefix_bits: &mut u8,
) -> Result<SmallVec<[u32; 3]>, crate::error::ParserError> {
    let mut labels = SmallVec::new();
    while *prefix_bits >= 24 {
        let mut entry = [0u8; 3];
        data.read_exact(&mut entry)?;
        let raw = u32::from(entry[0]) << 16 | u32::from(entry[1]) << 8 | u32::from(entry[2]);
        *prefix_bits -= 24;
        labels.push(raw >> 4);
        if raw & 0x01 != 0 || raw == LABEL_WITHDRAW {
            break;
        }
    }
    Ok(labels)
}
