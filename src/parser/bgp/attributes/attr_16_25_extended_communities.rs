//! BGP Extended Communities attributes
//!
//! RFC4360: <https://datatracker.ietf.org/doc/html/rfc4360#section-4.5>
//! RFC5701: <https://datatracker.ietf.org/doc/html/rfc5701>
//!
//! Entries render at parse time as `type:subtype:global:local-hex`, one
//! string per community.

use bytes::{Buf, Bytes};

use crate::error::ParserError;
use crate::parser::ReadUtils;

const TYPE_TRANSITIVE_TWO_OCTET_AS: u8 = 0x00;
const TYPE_TRANSITIVE_IPV4: u8 = 0x01;
const TYPE_TRANSITIVE_FOUR_OCTET_AS: u8 = 0x02;
const TYPE_TRANSITIVE_OPAQUE: u8 = 0x03;
const TYPE_NON_TRANSITIVE_TWO_OCTET_AS: u8 = 0x40;
const TYPE_NON_TRANSITIVE_IPV4: u8 = 0x41;
const TYPE_NON_TRANSITIVE_FOUR_OCTET_AS: u8 = 0x42;
const TYPE_NON_TRANSITIVE_OPAQUE: u8 = 0x43;

/// Parse the 8-octet extended community list (attribute 16).
pub(crate) fn parse_extended_communities(mut input: Bytes) -> Result<Vec<String>, ParserError> {
    let mut communities = Vec::with_capacity(input.remaining() / 8);

    while input.remaining() > 0 {
        let ec_type = input.read_u8()?;
        let sub_type = input.read_u8()?;

        let rendered = match ec_type {
            TYPE_TRANSITIVE_TWO_OCTET_AS | TYPE_NON_TRANSITIVE_TWO_OCTET_AS => {
                let global = input.read_u16()?;
                let mut local = [0u8; 4];
                input.read_exact(&mut local)?;
                format!("{ec_type}:{sub_type}:{global}:{}", hex::encode(local))
            }
            TYPE_TRANSITIVE_IPV4 | TYPE_NON_TRANSITIVE_IPV4 => {
                let global = input.read_ipv4_address()?;
                let mut local = [0u8; 2];
                input.read_exact(&mut local)?;
                format!("{ec_type}:{sub_type}:{global}:{}", hex::encode(local))
            }
            TYPE_TRANSITIVE_FOUR_OCTET_AS | TYPE_NON_TRANSITIVE_FOUR_OCTET_AS => {
                let global = input.read_u32()?;
                let mut local = [0u8; 2];
                input.read_exact(&mut local)?;
                format!("{ec_type}:{sub_type}:{global}:{}", hex::encode(local))
            }
            TYPE_TRANSITIVE_OPAQUE | TYPE_NON_TRANSITIVE_OPAQUE => {
                let mut value = [0u8; 6];
                input.read_exact(&mut value)?;
                format!("{ec_type}:{sub_type}:{}", hex::encode(value))
            }
            _ => {
                // Unknown community structure: carry the raw payload.
                let mut value = [0u8; 6];
                input.read_exact(&mut value)?;
                format!("{ec_type}:{sub_type}:{}", hex::encode(value))
            }
        };
        communities.push(rendered);
    }

    Ok(communities)
}

/// Parse the 20-octet IPv6 address specific extended community list
/// (attribute 25).
pub(crate) fn parse_ipv6_extended_communities(
    mut input: Bytes,
) -> Result<Vec<String>, ParserError> {
    let mut communities = Vec::with_capacity(input.remaining() / 20);

    while input.remaining() > 0 {
        let ec_type = input.read_u8()?;
        let sub_type = input.read_u8()?;
        let global = input.read_ipv6_address()?;
        let mut local = [0u8; 2];
        input.read_exact(&mut local)?;
        communities.push(format!(
            "{ec_type}:{sub_type}:{global}:{}",
            hex::encode(local)
        ));
    }

    Ok(communities)
}
