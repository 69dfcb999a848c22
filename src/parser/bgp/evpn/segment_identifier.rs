//! Ethernet segment identifier decoding (RFC 7432 section 5).

use bytes::Bytes;
use itertools::Itertools;
use log::warn;

use crate::error::ParserError;
use crate::parser::ReadUtils;

pub(crate) fn format_mac(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).join(":")
}

/// Read the 10-byte ESI off the front of `data` and render it as
/// `"<type> <value fields>"`. Unknown types consume the field, log, and
/// render as the empty string.
pub(crate) fn parse_ethernet_segment_identifier(data: &mut Bytes) -> Result<String, ParserError> {
    let mut field = Bytes::from(data.read_n_bytes(10)?);
    let esi_type = field.read_u8()?;

    let rendered = match esi_type {
        // Arbitrary 9-octet value, operator-configured
        0 => {
            let value = field.read_n_bytes(9)?;
            format!("{} {}", esi_type, hex::encode(value))
        }
        // LACP: system MAC + port key
        1 => {
            let mut mac = [0u8; 6];
            field.read_exact(&mut mac)?;
            let port_key = field.read_u16()?;
            format!("{} {} {}", esi_type, format_mac(&mac), port_key)
        }
        // MSTP: root bridge MAC + root bridge priority
        2 => {
            let mut mac = [0u8; 6];
            field.read_exact(&mut mac)?;
            let priority = field.read_u16()?;
            format!("{} {} {}", esi_type, format_mac(&mac), priority)
        }
        // System MAC + 3-byte local discriminator
        3 => {
            let mut mac = [0u8; 6];
            field.read_exact(&mut mac)?;
            let mut discriminator = [0u8; 3];
            field.read_exact(&mut discriminator)?;
            let value = u32::from(discriminator[0]) << 16
                | u32::from(discriminator[1]) << 8
                | u32::from(discriminator[2]);
            format!("{} {} {}", esi_type, format_mac(&mac), value)
        }
        // Router ID + 4-byte local discriminator
        4 => {
            let router_id = field.read_u32()?;
            let discriminator = field.read_u32()?;
            format!("{} {} {}", esi_type, router_id, discriminator)
        }
        // AS number + 4-byte local discriminator
        5 => {
            let asn = field.read_u32()?;
            let discriminator = field.read_u32()?;
            format!("{} {} {}", esi_type, asn, discriminator)
        }
        unknown => {
            warn!("cannot parse ethernet segment identifier type {}", unknown);
            String::new()
        }
    };

    Ok(rendered)
}
