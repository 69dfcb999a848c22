//! Route distinguisher decoding (RFC 4364 section 4.2).

use bytes::Bytes;
use log::debug;

use crate::error::ParserError;
use crate::parser::ReadUtils;

/// A decoded 8-byte route distinguisher. The administrator and assigned
/// number subfields are rendered at parse time; unknown types pass through
/// with empty subfields.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub(crate) struct RouteDistinguisher {
    pub rd_type: u8,
    pub administrator_subfield: String,
    pub assigned_number: String,
}

/// Read the 8-byte RD off the front of `data`.
///
/// The type selector is taken from the second byte of the field, skipping
/// the high-order byte. Upstream producers emit a zero high byte for every
/// assigned type, so the selector value is unaffected; the skip is kept for
/// wire compatibility with the deployed decoder.
pub(crate) fn parse_route_distinguisher(
    data: &mut Bytes,
) -> Result<RouteDistinguisher, ParserError> {
    let mut field = Bytes::from(data.read_n_bytes(8)?);

    field.skip_n(1)?;
    let rd_type = field.read_u8()?;

    let rd = match rd_type {
        0 => {
            let administrator = field.read_u16()?;
            let assigned = field.read_u32()?;
            RouteDistinguisher {
                rd_type,
                administrator_subfield: administrator.to_string(),
                assigned_number: assigned.to_string(),
            }
        }
        1 => {
            let administrator = field.read_ipv4_address()?;
            let assigned = field.read_u16()?;
            RouteDistinguisher {
                rd_type,
                administrator_subfield: administrator.to_string(),
                assigned_number: assigned.to_string(),
            }
        }
        2 => {
            let administrator = field.read_u32()?;
            let assigned = field.read_u16()?;
            RouteDistinguisher {
                rd_type,
                administrator_subfield: administrator.to_string(),
                assigned_number: assigned.to_string(),
            }
        }
        unknown => {
            debug!("unknown route distinguisher type {}", unknown);
            RouteDistinguisher {
                rd_type,
                ..Default::default()
            }
        }
    };

    Ok(rd)
}
