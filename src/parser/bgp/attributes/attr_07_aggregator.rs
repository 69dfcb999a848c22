use bytes::{Buf, Bytes};

use crate::error::ParserError;
use crate::parser::ReadUtils;

/// Parse the AGGREGATOR attribute, rendered as `"<asn> <ipv4>"`.
///
/// The ASN width is dispatched on the attribute length: 8 bytes means a
/// 4-octet ASN (RFC 6793), 6 bytes a 2-octet ASN. Anything else is an
/// error.
pub(crate) fn parse_aggregator(mut input: Bytes) -> Result<String, ParserError> {
    let asn = match input.remaining() {
        8 => input.read_u32()?,
        6 => u32::from(input.read_u16()?),
        found => {
            return Err(ParserError::ParseError(format!(
                "AGGREGATOR attribute length is invalid: found {found}, should be 6 or 8"
            )))
        }
    };
    let identifier = input.read_ipv4_address()?;
    Ok(format!("{asn} {identifier}"))
}
