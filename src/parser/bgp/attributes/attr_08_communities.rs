use bytes::{Buf, Bytes};

use crate::error::ParserError;
use crate::parser::ReadUtils;

/// Parse the COMMUNITIES attribute (RFC 1997) into `<asn>:<value>` strings,
/// one per 4-byte entry. An empty attribute yields an empty list.
pub(crate) fn parse_communities(mut input: Bytes) -> Result<Vec<String>, ParserError> {
    let mut communities = Vec::with_capacity(input.remaining() / 4);
    while input.remaining() > 0 {
        let high = input.read_u16()?;
        let low = input.read_u16()?;
        communities.push(format!("{high}:{low}"));
    }
    Ok(communities)
}
