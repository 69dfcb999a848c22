use bytes::Bytes;

use crate::error::ParserError;
use crate::parser::ReadUtils;

/// Parse the NEXT_HOP attribute: a 4-byte IPv4 address, rendered textually.
/// IPv6 next hops travel inside MP_REACH_NLRI instead.
pub(crate) fn parse_next_hop(mut input: Bytes) -> Result<String, ParserError> {
    Ok(input.read_ipv4_address()?.to_string())
}
