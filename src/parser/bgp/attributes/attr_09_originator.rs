use bytes::Bytes;

use crate::error::ParserError;
use crate::parser::ReadUtils;

/// Parse ORIGINATOR_ID (RFC 4456): the 4-byte router id of the route's
/// originator inside the AS.
pub(crate) fn parse_originator_id(mut input: Bytes) -> Result<String, ParserError> {
    Ok(input.read_ipv4_address()?.to_string())
}
