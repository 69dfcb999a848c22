use bytes::Bytes;

use crate::error::ParserError;
use crate::parser::ReadUtils;

/// Parse LOCAL_PREF: a 4-byte unsigned degree of preference, rendered as
/// decimal.
pub(crate) fn parse_local_pref(mut input: Bytes) -> Result<String, ParserError> {
    Ok(input.read_u32()?.to_string())
}
