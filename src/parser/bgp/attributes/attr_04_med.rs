use bytes::Bytes;

use crate::error::ParserError;
use crate::parser::ReadUtils;

/// Parse MULTI_EXIT_DISCRIMINATOR: a 4-byte unsigned metric, rendered as
/// decimal.
pub(crate) fn parse_med(mut input: Bytes) -> Result<String, ParserError> {
    Ok(input.read_u32()?.to_string())
}
