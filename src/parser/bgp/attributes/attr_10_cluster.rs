use bytes::{Buf, Bytes};

use crate::error::ParserError;
use crate::parser::ReadUtils;

/// Parse CLUSTER_LIST (RFC 4456): a sequence of 4-byte cluster ids, one
/// rendered value per id.
pub(crate) fn parse_clusters(mut input: Bytes) -> Result<Vec<String>, ParserError> {
    let mut clusters = Vec::with_capacity(input.remaining() / 4);
    while input.remaining() > 0 {
        clusters.push(input.read_ipv4_address()?.to_string());
    }
    Ok(clusters)
}
