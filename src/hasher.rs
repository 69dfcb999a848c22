//! Content digests for route and attribute identity.
//!
//! MD5 here is a content-addressable digest, not a security primitive. The
//! feed order is part of the external contract: identical inputs fed in the
//! same order must yield the same `hash` / `base_attr_hash` strings across
//! releases.

use md5::{Digest, Md5};

/// Feed every string of an attribute or NLRI value list, in list order.
pub(crate) fn update_values(hash: &mut Md5, values: &[String]) {
    for value in values {
        hash.update(value.as_bytes());
    }
}

/// Finalize and render as lowercase hex.
pub(crate) fn finalize_hex(hash: Md5) -> String {
    hex::encode(hash.finalize())
}
