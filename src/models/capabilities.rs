//! Per-peer capability snapshot consumed by the decoder.
//!
//! Capability negotiation itself happens elsewhere; the decoder only sees
//! its result. The two ASN-width latches are the single piece of cross-call
//! state in the system: they are written once, on the first AS_PATH parsed
//! for the peer.

use std::collections::HashSet;

use crate::models::{Afi, Safi};

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerCapabilities {
    /// Peer advertised the 4-octet ASN capability in its OPEN.
    pub recv_four_octet_asn: bool,
    /// We advertised the 4-octet ASN capability to the peer.
    pub sent_four_octet_asn: bool,
    /// Fed into every route and base-attribute digest so hashes are unique
    /// per peer. Typically the collector's peer hash string.
    pub peer_hash_str: Option<String>,
    /// Latched on first AS_PATH when the dry-run width walk fails.
    pub using_2_octet_asn: bool,
    /// Set once the width heuristic has run; it never runs again.
    pub checked_asn_octet_length: bool,
    add_path: HashSet<(Afi, Safi)>,
}

impl PeerCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// 4-octet ASN encoding is certain only when both sides advertised it.
    pub fn four_octet_asn(&self) -> bool {
        self.recv_four_octet_asn && self.sent_four_octet_asn
    }

    pub fn enable_add_path(&mut self, afi: Afi, safi: Safi) {
        self.add_path.insert((afi, safi));
    }

    pub fn disable_add_path(&mut self, afi: Afi, safi: Safi) {
        self.add_path.remove(&(afi, safi));
    }

    pub fn add_path_enabled(&self, afi: Afi, safi: Safi) -> bool {
        self.add_path.contains(&(afi, safi))
    }
}
