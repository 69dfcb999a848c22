//! BGP path-attribute model: wire-level type registry and the decoded,
//! stringly-rendered attribute map handed to consumers.

use bitflags::bitflags;
use num_enum::{FromPrimitive, IntoPrimitive};

bitflags! {
    /// The Attribute Flags octet (RFC 4271 section 4.3).
    ///
    /// Only the Extended Length bit changes how the decoder reads the wire;
    /// the others are carried through untouched.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AttrFlags: u8 {
        const OPTIONAL   = 0b10000000;
        const TRANSITIVE = 0b01000000;
        const PARTIAL    = 0b00100000;
        const EXTENDED   = 0b00010000;
    }
}

/// Official path-attribute type codes.
///
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-2>
#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AttrType {
    ORIGIN = 1,
    AS_PATH = 2,
    NEXT_HOP = 3,
    MULTI_EXIT_DISCRIMINATOR = 4,
    LOCAL_PREFERENCE = 5,
    ATOMIC_AGGREGATE = 6,
    AGGREGATOR = 7,
    COMMUNITIES = 8,
    ORIGINATOR_ID = 9,
    CLUSTER_LIST = 10,
    MP_REACHABLE_NLRI = 14,
    MP_UNREACHABLE_NLRI = 15,
    EXTENDED_COMMUNITIES = 16,
    AS4_PATH = 17,
    AS4_AGGREGATOR = 18,
    AS_PATHLIMIT = 21,
    IPV6_ADDRESS_SPECIFIC_EXTENDED_COMMUNITIES = 25,
    BGP_LS_ATTRIBUTE = 29,
    /// Catch all for any unknown attribute types
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// Decoder-internal attribute kinds.
///
/// These key the output map of a parsed update. Their wire counterpart (if
/// any) is recorded per entry as `official_type`; the rendered names are a
/// stable external contract.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrKind {
    Origin,
    AsPath,
    NextHop,
    Med,
    LocalPref,
    AtomicAggregate,
    Aggregator,
    OriginatorId,
    ClusterList,
    CommunityList,
    ExtCommunityList,
    Ipv6ExtCommunityList,
    LinkState,
    BaseAttrHash,
}

impl AttrKind {
    pub const fn name(&self) -> &'static str {
        match self {
            AttrKind::Origin => "origin",
            AttrKind::AsPath => "as_path",
            AttrKind::NextHop => "next_hop",
            AttrKind::Med => "med",
            AttrKind::LocalPref => "local_pref",
            AttrKind::AtomicAggregate => "atomic_aggregate",
            AttrKind::Aggregator => "aggregator",
            AttrKind::OriginatorId => "originator_id",
            AttrKind::ClusterList => "cluster_list",
            AttrKind::CommunityList => "community_list",
            AttrKind::ExtCommunityList => "ext_community_list",
            AttrKind::Ipv6ExtCommunityList => "ipv6_ext_community_list",
            AttrKind::LinkState => "ls_attr",
            AttrKind::BaseAttrHash => "base_attr_hash",
        }
    }
}

/// One decoded attribute: the official wire type it came from, its stable
/// name, and the rendered values (one entry per element for multi-valued
/// attributes such as AS_PATH segments or community lists).
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttrEntry {
    pub official_type: u8,
    pub name: &'static str,
    pub values: Vec<String>,
}

impl AttrEntry {
    pub fn new(official_type: u8, name: &'static str) -> Self {
        AttrEntry {
            official_type,
            name,
            values: Vec::new(),
        }
    }
}
