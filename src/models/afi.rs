use num_enum::TryFromPrimitive;

/// AFI -- Address Family Identifier
///
/// <https://www.iana.org/assignments/address-family-numbers/address-family-numbers.xhtml>
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Afi {
    Ipv4 = 1,
    Ipv6 = 2,
    L2vpn = 25,
    BgpLs = 16388,
}

/// SAFI -- Subsequent Address Family Identifier
///
/// Only the SAFIs the decoder can be handed through MP_REACH/MP_UNREACH are
/// listed; anything else is reported as unsupported and skipped.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Safi {
    Unicast = 1,
    Multicast = 2,
    NlriLabel = 4,
    McastVpn = 5,
    Vpls = 65,
    Mdt = 66,
    V4over6 = 67,
    V6over4 = 68,
    Evpn = 70,
    BgpLs = 71,
    Mpls = 128,
    McastMplsVpn = 129,
    RtConstraints = 132,
}

/// EVPN route types the decoder dispatches on (RFC 7432 section 7).
#[derive(Debug, PartialEq, Eq, Clone, Copy, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EvpnRouteType {
    EthernetAutoDiscovery = 1,
    MacIpAdvertisement = 2,
    InclusiveMulticastEthernetTag = 3,
    EthernetSegmentRoute = 4,
}
