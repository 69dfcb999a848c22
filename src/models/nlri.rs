//! Decoded NLRI records.
//!
//! Every announced or withdrawn route becomes one [Nlri]: an AFI/SAFI tag, a
//! variant tag for family-specific shapes (EVPN route types, link-state
//! objects, plain prefixes), and a map from field kind to rendered values.
//! The rendered field names are a stable external contract.

use std::collections::BTreeMap;

use crate::models::{Afi, Safi};

/// Variant tag for AFI/SAFI-specific NLRI shapes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NlriType {
    /// A length-prefixed address prefix (IPv4/IPv6 unicast and friends).
    Prefix,
    EvpnEthernetAutoDiscovery,
    EvpnMacIpAdvertisement,
    EvpnInclusiveMulticastEthernetTag,
    EvpnEthernetSegmentRoute,
    LinkState,
}

/// Field kinds an [Nlri] can carry.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NlriKind {
    PathId,
    PrefixLength,
    Prefix,
    PrefixBin,
    Hash,
    Labels,
    RdType,
    RdAdministratorSubfield,
    RdAssignedNumber,
    EthernetSegmentIdentifier,
    EthernetTagIdHex,
    MacLen,
    Mac,
    IpLen,
    Ip,
    MplsLabel1,
    MplsLabel2,
    OriginatingRouterIpLen,
    OriginatingRouterIp,
    LsNlriType,
    LsNlriData,
}

impl NlriKind {
    pub const fn name(&self) -> &'static str {
        match self {
            NlriKind::PathId => "path_id",
            NlriKind::PrefixLength => "prefix_len",
            NlriKind::Prefix => "prefix",
            NlriKind::PrefixBin => "prefix_bin",
            NlriKind::Hash => "hash",
            NlriKind::Labels => "labels",
            NlriKind::RdType => "rd_type",
            NlriKind::RdAdministratorSubfield => "rd_administrator_subfield",
            NlriKind::RdAssignedNumber => "rd_assigned_number",
            NlriKind::EthernetSegmentIdentifier => "ethernet_segment_identifier",
            NlriKind::EthernetTagIdHex => "ethernet_tag_id_hex",
            NlriKind::MacLen => "mac_len",
            NlriKind::Mac => "mac",
            NlriKind::IpLen => "ip_len",
            NlriKind::Ip => "ip",
            NlriKind::MplsLabel1 => "mpls_label_1",
            NlriKind::MplsLabel2 => "mpls_label_2",
            NlriKind::OriginatingRouterIpLen => "originating_router_ip_len",
            NlriKind::OriginatingRouterIp => "originating_router_ip",
            NlriKind::LsNlriType => "ls_nlri_type",
            NlriKind::LsNlriData => "ls_nlri_data",
        }
    }
}

/// Rendered values of one NLRI field.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NlriField {
    pub name: &'static str,
    pub values: Vec<String>,
}

/// One decoded route, announced or withdrawn.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Nlri {
    pub afi: Afi,
    pub safi: Safi,
    pub nlri_type: NlriType,
    pub fields: BTreeMap<NlriKind, NlriField>,
}

impl Nlri {
    pub fn new(afi: Afi, safi: Safi, nlri_type: NlriType) -> Self {
        Nlri {
            afi,
            safi,
            nlri_type,
            fields: BTreeMap::new(),
        }
    }

    /// Append one rendered value under `kind`, creating the field on first use.
    pub fn push_value(&mut self, kind: NlriKind, value: String) {
        self.fields
            .entry(kind)
            .or_insert_with(|| NlriField {
                name: kind.name(),
                values: Vec::new(),
            })
            .values
            .push(value);
    }

    /// All rendered values of `kind`, if the field was decoded.
    pub fn values(&self, kind: NlriKind) -> Option<&[String]> {
        self.fields.get(&kind).map(|f| f.values.as_slice())
    }

    /// First rendered value of `kind`, if the field was decoded.
    pub fn first_value(&self, kind: NlriKind) -> Option<&str> {
        self.values(kind).and_then(|v| v.first()).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_lookup() {
        let mut nlri = Nlri::new(Afi::Ipv4, Safi::Unicast, NlriType::Prefix);
        nlri.push_value(NlriKind::Prefix, "10.0.0.0".to_string());
        nlri.push_value(NlriKind::PrefixLength, "8".to_string());

        assert_eq!(nlri.first_value(NlriKind::Prefix), Some("10.0.0.0"));
        assert_eq!(nlri.fields[&NlriKind::Prefix].name, "prefix");
        assert_eq!(nlri.first_value(NlriKind::Hash), None);
    }
}
