//! EVPN NLRI decoding (RFC 7432).
//!
//! An EVPN NLRI blob is a sequence of `{route_type, length, body}` records.
//! The body opens with an 8-byte route distinguisher, then branches per
//! route type into ESI, ethernet tag, MAC/IP, MPLS label, and originating
//! router fields.

mod route_distinguisher;
mod segment_identifier;

use bytes::{Buf, Bytes};
use log::{info, warn};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::ParserError;
use crate::models::{Afi, EvpnRouteType, Nlri, NlriKind, NlriType, Safi};
use crate::parser::ReadUtils;

pub(crate) use segment_identifier::format_mac;

/// Fixed byte count of a MAC/IP advertisement body without the IP address
/// and the optional second label: RD(8) + ESI(10) + tag(4) + mac_len(1) +
/// MAC(6) + ip_len(1) + label(3).
const MAC_IP_FIXED_LEN: usize = 33;

/// Decode every EVPN route in `data` into `out`.
///
/// Each route carries its own length delimiter, so an unknown route type is
/// skipped and iteration continues at the next record.
pub(crate) fn parse_evpn_nlri_list(mut data: Bytes, out: &mut Vec<Nlri>) {
    while data.remaining() >= 2 {
        let (route_type, body) = match next_route(&mut data) {
            Ok(record) => record,
            Err(e) => {
                warn!("EVPN NLRI list ended mid-record: {}", e);
                return;
            }
        };

        let route_type = match EvpnRouteType::try_from(route_type) {
            Ok(t) => t,
            Err(e) => {
                info!("{}, skipping", e);
                continue;
            }
        };

        match parse_evpn_route(route_type, body) {
            Ok(nlri) => out.push(nlri),
            Err(e) => {
                warn!("could not parse EVPN route type {:?}: {}", route_type, e);
            }
        }
    }
}

fn next_route(data: &mut Bytes) -> Result<(u8, Bytes), ParserError> {
    let route_type = data.read_u8()?;
    let len = data.read_u8()? as usize;
    data.has_n_remaining(len)?;
    Ok((route_type, data.split_to(len)))
}

fn parse_evpn_route(route_type: EvpnRouteType, mut body: Bytes) -> Result<Nlri, ParserError> {
    let body_len = body.remaining();
    let nlri_type = match route_type {
        EvpnRouteType::EthernetAutoDiscovery => NlriType::EvpnEthernetAutoDiscovery,
        EvpnRouteType::MacIpAdvertisement => NlriType::EvpnMacIpAdvertisement,
        EvpnRouteType::InclusiveMulticastEthernetTag => {
            NlriType::EvpnInclusiveMulticastEthernetTag
        }
        EvpnRouteType::EthernetSegmentRoute => NlriType::EvpnEthernetSegmentRoute,
    };
    let mut nlri = Nlri::new(Afi::L2vpn, Safi::Evpn, nlri_type);

    let rd = route_distinguisher::parse_route_distinguisher(&mut body)?;
    nlri.push_value(NlriKind::RdType, rd.rd_type.to_string());
    nlri.push_value(
        NlriKind::RdAdministratorSubfield,
        rd.administrator_subfield,
    );
    nlri.push_value(NlriKind::RdAssignedNumber, rd.assigned_number);

    match route_type {
        EvpnRouteType::EthernetAutoDiscovery => {
            let esi = segment_identifier::parse_ethernet_segment_identifier(&mut body)?;
            nlri.push_value(NlriKind::EthernetSegmentIdentifier, esi);
            nlri.push_value(NlriKind::EthernetTagIdHex, read_ethernet_tag(&mut body)?);
            nlri.push_value(NlriKind::MplsLabel1, read_mpls_label(&mut body)?.to_string());
        }
        EvpnRouteType::MacIpAdvertisement => {
            let esi = segment_identifier::parse_ethernet_segment_identifier(&mut body)?;
            nlri.push_value(NlriKind::EthernetSegmentIdentifier, esi);
            nlri.push_value(NlriKind::EthernetTagIdHex, read_ethernet_tag(&mut body)?);

            let mac_len = body.read_u8()?;
            nlri.push_value(NlriKind::MacLen, mac_len.to_string());
            let mut mac = [0u8; 6];
            body.read_exact(&mut mac)?;
            nlri.push_value(NlriKind::Mac, format_mac(&mac));

            let ip_len = body.read_u8()?;
            nlri.push_value(NlriKind::IpLen, ip_len.to_string());
            nlri.push_value(NlriKind::Ip, read_ip(&mut body, ip_len)?);

            nlri.push_value(NlriKind::MplsLabel1, read_mpls_label(&mut body)?.to_string());

            // A second label is present exactly when the record length
            // exceeds the fixed fields plus the IP by one label.
            let label_2 = if body_len - MAC_IP_FIXED_LEN - usize::from(ip_len / 8) == 3 {
                read_mpls_label(&mut body)?
            } else {
                0
            };
            nlri.push_value(NlriKind::MplsLabel2, label_2.to_string());
        }
        EvpnRouteType::InclusiveMulticastEthernetTag => {
            nlri.push_value(NlriKind::EthernetTagIdHex, read_ethernet_tag(&mut body)?);
            let ip_len = body.read_u8()?;
            nlri.push_value(NlriKind::OriginatingRouterIpLen, ip_len.to_string());
            nlri.push_value(NlriKind::OriginatingRouterIp, read_ip(&mut body, ip_len)?);
        }
        EvpnRouteType::EthernetSegmentRoute => {
            let esi = segment_identifier::parse_ethernet_segment_identifier(&mut body)?;
            nlri.push_value(NlriKind::EthernetSegmentIdentifier, esi);
            let ip_len = body.read_u8()?;
            nlri.push_value(NlriKind::OriginatingRouterIpLen, ip_len.to_string());
            nlri.push_value(NlriKind::OriginatingRouterIp, read_ip(&mut body, ip_len)?);
        }
    }

    Ok(nlri)
}

/// 4-byte ethernet tag id, rendered as 8 hex digits.
fn read_ethernet_tag(data: &mut Bytes) -> Result<String, ParserError> {
    let mut tag = [0u8; 4];
    data.read_exact(&mut tag)?;
    Ok(hex::encode(tag))
}

/// 3-byte MPLS label, represented as the big-endian 24-bit value.
fn read_mpls_label(data: &mut Bytes) -> Result<u32, ParserError> {
    let mut label = [0u8; 3];
    data.read_exact(&mut label)?;
    Ok(u32::from(label[0]) << 16 | u32::from(label[1]) << 8 | u32::from(label[2]))
}

/// Read an IP address whose bit length was carried on the wire. Zero-length
/// addresses render as the empty string.
fn read_ip(data: &mut Bytes, ip_len_bits: u8) -> Result<String, ParserError> {
    match ip_len_bits / 8 {
        0 => Ok(String::new()),
        4 => {
            let mut raw = [0u8; 4];
            data.read_exact(&mut raw)?;
            Ok(Ipv4Addr::from(raw).to_string())
        }
        16 => {
            let mut raw = [0u8; 16];
            data.read_exact(&mut raw)?;
            Ok(Ipv6Addr::from(raw).to_string())
        }
        other => Err(ParserError::ParseError(format!(
            "invalid EVPN IP address length: {} bytes",
            other
        ))),
    }
}
