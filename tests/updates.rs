//! End-to-end UPDATE decoding tests built from hand-assembled payloads.

use bgp_update_parser::{
    Afi, AttrKind, NlriKind, NlriType, ParsedUpdate, PeerCapabilities, Safi, UpdateParser,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn four_octet_peer() -> PeerCapabilities {
    let mut peer = PeerCapabilities::new();
    peer.recv_four_octet_asn = true;
    peer.sent_four_octet_asn = true;
    peer
}

/// Wrap attribute and NLRI bytes into an UPDATE payload envelope.
fn build_update(withdrawn: &[u8], attrs: &[u8], nlri: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&(withdrawn.len() as u16).to_be_bytes());
    data.extend_from_slice(withdrawn);
    data.extend_from_slice(&(attrs.len() as u16).to_be_bytes());
    data.extend_from_slice(attrs);
    data.extend_from_slice(nlri);
    data
}

#[test]
fn test_end_of_rib() {
    init_logger();
    let mut parser = UpdateParser::new(PeerCapabilities::new());
    let mut update = ParsedUpdate::new();
    let consumed = parser.parse_update(&[0x00, 0x00, 0x00, 0x00], &mut update);

    assert_eq!(consumed, 4);
    assert!(update.is_end_of_rib());
    assert!(update.attrs.is_empty());
}

#[test]
fn test_single_ipv4_withdraw() {
    let mut parser = UpdateParser::new(PeerCapabilities::new());
    let mut update = ParsedUpdate::new();
    let data = build_update(&[0x08, 0x0A], &[], &[]);
    let consumed = parser.parse_update(&data, &mut update);

    assert_eq!(consumed, data.len());
    assert_eq!(update.withdrawn_nlri_list.len(), 1);
    let nlri = &update.withdrawn_nlri_list[0];
    assert_eq!(nlri.afi, Afi::Ipv4);
    assert_eq!(nlri.safi, Safi::Unicast);
    assert_eq!(nlri.first_value(NlriKind::Prefix), Some("10.0.0.0"));
    assert_eq!(nlri.first_value(NlriKind::PrefixLength), Some("8"));
    assert_eq!(nlri.first_value(NlriKind::PathId), Some("0"));
    assert!(update.nlri_list.is_empty());
    assert!(update.attrs.is_empty());
}

#[test]
fn test_announcement_with_base_attributes() {
    let mut parser = UpdateParser::new(four_octet_peer());
    let mut update = ParsedUpdate::new();

    let attrs: &[u8] = &[
        0x40, 0x01, 0x01, 0x00, // ORIGIN igp
        0x40, 0x02, 0x0A, // AS_PATH, 10 bytes
        0x02, 0x02, // sequence of two
        0x00, 0x00, 0xFD, 0xE9, // AS65001
        0x00, 0x00, 0xFD, 0xEA, // AS65002
        0x40, 0x03, 0x04, 0xC0, 0x00, 0x02, 0x01, // NEXT_HOP 192.0.2.1
    ];
    let data = build_update(&[], attrs, &[0x18, 0xCB, 0x00, 0x71]);
    let consumed = parser.parse_update(&data, &mut update);

    assert_eq!(consumed, data.len());
    assert_eq!(update.first_attr_value(AttrKind::Origin), Some("igp"));
    assert_eq!(
        update.attr_values(AttrKind::AsPath).unwrap(),
        &["65001".to_string(), "65002".to_string()]
    );
    assert_eq!(
        update.first_attr_value(AttrKind::NextHop),
        Some("192.0.2.1")
    );
    assert!(update.first_attr_value(AttrKind::BaseAttrHash).is_some());

    assert_eq!(update.nlri_list.len(), 1);
    let nlri = &update.nlri_list[0];
    assert_eq!(nlri.first_value(NlriKind::Prefix), Some("203.0.113.0"));
    assert_eq!(nlri.first_value(NlriKind::PrefixLength), Some("24"));
}

#[test]
fn test_two_octet_aggregator() {
    let mut parser = UpdateParser::new(four_octet_peer());
    let mut update = ParsedUpdate::new();

    let attrs: &[u8] = &[0xC0, 0x07, 0x06, 0xFD, 0xE8, 0xC0, 0x00, 0x02, 0x0A];
    let data = build_update(&[], attrs, &[]);
    parser.parse_update(&data, &mut update);

    assert_eq!(
        update.first_attr_value(AttrKind::Aggregator),
        Some("65000 192.0.2.10")
    );
}

#[test]
fn test_seven_byte_aggregator_is_discarded() {
    let mut parser = UpdateParser::new(four_octet_peer());
    let mut update = ParsedUpdate::new();

    let attrs: &[u8] = &[0xC0, 0x07, 0x07, 0x00, 0xFD, 0xE8, 0xC0, 0x00, 0x02, 0x0A];
    let data = build_update(&[], attrs, &[]);
    let consumed = parser.parse_update(&data, &mut update);

    assert_eq!(consumed, data.len());
    assert!(update.attr_values(AttrKind::Aggregator).is_none());
}

#[test]
fn test_empty_communities_attribute() {
    let mut parser = UpdateParser::new(four_octet_peer());
    let mut update = ParsedUpdate::new();

    let attrs: &[u8] = &[0xC0, 0x08, 0x00];
    let data = build_update(&[], attrs, &[]);
    parser.parse_update(&data, &mut update);

    let communities = update.attr_values(AttrKind::CommunityList).unwrap();
    assert!(communities.is_empty());
}

#[test]
fn test_community_and_cluster_rendering() {
    let mut parser = UpdateParser::new(four_octet_peer());
    let mut update = ParsedUpdate::new();

    let attrs: &[u8] = &[
        0xC0, 0x08, 0x08, // COMMUNITIES, 2 entries
        0xFD, 0xE8, 0x00, 0x64, // 65000:100
        0xFD, 0xE8, 0x00, 0xC8, // 65000:200
        0x80, 0x09, 0x04, 0x0A, 0x00, 0x00, 0x01, // ORIGINATOR_ID
        0x80, 0x0A, 0x08, // CLUSTER_LIST, 2 ids
        0x0A, 0x00, 0x00, 0x02, 0x0A, 0x00, 0x00, 0x03,
    ];
    let data = build_update(&[], attrs, &[]);
    parser.parse_update(&data, &mut update);

    assert_eq!(
        update.attr_values(AttrKind::CommunityList).unwrap(),
        &["65000:100".to_string(), "65000:200".to_string()]
    );
    assert_eq!(
        update.first_attr_value(AttrKind::OriginatorId),
        Some("10.0.0.1")
    );
    assert_eq!(
        update.attr_values(AttrKind::ClusterList).unwrap(),
        &["10.0.0.2".to_string(), "10.0.0.3".to_string()]
    );
}

#[test]
fn test_as_path_width_detection_latches_two_octet() {
    let mut parser = UpdateParser::new(PeerCapabilities::new());
    let mut update = ParsedUpdate::new();

    let attrs: &[u8] = &[
        0x40, 0x02, 0x08, // AS_PATH, 8 bytes
        0x02, 0x03, // sequence of three
        0x00, 0x01, 0x00, 0x02, 0x00, 0x03, // 2-octet ASNs 1, 2, 3
    ];
    let data = build_update(&[], attrs, &[]);
    parser.parse_update(&data, &mut update);

    assert!(parser.peer().using_2_octet_asn);
    assert!(parser.peer().checked_asn_octet_length);
    assert_eq!(
        update.attr_values(AttrKind::AsPath).unwrap(),
        &["1".to_string(), "2".to_string(), "3".to_string()]
    );
}

#[test]
fn test_evpn_mac_ip_advertisement_via_mp_reach() {
    let mut parser = UpdateParser::new(four_octet_peer());
    let mut update = ParsedUpdate::new();

    let mut evpn_body: Vec<u8> = Vec::new();
    evpn_body.extend_from_slice(&[0x00, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00, 0xC8]); // RD 100:200
    evpn_body.extend_from_slice(&[0u8; 10]); // ESI type 0, all zeros
    evpn_body.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // ethernet tag 0
    evpn_body.push(48);
    evpn_body.extend_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    evpn_body.push(32);
    evpn_body.extend_from_slice(&[10, 1, 1, 1]);
    evpn_body.extend_from_slice(&[0x00, 0x00, 0x64]); // MPLS label 100

    let mut mp_body: Vec<u8> = vec![
        0x00, 0x19, // AFI: L2VPN
        0x46, // SAFI: EVPN
        0x04, 0xC0, 0x00, 0x02, 0xFE, // next hop 192.0.2.254
        0x00, // reserved
    ];
    mp_body.push(2); // EVPN route type 2
    mp_body.push(evpn_body.len() as u8);
    mp_body.extend_from_slice(&evpn_body);

    let mut attrs: Vec<u8> = vec![0x80, 0x0E, mp_body.len() as u8];
    attrs.extend_from_slice(&mp_body);

    let data = build_update(&[], &attrs, &[]);
    let consumed = parser.parse_update(&data, &mut update);
    assert_eq!(consumed, data.len());

    assert_eq!(
        update.first_attr_value(AttrKind::NextHop),
        Some("192.0.2.254")
    );

    assert_eq!(update.nlri_list.len(), 1);
    let nlri = &update.nlri_list[0];
    assert_eq!(nlri.afi, Afi::L2vpn);
    assert_eq!(nlri.safi, Safi::Evpn);
    assert_eq!(nlri.nlri_type, NlriType::EvpnMacIpAdvertisement);
    assert_eq!(nlri.first_value(NlriKind::RdType), Some("0"));
    assert_eq!(
        nlri.first_value(NlriKind::RdAdministratorSubfield),
        Some("100")
    );
    assert_eq!(nlri.first_value(NlriKind::RdAssignedNumber), Some("200"));
    assert_eq!(nlri.first_value(NlriKind::Mac), Some("00:11:22:33:44:55"));
    assert_eq!(nlri.first_value(NlriKind::Ip), Some("10.1.1.1"));
    assert_eq!(nlri.first_value(NlriKind::MplsLabel1), Some("100"));
    assert_eq!(nlri.first_value(NlriKind::MplsLabel2), Some("0"));
}

#[test]
fn test_evpn_withdraw_via_mp_unreach() {
    let mut parser = UpdateParser::new(four_octet_peer());
    let mut update = ParsedUpdate::new();

    let mut evpn_body: Vec<u8> = Vec::new();
    evpn_body.extend_from_slice(&[0x00, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00, 0xC8]);
    evpn_body.extend_from_slice(&[0x00, 0x00, 0x00, 0x07]); // ethernet tag
    evpn_body.push(32);
    evpn_body.extend_from_slice(&[198, 51, 100, 7]);

    let mut mp_body: Vec<u8> = vec![0x00, 0x19, 0x46];
    mp_body.push(3); // inclusive multicast ethernet tag route
    mp_body.push(evpn_body.len() as u8);
    mp_body.extend_from_slice(&evpn_body);

    let mut attrs: Vec<u8> = vec![0x80, 0x0F, mp_body.len() as u8];
    attrs.extend_from_slice(&mp_body);

    let data = build_update(&[], &attrs, &[]);
    parser.parse_update(&data, &mut update);

    assert!(update.nlri_list.is_empty());
    assert_eq!(update.withdrawn_nlri_list.len(), 1);
    let nlri = &update.withdrawn_nlri_list[0];
    assert_eq!(
        nlri.nlri_type,
        NlriType::EvpnInclusiveMulticastEthernetTag
    );
    assert_eq!(
        nlri.first_value(NlriKind::OriginatingRouterIp),
        Some("198.51.100.7")
    );
    assert_eq!(
        nlri.first_value(NlriKind::EthernetTagIdHex),
        Some("00000007")
    );
}

#[test]
fn test_add_path_announcement() {
    let mut peer = four_octet_peer();
    peer.enable_add_path(Afi::Ipv4, Safi::Unicast);
    let mut parser = UpdateParser::new(peer);
    let mut update = ParsedUpdate::new();

    let nlri: &[u8] = &[0x00, 0x00, 0x00, 0x2A, 0x18, 0xC0, 0x00, 0x02];
    let data = build_update(&[], &[], nlri);
    parser.parse_update(&data, &mut update);

    assert_eq!(update.nlri_list.len(), 1);
    assert_eq!(
        update.nlri_list[0].first_value(NlriKind::PathId),
        Some("42")
    );
    assert_eq!(
        update.nlri_list[0].first_value(NlriKind::Prefix),
        Some("192.0.2.0")
    );
}

#[test]
fn test_route_hash_is_stable_across_messages() {
    let mut parser = UpdateParser::new(PeerCapabilities::new());

    let mut withdrawn = ParsedUpdate::new();
    parser.parse_update(&build_update(&[0x18, 0xC0, 0x00, 0x02], &[], &[]), &mut withdrawn);

    let mut announced = ParsedUpdate::new();
    parser.parse_update(&build_update(&[], &[], &[0x18, 0xC0, 0x00, 0x02]), &mut announced);

    // Same (peer, path-id, prefix) tuple, same hash, announce or withdraw.
    assert_eq!(
        withdrawn.withdrawn_nlri_list[0].first_value(NlriKind::Hash),
        announced.nlri_list[0].first_value(NlriKind::Hash)
    );
}

#[test]
fn test_bytes_consumed_never_exceeds_input() {
    // Fuzz-shaped regression inputs: arbitrary prefixes of a valid message.
    let mut parser = UpdateParser::new(PeerCapabilities::new());
    let attrs: &[u8] = &[0x40, 0x01, 0x01, 0x00, 0x40, 0x03, 0x04, 0x0A, 0x00, 0x00, 0x01];
    let full = build_update(&[0x08, 0x0A], attrs, &[0x18, 0xCB, 0x00, 0x71]);

    for cut in 0..full.len() {
        let mut update = ParsedUpdate::new();
        let consumed = parser.parse_update(&full[..cut], &mut update);
        assert!(consumed <= cut);
    }
}
