//! Path-attribute iteration and dispatch.
//!
//! Walks the attribute buffer of one UPDATE, dispatching each attribute to
//! its decoder and appending rendered values into the parsed update. A
//! single MD5 digest accumulates the hash-relevant attribute values in
//! parse order; its hex rendering is stored as the `base_attr_hash`
//! attribute once the buffer is exhausted.

mod attr_01_origin;
mod attr_02_17_as_path;
mod attr_03_next_hop;
mod attr_04_med;
mod attr_05_local_pref;
mod attr_07_aggregator;
mod attr_08_communities;
mod attr_09_originator;
mod attr_10_cluster;
mod attr_14_15_nlri;
mod attr_16_25_extended_communities;
mod attr_29_linkstate;

use bytes::{Buf, Bytes};
use log::{debug, info, warn};
use md5::{Digest, Md5};

use crate::hasher;
use crate::models::{AttrFlags, AttrKind, AttrType, ParsedUpdate, PeerCapabilities};
use crate::parser::ReadUtils;

use attr_01_origin::parse_origin;
use attr_02_17_as_path::parse_as_path;
use attr_03_next_hop::parse_next_hop;
use attr_04_med::parse_med;
use attr_05_local_pref::parse_local_pref;
use attr_07_aggregator::parse_aggregator;
use attr_08_communities::parse_communities;
use attr_09_originator::parse_originator_id;
use attr_10_cluster::parse_clusters;
use attr_14_15_nlri::{parse_mp_reach_nlri, parse_mp_unreach_nlri};
use attr_16_25_extended_communities::{
    parse_extended_communities, parse_ipv6_extended_communities,
};
use attr_29_linkstate::parse_link_state_attribute;

/// Parse the contiguous attribute buffer of one UPDATE message.
///
/// Each attribute is length-delimited, so a decoder failure discards that
/// attribute and iteration continues; only a length overrunning the buffer
/// aborts the remainder.
pub(crate) fn parse_attributes(
    mut data: Bytes,
    peer: &mut PeerCapabilities,
    update: &mut ParsedUpdate,
) {
    if data.is_empty() {
        return;
    }
    if data.remaining() < 3 {
        warn!(
            "cannot parse the attributes, the buffer is too short: len={}",
            data.remaining()
        );
        return;
    }

    let mut hash = Md5::new();

    while data.remaining() >= 3 {
        let flags = match data.read_u8() {
            Ok(byte) => AttrFlags::from_bits_retain(byte),
            Err(_) => break,
        };
        let attr_type = match data.read_u8() {
            Ok(byte) => byte,
            Err(_) => break,
        };
        let attr_len = if flags.contains(AttrFlags::EXTENDED) {
            match data.read_u16() {
                Ok(len) => len as usize,
                Err(_) => break,
            }
        } else {
            match data.read_u8() {
                Ok(len) => len as usize,
                Err(_) => break,
            }
        };

        debug!("reading attribute: type -- {}, length -- {}", attr_type, attr_len);

        if attr_len > data.remaining() {
            warn!(
                "attribute data len of {} is larger than available data of {}",
                attr_len,
                data.remaining()
            );
            return;
        }
        let attr_data = data.split_to(attr_len);

        if let Some(peer_hash_str) = &peer.peer_hash_str {
            hash.update(peer_hash_str.as_bytes());
        }

        parse_attr_data(AttrType::from(attr_type), attr_data, peer, update, &mut hash);
    }

    let entry = update.attr_entry(AttrKind::BaseAttrHash, 0);
    entry.values = vec![hasher::finalize_hex(hash)];
}

fn parse_attr_data(
    attr_type: AttrType,
    attr_data: Bytes,
    peer: &mut PeerCapabilities,
    update: &mut ParsedUpdate,
    hash: &mut Md5,
) {
    match attr_type {
        AttrType::ORIGIN => match parse_origin(attr_data) {
            Ok(origin) => {
                let entry = update.attr_entry(AttrKind::Origin, AttrType::ORIGIN.into());
                entry.values.push(origin.to_string());
                hasher::update_values(hash, &entry.values);
            }
            Err(e) => warn!("could not parse ORIGIN: {}", e),
        },

        AttrType::AS_PATH => {
            let long_enough = attr_data.remaining() >= 4;
            match parse_as_path(attr_data, peer) {
                Ok(values) if long_enough => {
                    let entry = update.attr_entry(AttrKind::AsPath, AttrType::AS_PATH.into());
                    entry.values.extend(values);
                    hasher::update_values(hash, &entry.values);
                }
                Ok(_) => {}
                Err(e) => warn!("could not parse AS_PATH: {}", e),
            }
        }

        AttrType::NEXT_HOP => match parse_next_hop(attr_data) {
            Ok(next_hop) => {
                let entry = update.attr_entry(AttrKind::NextHop, AttrType::NEXT_HOP.into());
                entry.values = vec![next_hop];
                hasher::update_values(hash, &entry.values);
            }
            Err(e) => warn!("could not parse NEXT_HOP: {}", e),
        },

        AttrType::MULTI_EXIT_DISCRIMINATOR => match parse_med(attr_data) {
            Ok(med) => {
                let entry =
                    update.attr_entry(AttrKind::Med, AttrType::MULTI_EXIT_DISCRIMINATOR.into());
                entry.values = vec![med];
                hasher::update_values(hash, &entry.values);
            }
            Err(e) => warn!("could not parse MED: {}", e),
        },

        AttrType::LOCAL_PREFERENCE => match parse_local_pref(attr_data) {
            Ok(pref) => {
                let entry =
                    update.attr_entry(AttrKind::LocalPref, AttrType::LOCAL_PREFERENCE.into());
                entry.values = vec![pref];
                hasher::update_values(hash, &entry.values);
            }
            Err(e) => warn!("could not parse LOCAL_PREF: {}", e),
        },

        AttrType::ATOMIC_AGGREGATE => {
            let entry =
                update.attr_entry(AttrKind::AtomicAggregate, AttrType::ATOMIC_AGGREGATE.into());
            entry.values = vec!["1".to_string()];
        }

        AttrType::AGGREGATOR => match parse_aggregator(attr_data) {
            Ok(aggregator) => {
                let entry = update.attr_entry(AttrKind::Aggregator, AttrType::AGGREGATOR.into());
                entry.values = vec![aggregator];
                hasher::update_values(hash, &entry.values);
            }
            Err(e) => warn!("could not parse AGGREGATOR: {}", e),
        },

        AttrType::ORIGINATOR_ID => match parse_originator_id(attr_data) {
            Ok(originator) => {
                let entry =
                    update.attr_entry(AttrKind::OriginatorId, AttrType::ORIGINATOR_ID.into());
                entry.values = vec![originator];
            }
            Err(e) => warn!("could not parse ORIGINATOR_ID: {}", e),
        },

        AttrType::CLUSTER_LIST => match parse_clusters(attr_data) {
            Ok(clusters) => {
                let entry =
                    update.attr_entry(AttrKind::ClusterList, AttrType::CLUSTER_LIST.into());
                entry.values.extend(clusters);
            }
            Err(e) => warn!("could not parse CLUSTER_LIST: {}", e),
        },

        AttrType::COMMUNITIES => match parse_communities(attr_data) {
            Ok(communities) => {
                let entry =
                    update.attr_entry(AttrKind::CommunityList, AttrType::COMMUNITIES.into());
                entry.values.extend(communities);
                hasher::update_values(hash, &entry.values);
            }
            Err(e) => warn!("could not parse COMMUNITIES: {}", e),
        },

        AttrType::EXTENDED_COMMUNITIES => match parse_extended_communities(attr_data) {
            Ok(communities) => {
                let entry = update
                    .attr_entry(AttrKind::ExtCommunityList, AttrType::EXTENDED_COMMUNITIES.into());
                entry.values.extend(communities);
                hasher::update_values(hash, &entry.values);
            }
            Err(e) => warn!("could not parse EXTENDED_COMMUNITIES: {}", e),
        },

        AttrType::IPV6_ADDRESS_SPECIFIC_EXTENDED_COMMUNITIES => {
            match parse_ipv6_extended_communities(attr_data) {
                Ok(communities) => {
                    let entry = update.attr_entry(
                        AttrKind::Ipv6ExtCommunityList,
                        AttrType::IPV6_ADDRESS_SPECIFIC_EXTENDED_COMMUNITIES.into(),
                    );
                    entry.values.extend(communities);
                }
                Err(e) => warn!("could not parse IPv6 extended communities: {}", e),
            }
        }

        AttrType::MP_REACHABLE_NLRI => {
            if let Err(e) = parse_mp_reach_nlri(attr_data, peer, update) {
                info!("skipping MP_REACH_NLRI: {}", e);
            }
        }

        AttrType::MP_UNREACHABLE_NLRI => {
            if let Err(e) = parse_mp_unreach_nlri(attr_data, peer, update) {
                info!("skipping MP_UNREACH_NLRI: {}", e);
            }
        }

        AttrType::BGP_LS_ATTRIBUTE => match parse_link_state_attribute(attr_data) {
            Ok(values) => {
                let entry =
                    update.attr_entry(AttrKind::LinkState, AttrType::BGP_LS_ATTRIBUTE.into());
                entry.values.extend(values);
            }
            Err(e) => warn!("could not parse link-state attribute: {}", e),
        },

        AttrType::AS4_PATH | AttrType::AS4_AGGREGATOR => {
            debug!("attribute type {:?} is not decoded, skipping", attr_type);
        }

        // Deprecated, recognized so it does not log as unknown.
        AttrType::AS_PATHLIMIT => {}

        other => {
            info!(
                "attribute type {:?} is not implemented or intentionally ignored, skipping",
                other
            );
        }
    }
}
