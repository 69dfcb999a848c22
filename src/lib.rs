/*!
# bgp-update-parser

`bgp-update-parser` decodes BGP-4 UPDATE message payloads into a structured,
consumer-friendly representation: withdrawn and announced routes plus a map
of rendered path attributes. It is built for BMP-style route collection,
where the transport layer hands over raw UPDATE payloads together with the
outcome of the peer's capability negotiation.

The decoder is defensive end to end. Every byte is read through a
bounds-checked cursor, every length field is validated against the bytes
actually available, and malformed records are logged and skipped at the
nearest length delimiter instead of failing the whole message.

Supported wire formats:

- the UPDATE envelope and IPv4 unicast NLRI (RFC 4271), with Add-Path
  path identifiers (RFC 7911)
- path attributes: ORIGIN, AS_PATH (with runtime ASN-width detection),
  NEXT_HOP, MED, LOCAL_PREF, ATOMIC_AGGREGATE, AGGREGATOR, ORIGINATOR_ID,
  CLUSTER_LIST, COMMUNITIES (RFC 1997), extended communities (RFC 4360,
  RFC 5701), and the link-state attribute (RFC 7752)
- MP_REACH_NLRI / MP_UNREACH_NLRI (RFC 4760) carrying IPv4/IPv6 unicast,
  multicast, and labeled-unicast prefixes (RFC 8277), EVPN routes
  (RFC 7432), and link-state NLRI
- EVPN route types 1-4 with their route-distinguisher (RFC 4364) and
  ethernet-segment-identifier (RFC 7432 section 5) sub-grammars

Decoding is one-shot and stateless per message; the only cross-message
state is the per-peer capability snapshot the decoder is constructed with.
Rendered field names (`prefix`, `as_path`, `base_attr_hash`, ...) and the
MD5 content-hash feed order are stable external contracts.

## Example

```
use bgp_update_parser::{NlriKind, ParsedUpdate, PeerCapabilities, UpdateParser};

let mut parser = UpdateParser::new(PeerCapabilities::new());
let mut update = ParsedUpdate::new();

// Withdraw 10.0.0.0/8
let consumed = parser.parse_update(&[0x00, 0x02, 0x08, 0x0A, 0x00, 0x00], &mut update);
assert_eq!(consumed, 6);
assert_eq!(
    update.withdrawn_nlri_list[0].first_value(NlriKind::Prefix),
    Some("10.0.0.0"),
);

// An empty UPDATE is the End-of-RIB marker.
parser.parse_update(&[0x00, 0x00, 0x00, 0x00], &mut update);
assert!(update.is_end_of_rib());
```

The crate never blocks, performs no I/O, and borrows input buffers only for
the duration of a call; all output strings are owned by [ParsedUpdate].
One decoder serves one peer: clone capabilities into a second decoder for
concurrent peers.
*/

pub mod error;
pub(crate) mod hasher;
pub mod models;
pub mod parser;

pub use crate::error::ParserError;
pub use crate::models::*;
pub use crate::parser::bgp::update::UpdateParser;
