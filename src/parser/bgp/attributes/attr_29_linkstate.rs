//! BGP Link-State attribute and NLRI framing (RFC 7752).
//!
//! Both the attribute and the NLRI are TLV streams. The decoder preserves
//! the framing and hands the payloads through as rendered `type=0xHEX`
//! strings; interpreting individual TLVs is left to downstream consumers.

use bytes::{Buf, Bytes};
use log::warn;

use crate::error::ParserError;
use crate::models::{Afi, Nlri, NlriKind, NlriType, Safi};
use crate::parser::ReadUtils;

/// Parse the link-state attribute (type 29) into one rendered string per
/// TLV.
pub(crate) fn parse_link_state_attribute(mut input: Bytes) -> Result<Vec<String>, ParserError> {
    let mut values = Vec::new();

    while input.remaining() >= 4 {
        let tlv_type = input.read_u16()?;
        let tlv_length = input.read_u16()? as usize;
        if input.remaining() < tlv_length {
            return Err(ParserError::TruncatedMsg(format!(
                "link-state TLV {} claims {} bytes, {} remaining",
                tlv_type,
                tlv_length,
                input.remaining()
            )));
        }
        let tlv_data = input.read_n_bytes(tlv_length)?;
        values.push(format!("{}=0x{}", tlv_type, hex::encode(tlv_data)));
    }

    if input.remaining() > 0 {
        warn!(
            "{} trailing bytes after the last link-state TLV",
            input.remaining()
        );
    }

    Ok(values)
}

/// Decode a link-state NLRI blob: one [Nlri] per top-level TLV, carrying
/// the NLRI type and the raw payload.
pub(crate) fn parse_link_state_nlri_list(mut data: Bytes, safi: Safi, out: &mut Vec<Nlri>) {
    while data.remaining() >= 4 {
        let nlri_type = match data.read_u16() {
            Ok(t) => t,
            Err(_) => return,
        };
        let nlri_length = match data.read_u16() {
            Ok(l) => l as usize,
            Err(_) => return,
        };
        if data.remaining() < nlri_length {
            warn!(
                "link-state NLRI {} claims {} bytes, {} remaining",
                nlri_type,
                nlri_length,
                data.remaining()
            );
            return;
        }
        let payload = data.split_to(nlri_length);

        let mut nlri = Nlri::new(Afi::BgpLs, safi, NlriType::LinkState);
        nlri.push_value(NlriKind::LsNlriType, nlri_type.to_string());
        nlri.push_value(NlriKind::LsNlriData, hex::encode(&payload));
        out.push(nlri);
    }
}
