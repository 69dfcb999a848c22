//! The output record of one decoded UPDATE message.

use std::collections::BTreeMap;

use crate::models::{AttrEntry, AttrKind, Nlri};

/// Everything decoded from a single UPDATE payload.
///
/// Owned by the caller and cleared at the start of every decode, so one
/// record can be reused across messages. Iteration order over `attrs` is
/// deterministic (keyed by [AttrKind]).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedUpdate {
    /// Announcements, in wire order. MP_REACH routes land here too.
    pub nlri_list: Vec<Nlri>,
    /// Withdrawals, in wire order. MP_UNREACH routes land here too.
    pub withdrawn_nlri_list: Vec<Nlri>,
    pub attrs: BTreeMap<AttrKind, AttrEntry>,
}

impl ParsedUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nlri_list.clear();
        self.withdrawn_nlri_list.clear();
        self.attrs.clear();
    }

    /// An UPDATE with no withdrawals, no attributes, and no NLRI is the
    /// End-of-RIB marker for the initial table transfer.
    pub fn is_end_of_rib(&self) -> bool {
        self.nlri_list.is_empty() && self.withdrawn_nlri_list.is_empty() && self.attrs.is_empty()
    }

    /// Fetch or create the entry for `kind`, stamping name and wire type on
    /// first use.
    pub fn attr_entry(&mut self, kind: AttrKind, official_type: u8) -> &mut AttrEntry {
        self.attrs
            .entry(kind)
            .or_insert_with(|| AttrEntry::new(official_type, kind.name()))
    }

    pub fn attr_values(&self, kind: AttrKind) -> Option<&[String]> {
        self.attrs.get(&kind).map(|e| e.values.as_slice())
    }

    pub fn first_attr_value(&self, kind: AttrKind) -> Option<&str> {
        self.attr_values(kind)
            .and_then(|v| v.first())
            .map(|s| s.as_str())
    }
}
