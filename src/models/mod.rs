//! Output data model of the decoder: address families, attribute and NLRI
//! records, and the per-peer capability snapshot.

mod afi;
mod attributes;
mod capabilities;
mod nlri;
mod update;

pub use afi::*;
pub use attributes::*;
pub use capabilities::*;
pub use nlri::*;
pub use update::*;
