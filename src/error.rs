/*!
Error types shared by all decoder layers.

Parse failures never cross component boundaries as panics: leaf readers
return a [ParserError], mid-level decoders log it and keep whatever was
already decoded, and the top-level update decoder reports the number of
bytes it consumed.
*/
use crate::models::{Afi, EvpnRouteType, Safi};
use num_enum::TryFromPrimitiveError;
use std::fmt::{Display, Formatter};
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ParserError {
    /// A declared length exceeds the bytes actually available.
    TruncatedMsg(String),
    /// The bytes are well-framed but do not decode to a valid value.
    ParseError(String),
    /// A type selector the decoder recognizes but does not handle.
    Unsupported(String),
}

impl Error for ParserError {}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::TruncatedMsg(s) => write!(f, "Error: {s}"),
            ParserError::ParseError(s) => write!(f, "Error: {s}"),
            ParserError::Unsupported(s) => write!(f, "Error: {s}"),
        }
    }
}

impl From<TryFromPrimitiveError<Afi>> for ParserError {
    fn from(value: TryFromPrimitiveError<Afi>) -> Self {
        ParserError::Unsupported(format!("Unknown AFI type: {}", value.number))
    }
}

impl From<TryFromPrimitiveError<Safi>> for ParserError {
    fn from(value: TryFromPrimitiveError<Safi>) -> Self {
        ParserError::Unsupported(format!("Unknown SAFI type: {}", value.number))
    }
}

impl From<TryFromPrimitiveError<EvpnRouteType>> for ParserError {
    fn from(value: TryFromPrimitiveError<EvpnRouteType>) -> Self {
        ParserError::Unsupported(format!("Unknown EVPN route type: {}", value.number))
    }
}
