/*!
Byte-level reading utilities shared by every decoder layer.

All higher layers consume wire bytes exclusively through [ReadUtils]: a
bounds-checked, big-endian reader over [bytes::Bytes]. A failed check
returns [ParserError::TruncatedMsg] instead of advancing, so no decoder can
read past the sub-buffer it was handed even on malformed input.
*/

pub(crate) mod bgp;

use bytes::{Buf, Bytes};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::ParserError;
use crate::models::{Afi, Safi};

pub trait ReadUtils {
    fn has_n_remaining(&self, n: usize) -> Result<(), ParserError>;

    fn read_u8(&mut self) -> Result<u8, ParserError>;

    fn read_u16(&mut self) -> Result<u16, ParserError>;

    fn read_u32(&mut self) -> Result<u32, ParserError>;

    /// Read the next byte without consuming it.
    fn peek_u8(&self) -> Result<u8, ParserError>;

    fn skip_n(&mut self, n_bytes: usize) -> Result<(), ParserError>;

    fn read_exact(&mut self, buffer: &mut [u8]) -> Result<(), ParserError>;

    fn read_n_bytes(&mut self, n_bytes: usize) -> Result<Vec<u8>, ParserError>;

    fn read_ipv4_address(&mut self) -> Result<Ipv4Addr, ParserError>;

    fn read_ipv6_address(&mut self) -> Result<Ipv6Addr, ParserError>;

    fn read_afi(&mut self) -> Result<Afi, ParserError>;

    fn read_safi(&mut self) -> Result<Safi, ParserError>;
}

impl ReadUtils for Bytes {
    fn has_n_remaining(&self, n: usize) -> Result<(), ParserError> {
        if self.remaining() < n {
            return Err(ParserError::TruncatedMsg(format!(
                "not enough bytes to read: want {}, have {}",
                n,
                self.remaining()
            )));
        }
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, ParserError> {
        self.has_n_remaining(1)?;
        Ok(self.get_u8())
    }

    fn read_u16(&mut self) -> Result<u16, ParserError> {
        self.has_n_remaining(2)?;
        Ok(self.get_u16())
    }

    fn read_u32(&mut self) -> Result<u32, ParserError> {
        self.has_n_remaining(4)?;
        Ok(self.get_u32())
    }

    fn peek_u8(&self) -> Result<u8, ParserError> {
        self.has_n_remaining(1)?;
        Ok(self[0])
    }

    fn skip_n(&mut self, n_bytes: usize) -> Result<(), ParserError> {
        self.has_n_remaining(n_bytes)?;
        self.advance(n_bytes);
        Ok(())
    }

    fn read_exact(&mut self, buffer: &mut [u8]) -> Result<(), ParserError> {
        self.has_n_remaining(buffer.len())?;
        self.copy_to_slice(buffer);
        Ok(())
    }

    fn read_n_bytes(&mut self, n_bytes: usize) -> Result<Vec<u8>, ParserError> {
        self.has_n_remaining(n_bytes)?;
        Ok(self.split_to(n_bytes).to_vec())
    }

    fn read_ipv4_address(&mut self) -> Result<Ipv4Addr, ParserError> {
        Ok(Ipv4Addr::from(self.read_u32()?))
    }

    fn read_ipv6_address(&mut self) -> Result<Ipv6Addr, ParserError> {
        let mut buffer = [0u8; 16];
        self.read_exact(&mut buffer)?;
        Ok(Ipv6Addr::from(buffer))
    }

    fn read_afi(&mut self) -> Result<Afi, ParserError> {
        Ok(Afi::try_from(self.read_u16()?)?)
    }

    fn read_safi(&mut self) -> Result<Safi, ParserError> {
        Ok(Safi::try_from(self.read_u8()?)?)
    }
}
