use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};

pub const INTEGER: u8 = 0x02;
pub const OCTET_STRING: u8 = 0x04;
pub const NULL: u8 = 0x05;
pub const OBJECT_IDENTIFIER: u8 = 0x06;
pub const SEQUENCE: u8 = 0x30;

// SNMPv2-SMI application types.
pub const IP_ADDRESS: u8 = 0x40;
pub const COUNTER32: u8 = 0x41;
pub const GAUGE32: u8 = 0x42;
pub const TIMETICKS: u8 = 0x43;
pub const OPAQUE: u8 = 0x44;
pub const COUNTER64: u8 = 0x46;

// Varbind exceptions (RFC 3416).
pub const NO_SUCH_OBJECT: u8 = 0x80;
pub const NO_SUCH_INSTANCE: u8 = 0x81;
pub const END_OF_MIB_VIEW: u8 = 0x82;

/// Longest definite length we accept, in length octets.
const MAX_LENGTH_OCTETS: usize = 4;

/// A BER identifier octet plus its definite length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub tag: u8,
    pub len: usize,
}

impl Header {
    pub fn encode(self, w: &mut Writer) -> Result<(), EncodeError> {
        w.write_u8(self.tag)?;
        if self.len < 0x80 {
            return w.write_u8(self.len as u8);
        }

        let bytes = (self.len as u64).to_be_bytes();
        let skip = bytes.iter().take_while(|b| **b == 0).count();
        let octets = &bytes[skip..];
        if octets.len() > MAX_LENGTH_OCTETS {
            return Err(EncodeError::InvalidLength);
        }
        w.write_u8(0x80 | octets.len() as u8)?;
        w.write_all(octets)
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let tag = r.read_u8()?;
        // High-tag-number form never appears in SNMP.
        if tag & 0x1F == 0x1F {
            return Err(DecodeError::InvalidTag);
        }

        let first = r.read_u8()?;
        if first & 0x80 == 0 {
            return Ok(Self {
                tag,
                len: first as usize,
            });
        }

        let count = (first & 0x7F) as usize;
        if count == 0 || count > MAX_LENGTH_OCTETS {
            // Indefinite form (count == 0) is not allowed in SNMP.
            return Err(DecodeError::InvalidLength);
        }
        let mut len = 0usize;
        for &b in r.read_exact(count)? {
            len = (len << 8) | b as usize;
        }
        Ok(Self { tag, len })
    }
}
