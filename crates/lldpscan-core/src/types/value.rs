use crate::encoding::{
    primitives::{
        decode_integer, decode_oid, decode_tlv, decode_unsigned, encode_integer, encode_oid,
        encode_unsigned,
    },
    reader::Reader,
    tag,
    writer::Writer,
};
use crate::types::Oid;
use crate::{DecodeError, EncodeError};
use alloc::vec::Vec;

/// The typed payload of one varbind.
///
/// `NoSuchObject`, `NoSuchInstance` and `EndOfMibView` are the SNMPv2
/// exception markers an agent returns in place of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Integer(i64),
    OctetString(Vec<u8>),
    ObjectId(Oid),
    IpAddress([u8; 4]),
    Counter32(u32),
    Gauge32(u32),
    TimeTicks(u32),
    Opaque(Vec<u8>),
    Counter64(u64),
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

impl Value {
    /// `true` for the varbind exception markers.
    pub const fn is_exception(&self) -> bool {
        matches!(
            self,
            Self::NoSuchObject | Self::NoSuchInstance | Self::EndOfMibView
        )
    }

    /// `true` when the agent supplied no actual value.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Null) || self.is_exception()
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::OctetString(_) => "OCTET STRING",
            Self::ObjectId(_) => "OBJECT IDENTIFIER",
            Self::IpAddress(_) => "IpAddress",
            Self::Counter32(_) => "Counter32",
            Self::Gauge32(_) => "Gauge32",
            Self::TimeTicks(_) => "TimeTicks",
            Self::Opaque(_) => "Opaque",
            Self::Counter64(_) => "Counter64",
            Self::NoSuchObject => "noSuchObject",
            Self::NoSuchInstance => "noSuchInstance",
            Self::EndOfMibView => "endOfMibView",
        }
    }

    pub fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        match self {
            Self::Null => w.write_tlv(tag::NULL, &[]),
            Self::Integer(v) => encode_integer(w, tag::INTEGER, *v),
            Self::OctetString(bytes) => w.write_tlv(tag::OCTET_STRING, bytes),
            Self::ObjectId(oid) => encode_oid(w, oid),
            Self::IpAddress(octets) => w.write_tlv(tag::IP_ADDRESS, octets),
            Self::Counter32(v) => encode_unsigned(w, tag::COUNTER32, *v as u64),
            Self::Gauge32(v) => encode_unsigned(w, tag::GAUGE32, *v as u64),
            Self::TimeTicks(v) => encode_unsigned(w, tag::TIMETICKS, *v as u64),
            Self::Opaque(bytes) => w.write_tlv(tag::OPAQUE, bytes),
            Self::Counter64(v) => encode_unsigned(w, tag::COUNTER64, *v),
            Self::NoSuchObject => w.write_tlv(tag::NO_SUCH_OBJECT, &[]),
            Self::NoSuchInstance => w.write_tlv(tag::NO_SUCH_INSTANCE, &[]),
            Self::EndOfMibView => w.write_tlv(tag::END_OF_MIB_VIEW, &[]),
        }
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let (t, content) = decode_tlv(r)?;
        let u32_max = u32::MAX as u64;
        let value = match t {
            tag::NULL => Self::Null,
            tag::INTEGER => Self::Integer(decode_integer(content)?),
            tag::OCTET_STRING => Self::OctetString(content.to_vec()),
            tag::OBJECT_IDENTIFIER => Self::ObjectId(decode_oid(content)?),
            tag::IP_ADDRESS => {
                let octets: [u8; 4] = content.try_into().map_err(|_| DecodeError::InvalidLength)?;
                Self::IpAddress(octets)
            }
            tag::COUNTER32 => Self::Counter32(decode_unsigned(content, u32_max)? as u32),
            tag::GAUGE32 => Self::Gauge32(decode_unsigned(content, u32_max)? as u32),
            tag::TIMETICKS => Self::TimeTicks(decode_unsigned(content, u32_max)? as u32),
            tag::OPAQUE => Self::Opaque(content.to_vec()),
            tag::COUNTER64 => Self::Counter64(decode_unsigned(content, u64::MAX)?),
            tag::NO_SUCH_OBJECT => Self::NoSuchObject,
            tag::NO_SUCH_INSTANCE => Self::NoSuchInstance,
            tag::END_OF_MIB_VIEW => Self::EndOfMibView,
            _ => return Err(DecodeError::InvalidTag),
        };

        let empty_expected = matches!(
            t,
            tag::NULL | tag::NO_SUCH_OBJECT | tag::NO_SUCH_INSTANCE | tag::END_OF_MIB_VIEW
        );
        if empty_expected && !content.is_empty() {
            return Err(DecodeError::InvalidLength);
        }
        Ok(value)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::OctetString(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::OctetString(bytes.to_vec())
    }
}
