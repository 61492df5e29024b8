//! SNMP v1/v2c message framing (RFC 1157, RFC 3416).
//!
//! A message is `SEQUENCE { version, community, pdu }`. All request and
//! response PDUs share one layout; GetBulk reuses the error-status and
//! error-index fields for non-repeaters and max-repetitions.

use crate::encoding::{
    primitives::{decode_i32, decode_integer, decode_tlv, encode_integer, expect_tlv},
    reader::Reader,
    tag,
    writer::Writer,
};
use crate::types::{Oid, VarBind};
use crate::{DecodeError, EncodeError};
use alloc::vec::Vec;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnmpVersion {
    V1,
    V2c,
}

impl SnmpVersion {
    pub const fn to_i64(self) -> i64 {
        match self {
            Self::V1 => 0,
            Self::V2c => 1,
        }
    }

    pub const fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::V1),
            1 => Some(Self::V2c),
            _ => None,
        }
    }

    /// GetBulk exists from v2c onwards.
    pub const fn supports_bulk(self) -> bool {
        matches!(self, Self::V2c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PduType {
    GetRequest,
    GetNextRequest,
    Response,
    SetRequest,
    GetBulkRequest,
    InformRequest,
    SnmpV2Trap,
    Report,
}

impl PduType {
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::GetRequest => 0xA0,
            Self::GetNextRequest => 0xA1,
            Self::Response => 0xA2,
            Self::SetRequest => 0xA3,
            Self::GetBulkRequest => 0xA5,
            Self::InformRequest => 0xA6,
            Self::SnmpV2Trap => 0xA7,
            Self::Report => 0xA8,
        }
    }

    /// Maps an identifier octet to a PDU type. The v1 Trap-PDU (`0xA4`) has a
    /// different layout and is not supported.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0xA0 => Some(Self::GetRequest),
            0xA1 => Some(Self::GetNextRequest),
            0xA2 => Some(Self::Response),
            0xA3 => Some(Self::SetRequest),
            0xA5 => Some(Self::GetBulkRequest),
            0xA6 => Some(Self::InformRequest),
            0xA7 => Some(Self::SnmpV2Trap),
            0xA8 => Some(Self::Report),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    NoError,
    TooBig,
    NoSuchName,
    BadValue,
    ReadOnly,
    GenErr,
    NoAccess,
    WrongType,
    WrongLength,
    WrongEncoding,
    WrongValue,
    NoCreation,
    InconsistentValue,
    ResourceUnavailable,
    CommitFailed,
    UndoFailed,
    AuthorizationError,
    NotWritable,
    InconsistentName,
    Unknown(i32),
}

impl ErrorStatus {
    pub const fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::NoError,
            1 => Self::TooBig,
            2 => Self::NoSuchName,
            3 => Self::BadValue,
            4 => Self::ReadOnly,
            5 => Self::GenErr,
            6 => Self::NoAccess,
            7 => Self::WrongType,
            8 => Self::WrongLength,
            9 => Self::WrongEncoding,
            10 => Self::WrongValue,
            11 => Self::NoCreation,
            12 => Self::InconsistentValue,
            13 => Self::ResourceUnavailable,
            14 => Self::CommitFailed,
            15 => Self::UndoFailed,
            16 => Self::AuthorizationError,
            17 => Self::NotWritable,
            18 => Self::InconsistentName,
            v => Self::Unknown(v),
        }
    }

    pub const fn to_i32(self) -> i32 {
        match self {
            Self::NoError => 0,
            Self::TooBig => 1,
            Self::NoSuchName => 2,
            Self::BadValue => 3,
            Self::ReadOnly => 4,
            Self::GenErr => 5,
            Self::NoAccess => 6,
            Self::WrongType => 7,
            Self::WrongLength => 8,
            Self::WrongEncoding => 9,
            Self::WrongValue => 10,
            Self::NoCreation => 11,
            Self::InconsistentValue => 12,
            Self::ResourceUnavailable => 13,
            Self::CommitFailed => 14,
            Self::UndoFailed => 15,
            Self::AuthorizationError => 16,
            Self::NotWritable => 17,
            Self::InconsistentName => 18,
            Self::Unknown(v) => v,
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoError => "noError",
            Self::TooBig => "tooBig",
            Self::NoSuchName => "noSuchName",
            Self::BadValue => "badValue",
            Self::ReadOnly => "readOnly",
            Self::GenErr => "genErr",
            Self::NoAccess => "noAccess",
            Self::WrongType => "wrongType",
            Self::WrongLength => "wrongLength",
            Self::WrongEncoding => "wrongEncoding",
            Self::WrongValue => "wrongValue",
            Self::NoCreation => "noCreation",
            Self::InconsistentValue => "inconsistentValue",
            Self::ResourceUnavailable => "resourceUnavailable",
            Self::CommitFailed => "commitFailed",
            Self::UndoFailed => "undoFailed",
            Self::AuthorizationError => "authorizationError",
            Self::NotWritable => "notWritable",
            Self::InconsistentName => "inconsistentName",
            Self::Unknown(v) => return write!(f, "unknown({v})"),
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdu {
    pub pdu_type: PduType,
    pub request_id: i32,
    pub error_status: i32,
    pub error_index: i32,
    pub varbinds: Vec<VarBind>,
}

impl Pdu {
    fn request(pdu_type: PduType, request_id: i32, oids: &[Oid]) -> Self {
        Self {
            pdu_type,
            request_id,
            error_status: 0,
            error_index: 0,
            varbinds: oids.iter().cloned().map(VarBind::null).collect(),
        }
    }

    pub fn get(request_id: i32, oids: &[Oid]) -> Self {
        Self::request(PduType::GetRequest, request_id, oids)
    }

    pub fn get_next(request_id: i32, oids: &[Oid]) -> Self {
        Self::request(PduType::GetNextRequest, request_id, oids)
    }

    pub fn get_bulk(
        request_id: i32,
        non_repeaters: i32,
        max_repetitions: i32,
        oids: &[Oid],
    ) -> Self {
        Self {
            error_status: non_repeaters,
            error_index: max_repetitions,
            ..Self::request(PduType::GetBulkRequest, request_id, oids)
        }
    }

    pub fn response(request_id: i32, varbinds: Vec<VarBind>) -> Self {
        Self {
            pdu_type: PduType::Response,
            request_id,
            error_status: 0,
            error_index: 0,
            varbinds,
        }
    }

    pub fn status(&self) -> ErrorStatus {
        ErrorStatus::from_i32(self.error_status)
    }

    pub fn non_repeaters(&self) -> i32 {
        self.error_status
    }

    pub fn max_repetitions(&self) -> i32 {
        self.error_index
    }

    pub fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.write_constructed(self.pdu_type.to_u8(), |w| {
            encode_integer(w, tag::INTEGER, self.request_id as i64)?;
            encode_integer(w, tag::INTEGER, self.error_status as i64)?;
            encode_integer(w, tag::INTEGER, self.error_index as i64)?;
            w.write_constructed(tag::SEQUENCE, |w| {
                for varbind in &self.varbinds {
                    varbind.encode(w)?;
                }
                Ok(())
            })
        })
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let (t, body) = decode_tlv(r)?;
        let pdu_type = PduType::from_u8(t).ok_or(DecodeError::Unsupported)?;
        let mut br = Reader::new(body);
        let request_id = decode_i32(expect_tlv(&mut br, tag::INTEGER)?)?;
        let error_status = decode_i32(expect_tlv(&mut br, tag::INTEGER)?)?;
        let error_index = decode_i32(expect_tlv(&mut br, tag::INTEGER)?)?;

        let list = expect_tlv(&mut br, tag::SEQUENCE)?;
        let mut lr = Reader::new(list);
        let mut varbinds = Vec::new();
        while !lr.is_empty() {
            varbinds.push(VarBind::decode(&mut lr)?);
        }

        Ok(Self {
            pdu_type,
            request_id,
            error_status,
            error_index,
            varbinds,
        })
    }
}

/// A community-based SNMP message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub version: SnmpVersion,
    pub community: Vec<u8>,
    pub pdu: Pdu,
}

impl Message {
    pub fn new(version: SnmpVersion, community: &[u8], pdu: Pdu) -> Self {
        Self {
            version,
            community: community.to_vec(),
            pdu,
        }
    }

    pub fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        if self.pdu.pdu_type == PduType::GetBulkRequest && !self.version.supports_bulk() {
            return Err(EncodeError::Message("GetBulk requires SNMPv2c"));
        }
        w.write_constructed(tag::SEQUENCE, |w| {
            encode_integer(w, tag::INTEGER, self.version.to_i64())?;
            w.write_tlv(tag::OCTET_STRING, &self.community)?;
            self.pdu.encode(w)
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut w = Writer::new();
        self.encode(&mut w)?;
        Ok(w.into_vec())
    }

    /// Decodes a message from one datagram. Bytes after the outer SEQUENCE
    /// are ignored.
    pub fn decode(frame: &[u8]) -> Result<Self, DecodeError> {
        let mut r = Reader::new(frame);
        let body = expect_tlv(&mut r, tag::SEQUENCE)?;
        let mut br = Reader::new(body);
        let version = SnmpVersion::from_i64(decode_integer(expect_tlv(&mut br, tag::INTEGER)?)?)
            .ok_or(DecodeError::Unsupported)?;
        let community = expect_tlv(&mut br, tag::OCTET_STRING)?.to_vec();
        let pdu = Pdu::decode(&mut br)?;
        Ok(Self {
            version,
            community,
            pdu,
        })
    }
}
