use crate::encoding::{
    primitives::{decode_oid, expect_tlv, encode_oid},
    reader::Reader,
    tag,
    writer::Writer,
};
use crate::types::{Oid, Value};
use crate::{DecodeError, EncodeError};

/// One (object identifier, value) cell of a request or response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBind {
    pub oid: Oid,
    pub value: Value,
}

impl VarBind {
    pub fn new(oid: Oid, value: Value) -> Self {
        Self { oid, value }
    }

    /// A request varbind: the OID with a NULL placeholder value.
    pub fn null(oid: Oid) -> Self {
        Self::new(oid, Value::Null)
    }

    pub fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.write_constructed(tag::SEQUENCE, |w| {
            encode_oid(w, &self.oid)?;
            self.value.encode(w)
        })
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let body = expect_tlv(r, tag::SEQUENCE)?;
        let mut br = Reader::new(body);
        let oid = decode_oid(expect_tlv(&mut br, tag::OBJECT_IDENTIFIER)?)?;
        let value = Value::decode(&mut br)?;
        if !br.is_empty() {
            return Err(DecodeError::TrailingData);
        }
        Ok(Self { oid, value })
    }
}
