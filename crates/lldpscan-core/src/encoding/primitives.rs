use crate::encoding::{
    reader::Reader,
    tag::{self, Header},
    writer::Writer,
};
use crate::types::Oid;
use crate::{DecodeError, EncodeError};
use alloc::vec::Vec;

/// Reads one TLV, returning its tag and content octets.
pub fn decode_tlv<'a>(r: &mut Reader<'a>) -> Result<(u8, &'a [u8]), DecodeError> {
    let header = Header::decode(r)?;
    let content = r.read_exact(header.len)?;
    Ok((header.tag, content))
}

/// Reads one TLV and requires it to carry `expected` as its tag.
pub fn expect_tlv<'a>(r: &mut Reader<'a>, expected: u8) -> Result<&'a [u8], DecodeError> {
    let (tag, content) = decode_tlv(r)?;
    if tag != expected {
        return Err(DecodeError::InvalidTag);
    }
    Ok(content)
}

pub fn encode_integer(w: &mut Writer, tag: u8, value: i64) -> Result<(), EncodeError> {
    let bytes = value.to_be_bytes();
    let mut start = 0;
    // Drop sign-extension octets that the next octet already implies.
    while start < bytes.len() - 1 {
        let redundant = (bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
            || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0);
        if !redundant {
            break;
        }
        start += 1;
    }
    w.write_tlv(tag, &bytes[start..])
}

pub fn decode_integer(content: &[u8]) -> Result<i64, DecodeError> {
    if content.is_empty() || content.len() > 8 {
        return Err(DecodeError::InvalidLength);
    }
    let mut value: i64 = if content[0] & 0x80 != 0 { -1 } else { 0 };
    for &b in content {
        value = (value << 8) | b as i64;
    }
    Ok(value)
}

/// Decodes an INTEGER that must fit in 32 bits (request ids, error fields).
pub fn decode_i32(content: &[u8]) -> Result<i32, DecodeError> {
    i32::try_from(decode_integer(content)?).map_err(|_| DecodeError::InvalidValue)
}

pub fn encode_unsigned(w: &mut Writer, tag: u8, value: u64) -> Result<(), EncodeError> {
    let bytes = value.to_be_bytes();
    let skip = bytes[..bytes.len() - 1]
        .iter()
        .take_while(|b| **b == 0)
        .count();
    let significant = &bytes[skip..];
    if significant[0] & 0x80 != 0 {
        // Keep the value positive in two's complement.
        let mut padded = [0u8; 9];
        padded[1..=significant.len()].copy_from_slice(significant);
        return w.write_tlv(tag, &padded[..=significant.len()]);
    }
    w.write_tlv(tag, significant)
}

/// Decodes an unsigned application value no larger than `max`.
///
/// Agents in the field sometimes omit the positive-sign padding octet on
/// counters, so a set high bit is read as magnitude rather than sign.
pub fn decode_unsigned(content: &[u8], max: u64) -> Result<u64, DecodeError> {
    if content.is_empty() || content.len() > 9 {
        return Err(DecodeError::InvalidLength);
    }
    let skip = content.iter().take_while(|b| **b == 0).count();
    let significant = &content[skip..];
    if significant.len() > 8 {
        return Err(DecodeError::InvalidValue);
    }
    let value = significant
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64);
    if value > max {
        return Err(DecodeError::InvalidValue);
    }
    Ok(value)
}

fn push_base128(out: &mut Vec<u8>, value: u64) {
    let mut groups = [0u8; 10];
    let mut start = groups.len();
    let mut v = value;
    loop {
        start -= 1;
        groups[start] = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            break;
        }
    }
    let last = groups.len() - 1;
    for g in &mut groups[start..last] {
        *g |= 0x80;
    }
    out.extend_from_slice(&groups[start..]);
}

/// Encodes the contents octets of an OBJECT IDENTIFIER.
pub fn oid_content(oid: &Oid) -> Result<Vec<u8>, EncodeError> {
    let arcs = oid.arcs();
    if arcs.len() < 2 || arcs[0] > 2 || (arcs[0] < 2 && arcs[1] >= 40) {
        return Err(EncodeError::InvalidOid);
    }
    let mut out = Vec::with_capacity(arcs.len() + 4);
    push_base128(&mut out, arcs[0] as u64 * 40 + arcs[1] as u64);
    for &arc in &arcs[2..] {
        push_base128(&mut out, arc as u64);
    }
    Ok(out)
}

pub fn encode_oid(w: &mut Writer, oid: &Oid) -> Result<(), EncodeError> {
    let content = oid_content(oid)?;
    w.write_tlv(tag::OBJECT_IDENTIFIER, &content)
}

pub fn decode_oid(content: &[u8]) -> Result<Oid, DecodeError> {
    if content.is_empty() {
        return Err(DecodeError::InvalidLength);
    }

    let mut arcs = Vec::with_capacity(content.len() + 1);
    let mut sub: u64 = 0;
    let mut in_progress = false;
    for &b in content {
        if sub > (u64::MAX >> 7) {
            return Err(DecodeError::InvalidValue);
        }
        sub = (sub << 7) | (b & 0x7F) as u64;
        in_progress = b & 0x80 != 0;
        if in_progress {
            continue;
        }

        if arcs.is_empty() {
            let (first, second) = match sub {
                0..=39 => (0, sub),
                40..=79 => (1, sub - 40),
                _ => (2, sub - 80),
            };
            arcs.push(first);
            arcs.push(u32::try_from(second).map_err(|_| DecodeError::InvalidValue)?);
        } else {
            arcs.push(u32::try_from(sub).map_err(|_| DecodeError::InvalidValue)?);
        }
        sub = 0;
    }

    if in_progress {
        return Err(DecodeError::UnexpectedEof);
    }
    Ok(Oid::new(arcs))
}

#[cfg(test)]
mod tests {
    use super::{
        decode_integer, decode_oid, decode_tlv, decode_unsigned, encode_integer, encode_oid,
        encode_unsigned, oid_content,
    };
    use crate::encoding::{reader::Reader, tag, writer::Writer};
    use crate::types::Oid;
    use crate::{DecodeError, EncodeError};
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn integer_bytes(v: i64) -> Vec<u8> {
        let mut w = Writer::new();
        encode_integer(&mut w, tag::INTEGER, v).unwrap();
        w.into_vec()
    }

    fn unsigned_bytes(v: u64) -> Vec<u8> {
        let mut w = Writer::new();
        encode_unsigned(&mut w, tag::COUNTER64, v).unwrap();
        w.into_vec()
    }

    #[test]
    fn integers_use_minimal_twos_complement() {
        assert_eq!(integer_bytes(0), [0x02, 0x01, 0x00]);
        assert_eq!(integer_bytes(127), [0x02, 0x01, 0x7F]);
        assert_eq!(integer_bytes(128), [0x02, 0x02, 0x00, 0x80]);
        assert_eq!(integer_bytes(-1), [0x02, 0x01, 0xFF]);
        assert_eq!(integer_bytes(-129), [0x02, 0x02, 0xFF, 0x7F]);
    }

    #[test]
    fn unsigned_values_keep_a_positive_sign() {
        assert_eq!(unsigned_bytes(0), [0x46, 0x01, 0x00]);
        assert_eq!(unsigned_bytes(0xFF), [0x46, 0x02, 0x00, 0xFF]);
        assert_eq!(
            unsigned_bytes(u64::MAX),
            [0x46, 0x09, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn unsigned_decode_tolerates_missing_padding() {
        assert_eq!(decode_unsigned(&[0xFF, 0xFF, 0xFF, 0xFF], u32::MAX as u64), Ok(0xFFFF_FFFF));
        assert_eq!(
            decode_unsigned(&[0x01, 0x00, 0x00, 0x00, 0x00], u32::MAX as u64),
            Err(DecodeError::InvalidValue)
        );
    }

    #[test]
    fn lldp_oid_encodes_known_bytes() {
        let oid: Oid = "1.0.8802.1.1.2.1.4.1".parse().unwrap();
        assert_eq!(
            oid_content(&oid).unwrap(),
            [0x28, 0xC4, 0x62, 0x01, 0x01, 0x02, 0x01, 0x04, 0x01]
        );
    }

    #[test]
    fn oid_with_large_first_arcs() {
        let oid = Oid::new(alloc::vec![2, 999, 3]);
        let content = oid_content(&oid).unwrap();
        assert_eq!(content, [0x88, 0x37, 0x03]);
        assert_eq!(decode_oid(&content).unwrap(), oid);
    }

    #[test]
    fn oid_rejects_invalid_roots() {
        assert_eq!(
            oid_content(&Oid::new(alloc::vec![1])).unwrap_err(),
            EncodeError::InvalidOid
        );
        assert_eq!(
            oid_content(&Oid::new(alloc::vec![1, 40])).unwrap_err(),
            EncodeError::InvalidOid
        );
    }

    #[test]
    fn truncated_oid_is_rejected() {
        assert_eq!(decode_oid(&[0x2B, 0x86]).unwrap_err(), DecodeError::UnexpectedEof);
        assert_eq!(decode_oid(&[]).unwrap_err(), DecodeError::InvalidLength);
    }

    #[test]
    fn tlv_reads_content() {
        let mut w = Writer::new();
        encode_oid(&mut w, &"1.3.6.1".parse().unwrap()).unwrap();
        let bytes = w.into_vec();
        let mut r = Reader::new(&bytes);
        let (t, content) = decode_tlv(&mut r).unwrap();
        assert_eq!(t, tag::OBJECT_IDENTIFIER);
        assert_eq!(content, &[0x2B, 0x06, 0x01]);
    }

    proptest! {
        #[test]
        fn integer_roundtrip(v in any::<i64>()) {
            let bytes = integer_bytes(v);
            let mut r = Reader::new(&bytes);
            let (_, content) = decode_tlv(&mut r).unwrap();
            prop_assert_eq!(decode_integer(content).unwrap(), v);
        }

        #[test]
        fn oid_roundtrip(first in 0u32..2, second in 0u32..40, rest in proptest::collection::vec(any::<u32>(), 0..16)) {
            let mut arcs = alloc::vec![first, second];
            arcs.extend(rest);
            let oid = Oid::new(arcs);
            let content = oid_content(&oid).unwrap();
            prop_assert_eq!(decode_oid(&content).unwrap(), oid);
        }
    }
}
