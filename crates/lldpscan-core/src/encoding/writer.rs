use crate::encoding::tag::Header;
use crate::EncodeError;
use alloc::vec::Vec;

/// Largest SNMP message that fits in a single UDP datagram.
pub const MAX_MESSAGE_LEN: usize = 65_507;

/// Growable output buffer with a hard size limit.
///
/// BER needs the length of constructed values before their contents, so
/// nested values are encoded into a child writer first (see
/// [`Writer::write_constructed`]).
#[derive(Debug)]
pub struct Writer {
    buf: Vec<u8>,
    limit: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    pub fn new() -> Self {
        Self::with_limit(MAX_MESSAGE_LEN)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            buf: Vec::new(),
            limit,
        }
    }

    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.buf.len())
    }

    pub fn as_written(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        if self.remaining() < 1 {
            return Err(EncodeError::MessageTooLarge);
        }
        self.buf.push(value);
        Ok(())
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        if self.remaining() < data.len() {
            return Err(EncodeError::MessageTooLarge);
        }
        self.buf.extend_from_slice(data);
        Ok(())
    }

    /// Writes a complete primitive TLV.
    pub fn write_tlv(&mut self, tag: u8, content: &[u8]) -> Result<(), EncodeError> {
        Header {
            tag,
            len: content.len(),
        }
        .encode(self)?;
        self.write_all(content)
    }

    /// Encodes `body` into a child writer and emits it wrapped in `tag`.
    pub fn write_constructed<F>(&mut self, tag: u8, body: F) -> Result<(), EncodeError>
    where
        F: FnOnce(&mut Writer) -> Result<(), EncodeError>,
    {
        let mut inner = Writer::with_limit(self.remaining());
        body(&mut inner)?;
        self.write_tlv(tag, inner.as_written())
    }
}

#[cfg(test)]
mod tests {
    use super::Writer;
    use crate::EncodeError;

    #[test]
    fn writer_writes_values() {
        let mut w = Writer::with_limit(4);
        w.write_u8(1).unwrap();
        w.write_all(&[2, 3]).unwrap();
        assert_eq!(w.as_written(), &[1, 2, 3]);
    }

    #[test]
    fn writer_bounds() {
        let mut w = Writer::with_limit(1);
        w.write_u8(1).unwrap();
        assert_eq!(w.write_u8(2).unwrap_err(), EncodeError::MessageTooLarge);
    }

    #[test]
    fn constructed_values_carry_their_length() {
        let mut w = Writer::new();
        w.write_constructed(0x30, |w| {
            w.write_tlv(0x04, b"ab")?;
            w.write_tlv(0x05, &[])
        })
        .unwrap();
        assert_eq!(w.as_written(), &[0x30, 0x06, 0x04, 0x02, b'a', b'b', 0x05, 0x00]);
    }

    #[test]
    fn constructed_values_respect_the_parent_limit() {
        let mut w = Writer::with_limit(4);
        let err = w
            .write_constructed(0x30, |w| w.write_tlv(0x04, b"abcd"))
            .unwrap_err();
        assert_eq!(err, EncodeError::MessageTooLarge);
    }
}
