use crate::types::{Value, VarBind};
use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Rendered in place of a value the agent did not supply.
pub const NIL: &str = "<nil>";

/// `true` when fewer than 10% of `bytes` fall outside printable ASCII.
///
/// Newline and carriage return count as printable. An empty slice is
/// printable.
pub fn is_mostly_printable(bytes: &[u8]) -> bool {
    let non_printable = bytes
        .iter()
        .filter(|&&b| !(32..=126).contains(&b) && b != b'\n' && b != b'\r')
        .count();
    bytes.is_empty() || non_printable * 10 < bytes.len()
}

/// The rendered form of one cell.
///
/// Printable octet strings keep their bytes exactly as the agent sent them,
/// whatever their charset. Text views are lossy; the CSV writer takes
/// [`DecodedValue::as_bytes`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(into = "String"))]
pub struct DecodedValue(Vec<u8>);

impl DecodedValue {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The value as `&str` when it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }

    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

impl fmt::Debug for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_str_lossy())
    }
}

impl From<Vec<u8>> for DecodedValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<String> for DecodedValue {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&str> for DecodedValue {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<DecodedValue> for String {
    fn from(value: DecodedValue) -> Self {
        match String::from_utf8(value.0) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl AsRef<[u8]> for DecodedValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<str> for DecodedValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for DecodedValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<[u8]> for DecodedValue {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

/// Renders a value for logs and CSV output. Never fails.
///
/// Octet strings are kept as-is when mostly printable and shown as lowercase
/// hex otherwise, so MAC-style chassis IDs and capability bitmaps stay
/// readable next to system names. Object identifiers carry a leading dot.
pub fn decode_value(value: &Value) -> DecodedValue {
    match value {
        Value::Null | Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => {
            DecodedValue::from(NIL)
        }
        Value::OctetString(bytes) => {
            if is_mostly_printable(bytes) {
                DecodedValue(bytes.clone())
            } else {
                DecodedValue::from(hex::encode(bytes))
            }
        }
        Value::Integer(v) => v.to_string().into(),
        Value::ObjectId(oid) => format!(".{oid}").into(),
        Value::IpAddress([a, b, c, d]) => format!("{a}.{b}.{c}.{d}").into(),
        Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => v.to_string().into(),
        Value::Counter64(v) => v.to_string().into(),
        Value::Opaque(bytes) => format!("{bytes:?}").into(),
    }
}

impl VarBind {
    /// The rendered value of this cell, see [`decode_value`].
    pub fn decoded(&self) -> DecodedValue {
        decode_value(&self.value)
    }
}
