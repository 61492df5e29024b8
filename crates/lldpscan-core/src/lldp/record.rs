use crate::lldp::display::DecodedValue;
use crate::types::Oid;
use alloc::string::String;
use alloc::vec::Vec;

/// Label to rendered value, in first-set order. Serializes as a list of
/// `[label, value]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Fields {
    entries: Vec<(String, DecodedValue)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `label`, replacing an earlier value in place.
    pub fn set(&mut self, label: &str, value: DecodedValue) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((String::from(label), value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&DecodedValue> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DecodedValue)> + '_ {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(l, _)| l.as_str())
    }
}

/// The polled device's own identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocalRecord {
    pub fields: Fields,
}

impl LocalRecord {
    pub fn get(&self, label: &str) -> Option<&DecodedValue> {
        self.fields.get(label)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One neighbor reconstructed from the remote table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RemoteRecord {
    /// Row index suffix of the first cell that contributed to this record.
    pub index: Oid,
    pub fields: Fields,
}

impl RemoteRecord {
    pub fn new(index: Oid) -> Self {
        Self {
            index,
            fields: Fields::new(),
        }
    }

    pub fn get(&self, label: &str) -> Option<&DecodedValue> {
        self.fields.get(label)
    }

    /// `true` when every label in `required` has a value.
    pub fn is_complete(&self, required: &[String]) -> bool {
        required.iter().all(|label| self.fields.contains(label))
    }
}

#[cfg(test)]
mod tests {
    use super::{Fields, RemoteRecord};
use crate::types::Oid;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn set_overwrites_in_place() {
        let mut fields = Fields::new();
        fields.set("a", "1".into());
        fields.set("b", "2".into());
        fields.set("a", "3".into());
        let pairs: Vec<_> = fields.iter().map(|(l, v)| (l, v.as_bytes())).collect();
        assert_eq!(pairs, vec![("a", &b"3"[..]), ("b", &b"2"[..])]);
    }

    #[test]
    fn completeness_checks_every_required_label() {
        let mut record = RemoteRecord::new(Oid::from_slice(&[0, 1, 1]));
        let required: Vec<String> = vec!["x".into(), "y".into()];
        record.fields.set("x", "1".into());
        assert!(!record.is_complete(&required));
        record.fields.set("y", "".into());
        assert!(record.is_complete(&required));
        assert!(record.is_complete(&[]));
    }
}
