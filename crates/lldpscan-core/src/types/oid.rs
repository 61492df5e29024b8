use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// A numeric SNMP object identifier.
///
/// Ordering is lexicographic over the arcs, which is the order in which an
/// agent returns a subtree walk (a prefix sorts before its descendants).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Oid {
    arcs: Vec<u32>,
}

impl Oid {
    pub fn new(arcs: Vec<u32>) -> Self {
        Self { arcs }
    }

    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: arcs.to_vec(),
        }
    }

    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// `true` when `prefix` names this OID or one of its ancestors.
    pub fn starts_with(&self, prefix: &Oid) -> bool {
        self.arcs.starts_with(&prefix.arcs)
    }

    /// The arcs that follow `prefix`, or `None` if this OID is outside it.
    pub fn strip_prefix(&self, prefix: &Oid) -> Option<&[u32]> {
        self.arcs.strip_prefix(prefix.arcs.as_slice())
    }

    pub fn child(&self, arc: u32) -> Self {
        let mut arcs = Vec::with_capacity(self.arcs.len() + 1);
        arcs.extend_from_slice(&self.arcs);
        arcs.push(arc);
        Self::new(arcs)
    }
}

impl From<Vec<u32>> for Oid {
    fn from(arcs: Vec<u32>) -> Self {
        Self::new(arcs)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.arcs.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for arc in iter {
                write!(f, ".{arc}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOidError;

impl fmt::Display for ParseOidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid dotted object identifier")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseOidError {}

impl FromStr for Oid {
    type Err = ParseOidError;

    /// Parses dotted notation; a single leading dot (`.1.3.6`) is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('.').unwrap_or(s);
        if s.is_empty() {
            return Err(ParseOidError);
        }
        s.split('.')
            .map(|arc| arc.parse::<u32>().map_err(|_| ParseOidError))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl TryFrom<String> for Oid {
    type Error = ParseOidError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Oid> for String {
    fn from(oid: Oid) -> Self {
        oid.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Oid, ParseOidError};

    #[test]
    fn parses_with_and_without_leading_dot() {
        let a: Oid = "1.3.6.1.2.1.1.1.0".parse().unwrap();
        let b: Oid = ".1.3.6.1.2.1.1.1.0".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.arcs(), &[1, 3, 6, 1, 2, 1, 1, 1, 0]);
        assert_eq!(alloc::format!("{a}"), "1.3.6.1.2.1.1.1.0");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Oid>(), Err(ParseOidError));
        assert_eq!("1.3.x".parse::<Oid>(), Err(ParseOidError));
        assert_eq!("1..3".parse::<Oid>(), Err(ParseOidError));
    }

    #[test]
    fn prefix_helpers() {
        let root: Oid = "1.0.8802.1.1.2.1.4.1".parse().unwrap();
        let cell: Oid = "1.0.8802.1.1.2.1.4.1.1.5.0.3.1".parse().unwrap();
        assert!(cell.starts_with(&root));
        assert_eq!(cell.strip_prefix(&root), Some(&[1, 5, 0, 3, 1][..]));
        assert_eq!(root.strip_prefix(&cell), None);
        assert_eq!(root.child(1).child(5), "1.0.8802.1.1.2.1.4.1.1.5".parse().unwrap());
    }

    #[test]
    fn orders_like_a_walk() {
        let a: Oid = "1.3.6.1.2".parse().unwrap();
        let b: Oid = "1.3.6.1.2.1".parse().unwrap();
        let c: Oid = "1.3.6.1.10".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
    }
}
