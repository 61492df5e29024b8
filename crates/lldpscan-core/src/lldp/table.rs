use crate::lldp::profile::TableProfile;
use crate::types::Oid;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// A remote cell split into its column label and row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    pub label: &'a str,
    /// Index suffix, already truncated to the table's `index_len`.
    pub index: &'a [u32],
}

/// Read-only lookup structure compiled from a [`TableProfile`].
#[derive(Debug, Clone)]
pub struct OidTable {
    local: BTreeMap<Oid, String>,
    local_oids: Vec<Oid>,
    columns: BTreeMap<Vec<u32>, String>,
    shortest_column: usize,
    longest_column: usize,
    roots: Vec<Oid>,
    index_len: Option<usize>,
    required: Vec<String>,
}

impl OidTable {
    pub fn new(profile: &TableProfile) -> Self {
        let mut local = BTreeMap::new();
        let mut local_oids = Vec::with_capacity(profile.local.len());
        for binding in &profile.local {
            if local
                .insert(binding.oid.clone(), binding.label.clone())
                .is_none()
            {
                local_oids.push(binding.oid.clone());
            }
        }

        let mut columns = BTreeMap::new();
        let mut required = Vec::new();
        for binding in &profile.remote_columns {
            columns.insert(binding.oid.arcs().to_vec(), binding.label.clone());
            if !required.contains(&binding.label) {
                required.push(binding.label.clone());
            }
        }
        if let Some(explicit) = &profile.required {
            required = explicit.clone();
        }

        let shortest_column = columns.keys().map(Vec::len).min().unwrap_or(0);
        let longest_column = columns.keys().map(Vec::len).max().unwrap_or(0);

        Self {
            local,
            local_oids,
            columns,
            shortest_column,
            longest_column,
            roots: profile.remote_roots.clone(),
            index_len: profile.index_len,
            required,
        }
    }

    /// Local identifiers in profile order, without duplicates.
    pub fn local_oids(&self) -> &[Oid] {
        &self.local_oids
    }

    pub fn remote_roots(&self) -> &[Oid] {
        &self.roots
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Exact-match label for a local scalar.
    pub fn local_label(&self, oid: &Oid) -> Option<&str> {
        self.local.get(oid).map(String::as_str)
    }

    /// Longest-prefix match of `oid` against the remote columns.
    pub fn column<'a>(&'a self, oid: &'a Oid) -> Option<Column<'a>> {
        let arcs = oid.arcs();
        if self.columns.is_empty() || arcs.len() < self.shortest_column {
            return None;
        }
        let longest = self.longest_column.min(arcs.len());
        (self.shortest_column..=longest).rev().find_map(|n| {
            self.columns.get(&arcs[..n]).map(|label| {
                let suffix = &arcs[n..];
                let index = match self.index_len {
                    Some(len) => &suffix[..len.min(suffix.len())],
                    None => suffix,
                };
                Column {
                    label: label.as_str(),
                    index,
                }
            })
        })
    }
}

impl Default for OidTable {
    fn default() -> Self {
        Self::new(&TableProfile::default())
    }
}

impl From<&TableProfile> for OidTable {
    fn from(profile: &TableProfile) -> Self {
        Self::new(profile)
    }
}
