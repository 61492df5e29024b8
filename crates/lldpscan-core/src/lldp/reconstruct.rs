use crate::lldp::display::decode_value;
use crate::lldp::record::{LocalRecord, RemoteRecord};
use crate::lldp::table::OidTable;
use crate::types::{Oid, VarBind};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// How remote cells are grouped into neighbor records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GroupingPolicy {
    /// One record per distinct row index, in first-encounter order.
    #[default]
    IndexSuffix,
    /// Close a record as soon as every required label has been seen.
    Completion,
}

/// Rebuilds local and remote records from flat cell lists.
///
/// Cells that match no binding are dropped and counted.
#[derive(Debug)]
pub struct TableReconstructor<'t> {
    table: &'t OidTable,
    policy: GroupingPolicy,
    unmapped: usize,
}

impl<'t> TableReconstructor<'t> {
    pub fn new(table: &'t OidTable, policy: GroupingPolicy) -> Self {
        Self {
            table,
            policy,
            unmapped: 0,
        }
    }

    /// Cells dropped so far because no binding matched them.
    pub fn unmapped(&self) -> usize {
        self.unmapped
    }

    /// Exception values mean the agent has no such object; the label is left
    /// out rather than rendered.
    pub fn local(&mut self, cells: &[VarBind]) -> LocalRecord {
        let mut record = LocalRecord::default();
        for cell in cells {
            let Some(label) = self.table.local_label(&cell.oid) else {
                self.unmapped += 1;
                continue;
            };
            if cell.value.is_exception() {
                continue;
            }
            record.fields.set(label, decode_value(&cell.value));
        }
        record
    }

    pub fn remote(&mut self, cells: &[VarBind]) -> Vec<RemoteRecord> {
        match self.policy {
            GroupingPolicy::IndexSuffix => self.group_by_index(cells),
            GroupingPolicy::Completion => self.group_by_completion(cells),
        }
    }

    fn group_by_index(&mut self, cells: &[VarBind]) -> Vec<RemoteRecord> {
        let mut records: Vec<RemoteRecord> = Vec::new();
        let mut rows: BTreeMap<Oid, usize> = BTreeMap::new();
        for cell in cells {
            if cell.value.is_exception() {
                continue;
            }
            let Some(column) = self.table.column(&cell.oid) else {
                self.unmapped += 1;
                continue;
            };
            let index = Oid::from_slice(column.index);
            let row = *rows.entry(index.clone()).or_insert_with(|| {
                records.push(RemoteRecord::new(index));
                records.len() - 1
            });
            records[row].fields.set(column.label, decode_value(&cell.value));
        }
        records
    }

    fn group_by_completion(&mut self, cells: &[VarBind]) -> Vec<RemoteRecord> {
        let required = self.table.required();
        let mut records = Vec::new();
        let mut current: Option<RemoteRecord> = None;
        for cell in cells {
            if cell.value.is_exception() {
                continue;
            }
            let Some(column) = self.table.column(&cell.oid) else {
                self.unmapped += 1;
                continue;
            };
            let record =
                current.get_or_insert_with(|| RemoteRecord::new(Oid::from_slice(column.index)));
            record.fields.set(column.label, decode_value(&cell.value));
            if record.is_complete(required) {
                records.extend(current.take());
            }
        }
        // A walk cut short still yields the partial neighbor.
        records.extend(current.take());
        records
    }
}

pub fn collect_local(cells: &[VarBind], table: &OidTable) -> LocalRecord {
    TableReconstructor::new(table, GroupingPolicy::default()).local(cells)
}

pub fn collect_remote(
    cells: &[VarBind],
    table: &OidTable,
    policy: GroupingPolicy,
) -> Vec<RemoteRecord> {
    TableReconstructor::new(table, policy).remote(cells)
}
