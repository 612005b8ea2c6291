use std::collections::BTreeMap;

use crate::domain::ChainId;
use crate::models::ChainTable;

/// Chain -> finalized wide table. Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    tables: BTreeMap<ChainId, ChainTable>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, table: ChainTable) {
        self.tables.insert(table.chain, table);
    }

    pub fn get(&self, chain: ChainId) -> Option<&ChainTable> {
        self.tables.get(&chain)
    }

    pub fn chains(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.tables.keys().copied()
    }

    pub fn tables(&self) -> impl Iterator<Item = &ChainTable> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
