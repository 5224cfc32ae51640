//! Entry store
//!
//! Created once from the resource catalog; the entry count is fixed for the run.

use crate::error::{CoreError, CoreResult};
use crate::types::{AggregateSummary, CatalogEntry, DropKind, DropStats, Entry};

/// Fixed-length entry array; the index is the identity
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Build from a scanned catalog
    #[must_use]
    pub fn new(catalog: Vec<CatalogEntry>) -> Self {
        Self {
            entries: catalog.into_iter().map(Entry::new).collect(),
        }
    }

    /// `len` placeholder entries without images
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self::new((0..len).map(CatalogEntry::placeholder).collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> CoreResult<&Entry> {
        self.entries.get(index).ok_or(CoreError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    fn get_mut(&mut self, index: usize) -> CoreResult<&mut Entry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })
    }

    pub fn classification(&self, index: usize) -> CoreResult<DropKind> {
        self.get(index).map(|e| e.drop)
    }

    pub fn set_classification(&mut self, index: usize, drop: DropKind) -> CoreResult<()> {
        self.get_mut(index)?.drop = drop;
        Ok(())
    }

    /// Overwrite the stats counters (no accumulation)
    pub fn set_stats(&mut self, index: usize, stats: DropStats) -> CoreResult<()> {
        self.get_mut(index)?.stats = stats;
        Ok(())
    }

    /// Recomputed from the raw counters on every call
    pub fn aggregate_summary(&self, index: usize) -> CoreResult<AggregateSummary> {
        self.get(index).map(|e| e.stats.summary())
    }

    /// Reset every classification to `None`
    pub fn reset_classifications(&mut self) {
        for entry in &mut self.entries {
            entry.drop = DropKind::None;
        }
    }

    /// `(index, drop)` of classified entries in index order
    pub fn classified(&self) -> impl Iterator<Item = (usize, DropKind)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.drop.is_none())
            .map(|(i, e)| (i, e.drop))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}
