//! Type definitions

mod config;
mod drop_kind;
mod entry;
mod wire;

pub use config::{StorageConfig, SyncConfig};
pub use drop_kind::DropKind;
pub use entry::{AggregateSummary, CatalogEntry, DropStats, Entry};
pub use wire::{DropPair, StatsResponse, StatsRow, SubmitRequest, SubmitResponse};
