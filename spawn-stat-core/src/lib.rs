//! Artifact Spawn Stat Core Library
//!
//! Provides the platform-independent logic of the investigation route tool:
//! - Entry store with classifications and aggregate drop statistics
//! - Route editing (ordered selection) and keyboard focus chain
//! - Route file and Save/Load encodings
//! - Stats service synchronization
//!
//! Storage, transport and scrolling are abstracted through traits so the
//! front-end injects its own implementations.

pub mod adapters;
pub mod codec;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use adapters::{FileStorage, HttpTransport};
pub use error::{CoreError, CoreResult};
pub use services::{scan_catalog, RemoteSync, RouteSession, StatsUpdate};
pub use state::{EditMode, EntryStore, FocusChain, RouteEditor};
pub use traits::{HttpReply, RouteStore, SaveStore, ScrollContainer, StatsTransport};
