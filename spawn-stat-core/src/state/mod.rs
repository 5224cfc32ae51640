//! In-memory state: entry store, route editor and focus chain

mod entry_store;
mod focus_chain;
mod route_editor;

pub use entry_store::EntryStore;
pub use focus_chain::FocusChain;
pub use route_editor::{EditMode, RouteEditor};
