//! Storage, transport and view abstraction trait definition

mod document_store;
mod scroll_container;
mod stats_transport;

pub use document_store::{RouteStore, SaveStore};
pub use scroll_container::ScrollContainer;
pub use stats_transport::{HttpReply, StatsTransport};
