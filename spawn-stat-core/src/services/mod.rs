//! Service layer

mod catalog;
mod remote_sync;
mod session;

pub use catalog::scan_catalog;
pub use remote_sync::{RemoteSync, StatsUpdate};
pub use session::RouteSession;
