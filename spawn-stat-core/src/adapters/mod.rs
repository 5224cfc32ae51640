//! Concrete storage and transport implementations

mod file_storage;
mod http_transport;

pub use file_storage::FileStorage;
pub use http_transport::HttpTransport;
