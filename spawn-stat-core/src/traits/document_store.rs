//! Persisted document abstract Trait

use crate::error::CoreResult;

/// Legacy route file storage
///
/// Platform implementation:
/// - File system: `FileStorage`
pub trait RouteStore: Send + Sync {
    /// Read the route document; `Ok(None)` when it does not exist yet.
    fn read_route(&self) -> CoreResult<Option<String>>;

    /// Replace the whole route document.
    ///
    /// # Arguments
    /// * `content` - encoded route
    fn write_route(&self, content: &str) -> CoreResult<()>;
}

/// Save/Load file storage
///
/// Platform implementation:
/// - File system: `FileStorage`
pub trait SaveStore: Send + Sync {
    /// Read the save document; `Ok(None)` when it does not exist yet.
    fn read_save(&self) -> CoreResult<Option<String>>;

    /// Replace the whole save document.
    ///
    /// # Arguments
    /// * `content` - encoded JSON pair array
    fn write_save(&self, content: &str) -> CoreResult<()>;
}
