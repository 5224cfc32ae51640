//! 界面状态

mod edit_cursor;
mod modal;
mod sync;

pub use edit_cursor::EditCursor;
pub use modal::{Modal, ModalState};
pub use sync::SyncState;
