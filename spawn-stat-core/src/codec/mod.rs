//! Persistence codecs
//!
//! Two independent document formats, never mixed:
//!
//! ```text
//! route.dat   "3 0 4"                 route order, written on every confirm
//! save.json   [[3,2],[4,0]]           classified route entries in route order (Save/Load)
//! wire        {"drops":[[3,2],[4,0]]} same sparse encoding as save.json
//! ```

pub mod legacy_route;
pub mod save_file;
