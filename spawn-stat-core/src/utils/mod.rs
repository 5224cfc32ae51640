//! Utilities

pub mod log_sanitizer;
