//! Internal helpers

pub mod log_sanitizer;
