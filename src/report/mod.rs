//! Formatted terminal output for lookups.

pub mod format;

pub use format::*;
