//! Input/output helpers.
//!
//! - catalog table loading (`table`)
//! - profile JSON read/write (`profile`)

pub mod profile;
pub mod table;

pub use profile::*;
pub use table::*;
