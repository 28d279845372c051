//! Catalog descriptors and the lookup steps that run against them.
//!
//! - fixed per-catalog configuration (`descriptor`)
//! - input validation + grid rounding (`quantize`)
//! - exact-match row selection (`extract`)

pub mod descriptor;
pub mod extract;
pub mod quantize;

pub use descriptor::*;
pub use extract::*;
pub use quantize::*;
