//! Limb-darkening laws.
//!
//! Models are small `Copy` values evaluated as pure functions so they can be
//! sampled over any grid of viewing angles.

pub mod law;

pub use law::*;
