//! Domain types used throughout the lookup pipeline.
//!
//! This module defines:
//!
//! - catalog and passband enums (`CatalogKind`, `Passband`)
//! - request parameters before and after quantization
//! - coefficient and profile outputs (`LimbDarkeningCoefficients`, `ProfileFile`)

pub mod types;

pub use types::*;
