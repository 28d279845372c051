//! `limb-darkening` library crate.
//!
//! Looks up theoretical nonlinear limb-darkening coefficients in the Claret
//! catalogs and builds the corresponding intensity profile.
//!
//! The binary (`ldc`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the lookup can be embedded in light-curve code directly

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod models;
pub mod plot;
pub mod report;
