//! Anyval - Fixed-size scalar variant type
//!
//! This crate re-exports the Anyval layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 0: anyval_foundation — Variant, Kind, the conversion matrix, Error
//! ```

pub use anyval_foundation as foundation;

pub use anyval_foundation::{Error, Kind, Result, Variant};
