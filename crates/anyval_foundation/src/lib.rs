//! Scalar variant value type for Anyval.
//!
//! This crate provides:
//! - [`Variant`] - A fixed-size, type-erased scalar value
//! - [`Kind`] - The closed set of kinds a variant can hold
//! - The conversion matrix - fallible `to_*` accessors between every kind pair
//! - [`Error`] - Conversion errors (invalid cast, parse failure, overflow)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod convert;
mod error;
mod kind;
mod variant;

pub use error::{Error, Result};
pub use kind::Kind;
pub use variant::Variant;

// Payload crates surface in the public API (constructors and accessors), so
// re-export the types callers need to name.
pub use chrono::NaiveDateTime;
pub use rust_decimal::Decimal;
