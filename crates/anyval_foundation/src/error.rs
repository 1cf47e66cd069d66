//! Error types for variant conversions.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::kind::Kind;

/// Result alias for fallible variant operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by a conversion accessor.
///
/// Conversions are pure: they either produce a value or one of these errors,
/// with no side effects and no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No conversion rule exists from the stored kind to the target kind.
    #[error("invalid cast from {from} to {to}")]
    InvalidCast {
        /// The kind currently stored.
        from: Kind,
        /// The kind that was requested.
        to: Kind,
    },

    /// The stored text could not be parsed as the target kind.
    #[error("cannot parse {input:?} as {target}")]
    Parse {
        /// The kind that was requested.
        target: Kind,
        /// The text that failed to parse.
        input: String,
    },

    /// A conversion rule exists, but this value is not representable in the
    /// target kind (narrowing out of range, non-finite to integer or decimal,
    /// or a scalar value outside `char`'s range).
    #[error("value of kind {from} out of range for {to}")]
    Overflow {
        /// The kind currently stored.
        from: Kind,
        /// The kind that was requested.
        to: Kind,
    },
}

impl Error {
    /// Creates an invalid-cast error.
    #[must_use]
    pub const fn invalid_cast(from: Kind, to: Kind) -> Self {
        Self::InvalidCast { from, to }
    }

    /// Creates a parse error for the given target kind and input text.
    #[must_use]
    pub fn parse(target: Kind, input: impl Into<String>) -> Self {
        Self::Parse {
            target,
            input: input.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub const fn overflow(from: Kind, to: Kind) -> Self {
        Self::Overflow { from, to }
    }
}
