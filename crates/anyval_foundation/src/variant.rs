//! The variant value type: one scalar drawn from a closed set of kinds.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::kind::Kind;

/// Payload union for the sixteen kinds.
///
/// Exactly one interpretation is live at a time, selected by the kind tag the
/// enum itself carries. Every kind except `Str` is stored inline; `Str` shares
/// its buffer via `Arc`, so cloning never copies string contents.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum Payload {
    Empty,
    Bool(bool),
    Char(char),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    DateTime(NaiveDateTime),
    Str(Arc<str>),
}

/// A fixed-size, type-erased scalar value.
///
/// A `Variant` holds exactly one value drawn from the closed kind set in
/// [`Kind`] and is immutable once constructed. Values convert between kinds
/// through the fallible `to_*` accessors; the canonical string form of the
/// value drives equality, hashing, and [`Display`](fmt::Display).
///
/// The canonical string is computed at most once per instance and cached in a
/// write-once cell, so equality and hashing are cheap after first use. The
/// cache is the only interior mutability in the type; concurrent first use
/// computes the same string on every thread and the first writer wins.
///
/// ```
/// use anyval_foundation::{Kind, Variant};
///
/// let v = Variant::from(42i32);
/// assert_eq!(v.kind(), Kind::I32);
/// assert_eq!(v.to_i64().unwrap(), 42);
/// assert_eq!(v.to_string(), "42");
/// assert_eq!(v, Variant::from("42"));
/// ```
pub struct Variant {
    pub(crate) payload: Payload,
    repr: OnceLock<Arc<str>>,
}

impl Variant {
    /// Creates an empty variant (kind [`Kind::Empty`], empty canonical form).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            payload: Payload::Empty,
            repr: OnceLock::new(),
        }
    }

    /// All construction funnels through here so that a `Str` payload seeds the
    /// canonical-string cache with its own buffer.
    pub(crate) fn from_payload(payload: Payload) -> Self {
        let repr = OnceLock::new();
        if let Payload::Str(s) = &payload {
            let _ = repr.set(Arc::clone(s));
        }
        Self { payload, repr }
    }

    /// Returns the kind of the stored value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self.payload {
            Payload::Empty => Kind::Empty,
            Payload::Bool(_) => Kind::Bool,
            Payload::Char(_) => Kind::Char,
            Payload::I8(_) => Kind::I8,
            Payload::U8(_) => Kind::U8,
            Payload::I16(_) => Kind::I16,
            Payload::U16(_) => Kind::U16,
            Payload::I32(_) => Kind::I32,
            Payload::U32(_) => Kind::U32,
            Payload::I64(_) => Kind::I64,
            Payload::U64(_) => Kind::U64,
            Payload::F32(_) => Kind::F32,
            Payload::F64(_) => Kind::F64,
            Payload::Decimal(_) => Kind::Decimal,
            Payload::DateTime(_) => Kind::DateTime,
            Payload::Str(_) => Kind::Str,
        }
    }

    /// Returns true if no value is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.payload, Payload::Empty)
    }

    /// Returns the canonical string form of the stored value.
    ///
    /// This never fails: every kind has a canonical form (the empty string for
    /// [`Kind::Empty`], the standard `Display` form for scalars, the string
    /// itself for [`Kind::Str`]). The result is computed on first call and
    /// cached for the lifetime of this instance.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.repr.get_or_init(|| self.render())
    }

    fn render(&self) -> Arc<str> {
        match &self.payload {
            Payload::Empty => Arc::from(""),
            Payload::Bool(v) => Arc::from(v.to_string()),
            Payload::Char(v) => Arc::from(v.to_string()),
            Payload::I8(v) => Arc::from(v.to_string()),
            Payload::U8(v) => Arc::from(v.to_string()),
            Payload::I16(v) => Arc::from(v.to_string()),
            Payload::U16(v) => Arc::from(v.to_string()),
            Payload::I32(v) => Arc::from(v.to_string()),
            Payload::U32(v) => Arc::from(v.to_string()),
            Payload::I64(v) => Arc::from(v.to_string()),
            Payload::U64(v) => Arc::from(v.to_string()),
            Payload::F32(v) => Arc::from(v.to_string()),
            Payload::F64(v) => Arc::from(v.to_string()),
            Payload::Decimal(v) => Arc::from(v.to_string()),
            Payload::DateTime(v) => Arc::from(v.to_string()),
            Payload::Str(s) => Arc::clone(s),
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::empty()
    }
}

// Manual Clone: the cache cell itself is not cloneable, but a populated cache
// carries forward so the clone never recomputes the string.
impl Clone for Variant {
    fn clone(&self) -> Self {
        let repr = OnceLock::new();
        if let Some(s) = self.repr.get() {
            let _ = repr.set(Arc::clone(s));
        }
        Self {
            payload: self.payload.clone(),
            repr,
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variant({:?})", self.payload)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

// Equality is canonical-string equality: variants of different kinds compare
// equal when their string projections coincide (Int 5 == Str "5"). This also
// makes NaN equal to itself, which Eq reflexivity requires.
impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Variant {}

// Hash follows equality exactly: canonical string only, no kind tag mixed in,
// so a == b implies hash(a) == hash(b) across kinds.
impl Hash for Variant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

// Construction: one From impl per native type.

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Self::from_payload(Payload::Bool(v))
    }
}

impl From<char> for Variant {
    fn from(v: char) -> Self {
        Self::from_payload(Payload::Char(v))
    }
}

impl From<i8> for Variant {
    fn from(v: i8) -> Self {
        Self::from_payload(Payload::I8(v))
    }
}

impl From<u8> for Variant {
    fn from(v: u8) -> Self {
        Self::from_payload(Payload::U8(v))
    }
}

impl From<i16> for Variant {
    fn from(v: i16) -> Self {
        Self::from_payload(Payload::I16(v))
    }
}

impl From<u16> for Variant {
    fn from(v: u16) -> Self {
        Self::from_payload(Payload::U16(v))
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Self::from_payload(Payload::I32(v))
    }
}

impl From<u32> for Variant {
    fn from(v: u32) -> Self {
        Self::from_payload(Payload::U32(v))
    }
}

impl From<i64> for Variant {
    fn from(v: i64) -> Self {
        Self::from_payload(Payload::I64(v))
    }
}

impl From<u64> for Variant {
    fn from(v: u64) -> Self {
        Self::from_payload(Payload::U64(v))
    }
}

impl From<f32> for Variant {
    fn from(v: f32) -> Self {
        Self::from_payload(Payload::F32(v))
    }
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Self::from_payload(Payload::F64(v))
    }
}

impl From<Decimal> for Variant {
    fn from(v: Decimal) -> Self {
        Self::from_payload(Payload::Decimal(v))
    }
}

impl From<NaiveDateTime> for Variant {
    fn from(v: NaiveDateTime) -> Self {
        Self::from_payload(Payload::DateTime(v))
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Self::from_payload(Payload::Str(Arc::from(s)))
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Self::from_payload(Payload::Str(Arc::from(s)))
    }
}

impl From<Arc<str>> for Variant {
    fn from(s: Arc<str>) -> Self {
        Self::from_payload(Payload::Str(s))
    }
}

// Serde: a variant persists as its payload, i.e. the externally tagged
// (kind, value) pair, with no value for Empty. Deserialization rebuilds the
// cache seed for Str payloads via from_payload.

#[cfg(feature = "serde")]
impl serde::Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.payload.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Payload::deserialize(deserializer).map(Self::from_payload)
    }
}
