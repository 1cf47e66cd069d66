//! The conversion matrix between variant kinds.
//!
//! Every accessor matches exhaustively over the payload union, with no
//! wildcard arms, so each kind/accessor pair is a deliberate decision the
//! compiler enforces. Pairs with no entry in the matrix fail with an
//! invalid-cast error; pairs with an entry either convert or report overflow
//! or parse failure for the concrete value.
//!
//! Conversion policy, in the Rust convention:
//! - integer narrowing is checked (`TryFrom`), never wrapping;
//! - float and decimal to integer truncates toward zero, range-checked;
//! - non-finite floats never convert to integers or decimals;
//! - string sources parse with the target's standard Rust parser.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::variant::{Payload, Variant};

/// Accepted date-time text forms: the canonical form and the `T`-separated
/// ISO form, both with optional fractional seconds.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    // Bare dates read as midnight.
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Integer-family source to `char`: must be a valid Unicode scalar value.
fn scalar_to_char<T: TryInto<u32>>(value: T, from: Kind) -> Result<char> {
    value
        .try_into()
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::overflow(from, Kind::Char))
}

impl Variant {
    /// Converts the stored value to a `bool`.
    ///
    /// Numeric sources convert as `value != 0`; string sources parse as
    /// `true` / `false`. Char and date-time sources have no boolean
    /// interpretation and fail with invalid-cast.
    pub fn to_bool(&self) -> Result<bool> {
        match &self.payload {
            Payload::Bool(v) => Ok(*v),
            Payload::I8(v) => Ok(*v != 0),
            Payload::U8(v) => Ok(*v != 0),
            Payload::I16(v) => Ok(*v != 0),
            Payload::U16(v) => Ok(*v != 0),
            Payload::I32(v) => Ok(*v != 0),
            Payload::U32(v) => Ok(*v != 0),
            Payload::I64(v) => Ok(*v != 0),
            Payload::U64(v) => Ok(*v != 0),
            Payload::F32(v) => Ok(*v != 0.0),
            Payload::F64(v) => Ok(*v != 0.0),
            Payload::Decimal(v) => Ok(*v != Decimal::ZERO),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::Bool, &**s)),
            Payload::Empty | Payload::Char(_) | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::Bool))
            }
        }
    }

    /// Converts the stored value to a `char`.
    ///
    /// Only the integer kinds convert (as Unicode scalar values); everything
    /// else fails with invalid-cast, including strings.
    pub fn to_char(&self) -> Result<char> {
        match &self.payload {
            Payload::Char(v) => Ok(*v),
            Payload::I8(v) => scalar_to_char(*v, Kind::I8),
            Payload::U8(v) => scalar_to_char(*v, Kind::U8),
            Payload::I16(v) => scalar_to_char(*v, Kind::I16),
            Payload::U16(v) => scalar_to_char(*v, Kind::U16),
            Payload::I32(v) => scalar_to_char(*v, Kind::I32),
            Payload::U32(v) => scalar_to_char(*v, Kind::U32),
            Payload::I64(v) => scalar_to_char(*v, Kind::I64),
            Payload::U64(v) => scalar_to_char(*v, Kind::U64),
            Payload::Empty
            | Payload::Bool(_)
            | Payload::F32(_)
            | Payload::F64(_)
            | Payload::Decimal(_)
            | Payload::DateTime(_)
            | Payload::Str(_) => Err(Error::invalid_cast(self.kind(), Kind::Char)),
        }
    }

    /// Converts the stored value to a date-time.
    ///
    /// Only a date-time (identity) or a string (parsed) converts. Accepted
    /// text forms are `%Y-%m-%d %H:%M:%S` and the `T`-separated variant,
    /// both with optional fractional seconds, plus a bare `%Y-%m-%d` date,
    /// which reads as midnight.
    pub fn to_datetime(&self) -> Result<NaiveDateTime> {
        match &self.payload {
            Payload::DateTime(v) => Ok(*v),
            Payload::Str(s) => {
                parse_datetime(s).ok_or_else(|| Error::parse(Kind::DateTime, &**s))
            }
            Payload::Empty
            | Payload::Bool(_)
            | Payload::Char(_)
            | Payload::I8(_)
            | Payload::U8(_)
            | Payload::I16(_)
            | Payload::U16(_)
            | Payload::I32(_)
            | Payload::U32(_)
            | Payload::I64(_)
            | Payload::U64(_)
            | Payload::F32(_)
            | Payload::F64(_)
            | Payload::Decimal(_) => Err(Error::invalid_cast(self.kind(), Kind::DateTime)),
        }
    }

    /// Converts the stored value to a high-precision decimal.
    ///
    /// Integers convert exactly; floats convert to the closest decimal and
    /// fail with overflow when non-finite or out of the decimal range.
    pub fn to_decimal(&self) -> Result<Decimal> {
        match &self.payload {
            Payload::Bool(v) => Ok(if *v { Decimal::ONE } else { Decimal::ZERO }),
            Payload::I8(v) => Ok(Decimal::from(*v)),
            Payload::U8(v) => Ok(Decimal::from(*v)),
            Payload::I16(v) => Ok(Decimal::from(*v)),
            Payload::U16(v) => Ok(Decimal::from(*v)),
            Payload::I32(v) => Ok(Decimal::from(*v)),
            Payload::U32(v) => Ok(Decimal::from(*v)),
            Payload::I64(v) => Ok(Decimal::from(*v)),
            Payload::U64(v) => Ok(Decimal::from(*v)),
            Payload::F32(v) => {
                Decimal::try_from(*v).map_err(|_| Error::overflow(Kind::F32, Kind::Decimal))
            }
            Payload::F64(v) => {
                Decimal::try_from(*v).map_err(|_| Error::overflow(Kind::F64, Kind::Decimal))
            }
            Payload::Decimal(v) => Ok(*v),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::Decimal, &**s)),
            Payload::Empty | Payload::Char(_) | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::Decimal))
            }
        }
    }

    /// Converts the stored value to an `f32` (closest representable value).
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> Result<f32> {
        match &self.payload {
            Payload::Bool(v) => Ok(f32::from(u8::from(*v))),
            Payload::I8(v) => Ok(f32::from(*v)),
            Payload::U8(v) => Ok(f32::from(*v)),
            Payload::I16(v) => Ok(f32::from(*v)),
            Payload::U16(v) => Ok(f32::from(*v)),
            Payload::I32(v) => Ok(*v as f32),
            Payload::U32(v) => Ok(*v as f32),
            Payload::I64(v) => Ok(*v as f32),
            Payload::U64(v) => Ok(*v as f32),
            Payload::F32(v) => Ok(*v),
            // Out-of-range magnitudes become infinities, as float casts do.
            Payload::F64(v) => Ok(*v as f32),
            Payload::Decimal(v) => v
                .to_f32()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::F32)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::F32, &**s)),
            Payload::Empty | Payload::Char(_) | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::F32))
            }
        }
    }

    /// Converts the stored value to an `f64` (closest representable value).
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> Result<f64> {
        match &self.payload {
            Payload::Bool(v) => Ok(f64::from(u8::from(*v))),
            Payload::I8(v) => Ok(f64::from(*v)),
            Payload::U8(v) => Ok(f64::from(*v)),
            Payload::I16(v) => Ok(f64::from(*v)),
            Payload::U16(v) => Ok(f64::from(*v)),
            Payload::I32(v) => Ok(f64::from(*v)),
            Payload::U32(v) => Ok(f64::from(*v)),
            Payload::I64(v) => Ok(*v as f64),
            Payload::U64(v) => Ok(*v as f64),
            Payload::F32(v) => Ok(f64::from(*v)),
            Payload::F64(v) => Ok(*v),
            Payload::Decimal(v) => v
                .to_f64()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::F64)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::F64, &**s)),
            Payload::Empty | Payload::Char(_) | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::F64))
            }
        }
    }

    /// Converts the stored value to an `i8` (checked narrowing; floats and
    /// decimals truncate toward zero first).
    pub fn to_i8(&self) -> Result<i8> {
        match &self.payload {
            Payload::Bool(v) => Ok(i8::from(*v)),
            Payload::Char(v) => u32::from(*v)
                .try_into()
                .map_err(|_| Error::overflow(Kind::Char, Kind::I8)),
            Payload::I8(v) => Ok(*v),
            Payload::U8(v) => i8::try_from(*v).map_err(|_| Error::overflow(Kind::U8, Kind::I8)),
            Payload::I16(v) => i8::try_from(*v).map_err(|_| Error::overflow(Kind::I16, Kind::I8)),
            Payload::U16(v) => i8::try_from(*v).map_err(|_| Error::overflow(Kind::U16, Kind::I8)),
            Payload::I32(v) => i8::try_from(*v).map_err(|_| Error::overflow(Kind::I32, Kind::I8)),
            Payload::U32(v) => i8::try_from(*v).map_err(|_| Error::overflow(Kind::U32, Kind::I8)),
            Payload::I64(v) => i8::try_from(*v).map_err(|_| Error::overflow(Kind::I64, Kind::I8)),
            Payload::U64(v) => i8::try_from(*v).map_err(|_| Error::overflow(Kind::U64, Kind::I8)),
            Payload::F32(v) => v
                .trunc()
                .to_i8()
                .ok_or_else(|| Error::overflow(Kind::F32, Kind::I8)),
            Payload::F64(v) => v
                .trunc()
                .to_i8()
                .ok_or_else(|| Error::overflow(Kind::F64, Kind::I8)),
            Payload::Decimal(v) => v
                .trunc()
                .to_i8()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::I8)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::I8, &**s)),
            Payload::Empty | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::I8))
            }
        }
    }

    /// Converts the stored value to an `i16` (checked narrowing; floats and
    /// decimals truncate toward zero first).
    pub fn to_i16(&self) -> Result<i16> {
        match &self.payload {
            Payload::Bool(v) => Ok(i16::from(*v)),
            Payload::Char(v) => u32::from(*v)
                .try_into()
                .map_err(|_| Error::overflow(Kind::Char, Kind::I16)),
            Payload::I8(v) => Ok(i16::from(*v)),
            Payload::U8(v) => Ok(i16::from(*v)),
            Payload::I16(v) => Ok(*v),
            Payload::U16(v) => i16::try_from(*v).map_err(|_| Error::overflow(Kind::U16, Kind::I16)),
            Payload::I32(v) => i16::try_from(*v).map_err(|_| Error::overflow(Kind::I32, Kind::I16)),
            Payload::U32(v) => i16::try_from(*v).map_err(|_| Error::overflow(Kind::U32, Kind::I16)),
            Payload::I64(v) => i16::try_from(*v).map_err(|_| Error::overflow(Kind::I64, Kind::I16)),
            Payload::U64(v) => i16::try_from(*v).map_err(|_| Error::overflow(Kind::U64, Kind::I16)),
            Payload::F32(v) => v
                .trunc()
                .to_i16()
                .ok_or_else(|| Error::overflow(Kind::F32, Kind::I16)),
            Payload::F64(v) => v
                .trunc()
                .to_i16()
                .ok_or_else(|| Error::overflow(Kind::F64, Kind::I16)),
            Payload::Decimal(v) => v
                .trunc()
                .to_i16()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::I16)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::I16, &**s)),
            Payload::Empty | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::I16))
            }
        }
    }

    /// Converts the stored value to an `i32` (checked narrowing; floats and
    /// decimals truncate toward zero first).
    pub fn to_i32(&self) -> Result<i32> {
        match &self.payload {
            Payload::Bool(v) => Ok(i32::from(*v)),
            Payload::Char(v) => u32::from(*v)
                .try_into()
                .map_err(|_| Error::overflow(Kind::Char, Kind::I32)),
            Payload::I8(v) => Ok(i32::from(*v)),
            Payload::U8(v) => Ok(i32::from(*v)),
            Payload::I16(v) => Ok(i32::from(*v)),
            Payload::U16(v) => Ok(i32::from(*v)),
            Payload::I32(v) => Ok(*v),
            Payload::U32(v) => i32::try_from(*v).map_err(|_| Error::overflow(Kind::U32, Kind::I32)),
            Payload::I64(v) => i32::try_from(*v).map_err(|_| Error::overflow(Kind::I64, Kind::I32)),
            Payload::U64(v) => i32::try_from(*v).map_err(|_| Error::overflow(Kind::U64, Kind::I32)),
            Payload::F32(v) => v
                .trunc()
                .to_i32()
                .ok_or_else(|| Error::overflow(Kind::F32, Kind::I32)),
            Payload::F64(v) => v
                .trunc()
                .to_i32()
                .ok_or_else(|| Error::overflow(Kind::F64, Kind::I32)),
            Payload::Decimal(v) => v
                .trunc()
                .to_i32()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::I32)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::I32, &**s)),
            Payload::Empty | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::I32))
            }
        }
    }

    /// Converts the stored value to an `i64` (checked narrowing; floats and
    /// decimals truncate toward zero first).
    pub fn to_i64(&self) -> Result<i64> {
        match &self.payload {
            Payload::Bool(v) => Ok(i64::from(*v)),
            Payload::Char(v) => Ok(i64::from(u32::from(*v))),
            Payload::I8(v) => Ok(i64::from(*v)),
            Payload::U8(v) => Ok(i64::from(*v)),
            Payload::I16(v) => Ok(i64::from(*v)),
            Payload::U16(v) => Ok(i64::from(*v)),
            Payload::I32(v) => Ok(i64::from(*v)),
            Payload::U32(v) => Ok(i64::from(*v)),
            Payload::I64(v) => Ok(*v),
            Payload::U64(v) => i64::try_from(*v).map_err(|_| Error::overflow(Kind::U64, Kind::I64)),
            Payload::F32(v) => v
                .trunc()
                .to_i64()
                .ok_or_else(|| Error::overflow(Kind::F32, Kind::I64)),
            Payload::F64(v) => v
                .trunc()
                .to_i64()
                .ok_or_else(|| Error::overflow(Kind::F64, Kind::I64)),
            Payload::Decimal(v) => v
                .trunc()
                .to_i64()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::I64)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::I64, &**s)),
            Payload::Empty | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::I64))
            }
        }
    }

    /// Converts the stored value to a `u8` (checked narrowing; floats and
    /// decimals truncate toward zero first).
    pub fn to_u8(&self) -> Result<u8> {
        match &self.payload {
            Payload::Bool(v) => Ok(u8::from(*v)),
            Payload::Char(v) => u32::from(*v)
                .try_into()
                .map_err(|_| Error::overflow(Kind::Char, Kind::U8)),
            Payload::I8(v) => u8::try_from(*v).map_err(|_| Error::overflow(Kind::I8, Kind::U8)),
            Payload::U8(v) => Ok(*v),
            Payload::I16(v) => u8::try_from(*v).map_err(|_| Error::overflow(Kind::I16, Kind::U8)),
            Payload::U16(v) => u8::try_from(*v).map_err(|_| Error::overflow(Kind::U16, Kind::U8)),
            Payload::I32(v) => u8::try_from(*v).map_err(|_| Error::overflow(Kind::I32, Kind::U8)),
            Payload::U32(v) => u8::try_from(*v).map_err(|_| Error::overflow(Kind::U32, Kind::U8)),
            Payload::I64(v) => u8::try_from(*v).map_err(|_| Error::overflow(Kind::I64, Kind::U8)),
            Payload::U64(v) => u8::try_from(*v).map_err(|_| Error::overflow(Kind::U64, Kind::U8)),
            Payload::F32(v) => v
                .trunc()
                .to_u8()
                .ok_or_else(|| Error::overflow(Kind::F32, Kind::U8)),
            Payload::F64(v) => v
                .trunc()
                .to_u8()
                .ok_or_else(|| Error::overflow(Kind::F64, Kind::U8)),
            Payload::Decimal(v) => v
                .trunc()
                .to_u8()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::U8)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::U8, &**s)),
            Payload::Empty | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::U8))
            }
        }
    }

    /// Converts the stored value to a `u16` (checked narrowing; floats and
    /// decimals truncate toward zero first).
    pub fn to_u16(&self) -> Result<u16> {
        match &self.payload {
            Payload::Bool(v) => Ok(u16::from(*v)),
            Payload::Char(v) => u32::from(*v)
                .try_into()
                .map_err(|_| Error::overflow(Kind::Char, Kind::U16)),
            Payload::I8(v) => u16::try_from(*v).map_err(|_| Error::overflow(Kind::I8, Kind::U16)),
            Payload::U8(v) => Ok(u16::from(*v)),
            Payload::I16(v) => u16::try_from(*v).map_err(|_| Error::overflow(Kind::I16, Kind::U16)),
            Payload::U16(v) => Ok(*v),
            Payload::I32(v) => u16::try_from(*v).map_err(|_| Error::overflow(Kind::I32, Kind::U16)),
            Payload::U32(v) => u16::try_from(*v).map_err(|_| Error::overflow(Kind::U32, Kind::U16)),
            Payload::I64(v) => u16::try_from(*v).map_err(|_| Error::overflow(Kind::I64, Kind::U16)),
            Payload::U64(v) => u16::try_from(*v).map_err(|_| Error::overflow(Kind::U64, Kind::U16)),
            Payload::F32(v) => v
                .trunc()
                .to_u16()
                .ok_or_else(|| Error::overflow(Kind::F32, Kind::U16)),
            Payload::F64(v) => v
                .trunc()
                .to_u16()
                .ok_or_else(|| Error::overflow(Kind::F64, Kind::U16)),
            Payload::Decimal(v) => v
                .trunc()
                .to_u16()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::U16)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::U16, &**s)),
            Payload::Empty | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::U16))
            }
        }
    }

    /// Converts the stored value to a `u32` (checked narrowing; floats and
    /// decimals truncate toward zero first).
    pub fn to_u32(&self) -> Result<u32> {
        match &self.payload {
            Payload::Bool(v) => Ok(u32::from(*v)),
            Payload::Char(v) => Ok(u32::from(*v)),
            Payload::I8(v) => u32::try_from(*v).map_err(|_| Error::overflow(Kind::I8, Kind::U32)),
            Payload::U8(v) => Ok(u32::from(*v)),
            Payload::I16(v) => u32::try_from(*v).map_err(|_| Error::overflow(Kind::I16, Kind::U32)),
            Payload::U16(v) => Ok(u32::from(*v)),
            Payload::I32(v) => u32::try_from(*v).map_err(|_| Error::overflow(Kind::I32, Kind::U32)),
            Payload::U32(v) => Ok(*v),
            Payload::I64(v) => u32::try_from(*v).map_err(|_| Error::overflow(Kind::I64, Kind::U32)),
            Payload::U64(v) => u32::try_from(*v).map_err(|_| Error::overflow(Kind::U64, Kind::U32)),
            Payload::F32(v) => v
                .trunc()
                .to_u32()
                .ok_or_else(|| Error::overflow(Kind::F32, Kind::U32)),
            Payload::F64(v) => v
                .trunc()
                .to_u32()
                .ok_or_else(|| Error::overflow(Kind::F64, Kind::U32)),
            Payload::Decimal(v) => v
                .trunc()
                .to_u32()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::U32)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::U32, &**s)),
            Payload::Empty | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::U32))
            }
        }
    }

    /// Converts the stored value to a `u64` (checked narrowing; floats and
    /// decimals truncate toward zero first).
    pub fn to_u64(&self) -> Result<u64> {
        match &self.payload {
            Payload::Bool(v) => Ok(u64::from(*v)),
            Payload::Char(v) => Ok(u64::from(u32::from(*v))),
            Payload::I8(v) => u64::try_from(*v).map_err(|_| Error::overflow(Kind::I8, Kind::U64)),
            Payload::U8(v) => Ok(u64::from(*v)),
            Payload::I16(v) => u64::try_from(*v).map_err(|_| Error::overflow(Kind::I16, Kind::U64)),
            Payload::U16(v) => Ok(u64::from(*v)),
            Payload::I32(v) => u64::try_from(*v).map_err(|_| Error::overflow(Kind::I32, Kind::U64)),
            Payload::U32(v) => Ok(u64::from(*v)),
            Payload::I64(v) => u64::try_from(*v).map_err(|_| Error::overflow(Kind::I64, Kind::U64)),
            Payload::U64(v) => Ok(*v),
            Payload::F32(v) => v
                .trunc()
                .to_u64()
                .ok_or_else(|| Error::overflow(Kind::F32, Kind::U64)),
            Payload::F64(v) => v
                .trunc()
                .to_u64()
                .ok_or_else(|| Error::overflow(Kind::F64, Kind::U64)),
            Payload::Decimal(v) => v
                .trunc()
                .to_u64()
                .ok_or_else(|| Error::overflow(Kind::Decimal, Kind::U64)),
            Payload::Str(s) => s.parse().map_err(|_| Error::parse(Kind::U64, &**s)),
            Payload::Empty | Payload::DateTime(_) => {
                Err(Error::invalid_cast(self.kind(), Kind::U64))
            }
        }
    }
}

// Extraction seams: TryFrom mirrors the accessor matrix, From mirrors the
// total string projection.

impl TryFrom<&Variant> for bool {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_bool()
    }
}

impl TryFrom<&Variant> for char {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_char()
    }
}

impl TryFrom<&Variant> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_datetime()
    }
}

impl TryFrom<&Variant> for Decimal {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_decimal()
    }
}

impl TryFrom<&Variant> for f32 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_f32()
    }
}

impl TryFrom<&Variant> for f64 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_f64()
    }
}

impl TryFrom<&Variant> for i8 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_i8()
    }
}

impl TryFrom<&Variant> for i16 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_i16()
    }
}

impl TryFrom<&Variant> for i32 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_i32()
    }
}

impl TryFrom<&Variant> for i64 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_i64()
    }
}

impl TryFrom<&Variant> for u8 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_u8()
    }
}

impl TryFrom<&Variant> for u16 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_u16()
    }
}

impl TryFrom<&Variant> for u32 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_u32()
    }
}

impl TryFrom<&Variant> for u64 {
    type Error = Error;

    fn try_from(value: &Variant) -> Result<Self> {
        value.to_u64()
    }
}

impl From<&Variant> for String {
    fn from(value: &Variant) -> Self {
        value.canonical().to_owned()
    }
}
