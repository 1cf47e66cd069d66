//! Integration tests for the conversion matrix
//!
//! Tests every class of conversion rule: identity, widening, checked
//! narrowing, truncation, parsing, and the pairs with no rule at all.

use anyval_foundation::{Error, Kind, Variant};
use chrono::NaiveDate;
use rust_decimal::Decimal;

// =============================================================================
// Identity round-trips
// =============================================================================

#[test]
fn every_kind_round_trips_through_its_own_accessor() {
    assert!(Variant::from(true).to_bool().unwrap());
    assert_eq!(Variant::from('x').to_char().unwrap(), 'x');
    assert_eq!(Variant::from(-1i8).to_i8().unwrap(), -1);
    assert_eq!(Variant::from(2u8).to_u8().unwrap(), 2);
    assert_eq!(Variant::from(-3i16).to_i16().unwrap(), -3);
    assert_eq!(Variant::from(4u16).to_u16().unwrap(), 4);
    assert_eq!(Variant::from(-5i32).to_i32().unwrap(), -5);
    assert_eq!(Variant::from(6u32).to_u32().unwrap(), 6);
    assert_eq!(Variant::from(-7i64).to_i64().unwrap(), -7);
    assert_eq!(Variant::from(8u64).to_u64().unwrap(), 8);
    assert_eq!(Variant::from(0.5f32).to_f32().unwrap(), 0.5);
    assert_eq!(Variant::from(0.25f64).to_f64().unwrap(), 0.25);

    let d: Decimal = "9.99".parse().unwrap();
    assert_eq!(Variant::from(d).to_decimal().unwrap(), d);

    let dt = NaiveDate::from_ymd_opt(2024, 7, 4)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert_eq!(Variant::from(dt).to_datetime().unwrap(), dt);

    assert_eq!(Variant::from("identity").to_string(), "identity");
}

// =============================================================================
// Numeric conversions
// =============================================================================

#[test]
fn widening_never_fails() {
    assert_eq!(Variant::from(i8::MAX).to_i64().unwrap(), 127);
    assert_eq!(Variant::from(u8::MAX).to_u64().unwrap(), 255);
    assert_eq!(Variant::from(u32::MAX).to_i64().unwrap(), 4_294_967_295);
    assert_eq!(Variant::from(1_000i16).to_f32().unwrap(), 1000.0);
    assert_eq!(
        Variant::from(123u32).to_decimal().unwrap(),
        Decimal::from(123)
    );
}

#[test]
fn narrowing_out_of_range_overflows() {
    assert_eq!(
        Variant::from(300i32).to_u8(),
        Err(Error::overflow(Kind::I32, Kind::U8))
    );
    assert_eq!(
        Variant::from(-129i32).to_i8(),
        Err(Error::overflow(Kind::I32, Kind::I8))
    );
    assert_eq!(
        Variant::from(-1i64).to_u64(),
        Err(Error::overflow(Kind::I64, Kind::U64))
    );
    assert_eq!(
        Variant::from(u64::MAX).to_i32(),
        Err(Error::overflow(Kind::U64, Kind::I32))
    );
}

#[test]
fn narrowing_in_range_succeeds() {
    assert_eq!(Variant::from(255i64).to_u8().unwrap(), 255);
    assert_eq!(Variant::from(-128i64).to_i8().unwrap(), -128);
    assert_eq!(Variant::from(65_535u32).to_u16().unwrap(), 65_535);
}

#[test]
fn floats_truncate_toward_zero() {
    assert_eq!(Variant::from(9.99f64).to_i32().unwrap(), 9);
    assert_eq!(Variant::from(-9.99f64).to_i32().unwrap(), -9);
    assert_eq!(Variant::from(2.5f32).to_i64().unwrap(), 2);
}

#[test]
fn non_finite_floats_never_become_integers() {
    assert_eq!(
        Variant::from(f64::NAN).to_i32(),
        Err(Error::overflow(Kind::F64, Kind::I32))
    );
    assert_eq!(
        Variant::from(f64::INFINITY).to_u64(),
        Err(Error::overflow(Kind::F64, Kind::U64))
    );
    assert_eq!(
        Variant::from(f32::NEG_INFINITY).to_i8(),
        Err(Error::overflow(Kind::F32, Kind::I8))
    );
}

#[test]
fn decimal_truncates_and_range_checks() {
    let d: Decimal = "127.9".parse().unwrap();
    assert_eq!(Variant::from(d).to_i8().unwrap(), 127);

    let too_big: Decimal = "128".parse().unwrap();
    assert_eq!(
        Variant::from(too_big).to_i8(),
        Err(Error::overflow(Kind::Decimal, Kind::I8))
    );
}

#[test]
fn bool_converts_to_zero_or_one() {
    assert_eq!(Variant::from(true).to_u16().unwrap(), 1);
    assert_eq!(Variant::from(false).to_i64().unwrap(), 0);
    assert_eq!(Variant::from(true).to_f32().unwrap(), 1.0);
    assert_eq!(Variant::from(true).to_decimal().unwrap(), Decimal::ONE);
}

// =============================================================================
// Char conversions
// =============================================================================

#[test]
fn char_and_integers_interconvert() {
    assert_eq!(Variant::from('A').to_i64().unwrap(), 65);
    assert_eq!(Variant::from(65u8).to_char().unwrap(), 'A');
}

#[test]
fn to_char_fails_for_string_decimal_datetime() {
    assert_eq!(
        Variant::from("A").to_char(),
        Err(Error::invalid_cast(Kind::Str, Kind::Char))
    );
    assert_eq!(
        Variant::from(Decimal::from(65)).to_char(),
        Err(Error::invalid_cast(Kind::Decimal, Kind::Char))
    );
    let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(
        Variant::from(dt).to_char(),
        Err(Error::invalid_cast(Kind::DateTime, Kind::Char))
    );
}

// =============================================================================
// String parsing
// =============================================================================

#[test]
fn strings_parse_into_scalars() {
    assert_eq!(Variant::from("42").to_i32().unwrap(), 42);
    assert_eq!(Variant::from("-7").to_i64().unwrap(), -7);
    assert_eq!(Variant::from("2.5").to_f64().unwrap(), 2.5);
    assert!(Variant::from("true").to_bool().unwrap());
    assert_eq!(
        Variant::from("0.01").to_decimal().unwrap(),
        "0.01".parse::<Decimal>().unwrap()
    );
}

#[test]
fn unparsable_string_is_a_parse_error() {
    // Str is in the matrix for i32, so this is a parse failure, not an
    // invalid cast.
    assert_eq!(
        Variant::from("notanumber").to_i32(),
        Err(Error::parse(Kind::I32, "notanumber"))
    );
    assert!(matches!(
        Variant::from("yes").to_bool(),
        Err(Error::Parse { .. })
    ));
}

// =============================================================================
// DateTime conversions
// =============================================================================

#[test]
fn datetime_from_string_forms() {
    let midnight = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    assert_eq!(
        Variant::from("2024-01-01").to_datetime().unwrap(),
        midnight
    );
    assert_eq!(
        Variant::from("2024-01-01T00:00:00").to_datetime().unwrap(),
        midnight
    );
    assert_eq!(
        Variant::from("2024-01-01 00:00:00").to_datetime().unwrap(),
        midnight
    );
}

#[test]
fn to_datetime_fails_for_every_non_datetime_non_string_kind() {
    assert!(matches!(
        Variant::from(true).to_datetime(),
        Err(Error::InvalidCast { .. })
    ));
    assert!(matches!(
        Variant::from('d').to_datetime(),
        Err(Error::InvalidCast { .. })
    ));
    assert!(matches!(
        Variant::from(20_240_101i64).to_datetime(),
        Err(Error::InvalidCast { .. })
    ));
    assert!(matches!(
        Variant::from(1.5f64).to_datetime(),
        Err(Error::InvalidCast { .. })
    ));
    assert!(matches!(
        Variant::from(Decimal::ONE).to_datetime(),
        Err(Error::InvalidCast { .. })
    ));
    assert!(matches!(
        Variant::empty().to_datetime(),
        Err(Error::InvalidCast { .. })
    ));
}

// =============================================================================
// Empty
// =============================================================================

#[test]
fn empty_has_no_conversions_except_string() {
    let v = Variant::empty();
    assert!(v.to_bool().is_err());
    assert!(v.to_char().is_err());
    assert!(v.to_i32().is_err());
    assert!(v.to_u64().is_err());
    assert!(v.to_f64().is_err());
    assert!(v.to_decimal().is_err());
    assert!(v.to_datetime().is_err());
    assert_eq!(v.to_string(), "");
}
