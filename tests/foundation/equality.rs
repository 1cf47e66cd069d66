//! Integration tests for equality and hashing
//!
//! Equality is defined over the canonical string form, so variants of
//! different kinds compare equal when their projections coincide; hashing
//! follows equality exactly.

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anyval_foundation::Variant;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn hash_of(v: &Variant) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Same-kind equality
// =============================================================================

#[test]
fn equal_values_of_same_kind() {
    assert_eq!(Variant::from(42i32), Variant::from(42i32));
    assert_eq!(Variant::from("abc"), Variant::from("abc"));
    assert_ne!(Variant::from(42i32), Variant::from(43i32));
    assert_ne!(Variant::from("abc"), Variant::from("abd"));
}

#[test]
fn empty_equals_empty() {
    assert_eq!(Variant::empty(), Variant::empty());
    // An empty string projects to the same canonical form as Empty.
    assert_eq!(Variant::empty(), Variant::from(""));
}

// =============================================================================
// Cross-kind equality
// =============================================================================

#[test]
fn int_equals_matching_string() {
    assert_eq!(Variant::from(5i32), Variant::from("5"));
    assert_eq!(Variant::from(-17i64), Variant::from("-17"));
}

#[test]
fn int_equals_float_with_same_projection() {
    // 5.0 projects to "5", matching the integer's form.
    assert_eq!(Variant::from(5i32), Variant::from(5.0f64));
    // 5.5 projects to "5.5", so it differs.
    assert_ne!(Variant::from(5i32), Variant::from(5.5f64));
}

#[test]
fn widths_do_not_matter_for_equality() {
    assert_eq!(Variant::from(5u8), Variant::from(5i64));
    assert_eq!(Variant::from(5u16), Variant::from(5i32));
}

#[test]
fn decimal_scale_is_visible_to_equality() {
    let plain: Decimal = "5".parse().unwrap();
    let scaled: Decimal = "5.00".parse().unwrap();
    assert_eq!(Variant::from(plain), Variant::from(5i32));
    assert_ne!(Variant::from(scaled), Variant::from(5i32));
}

#[test]
fn bool_equals_its_text_form() {
    assert_eq!(Variant::from(true), Variant::from("true"));
    assert_ne!(Variant::from(true), Variant::from("True"));
}

#[test]
fn char_equals_single_char_string() {
    assert_eq!(Variant::from('x'), Variant::from("x"));
}

// =============================================================================
// Hashing
// =============================================================================

#[test]
fn equal_variants_hash_identically() {
    let pairs = [
        (Variant::from(5i32), Variant::from("5")),
        (Variant::from(5i32), Variant::from(5.0f64)),
        (Variant::from(true), Variant::from("true")),
        (Variant::empty(), Variant::from("")),
    ];
    for (a, b) in pairs {
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}

#[test]
fn variants_work_as_hash_set_keys() {
    let mut set = HashSet::new();
    set.insert(Variant::from(5i32));
    // Same canonical form, so this is a duplicate, not a second entry.
    set.insert(Variant::from("5"));
    set.insert(Variant::from(6i32));

    assert_eq!(set.len(), 2);
    assert!(set.contains(&Variant::from(5.0f64)));
    assert!(!set.contains(&Variant::from(7i32)));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn equality_is_symmetric(a in any::<i64>(), b in any::<i64>()) {
        let va = Variant::from(a);
        let vb = Variant::from(b);
        prop_assert_eq!(va == vb, vb == va);
    }

    #[test]
    fn every_int_equals_its_own_text(n in any::<i64>()) {
        let as_int = Variant::from(n);
        let as_text = Variant::from(n.to_string());
        prop_assert_eq!(&as_int, &as_text);
        prop_assert_eq!(hash_of(&as_int), hash_of(&as_text));
    }

    #[test]
    fn unequal_strings_make_unequal_variants(
        a in "[a-z]{1,10}",
        b in "[a-z]{1,10}"
    ) {
        let va = Variant::from(a.as_str());
        let vb = Variant::from(b.as_str());
        if a == b {
            prop_assert_eq!(&va, &vb);
        } else {
            prop_assert_ne!(&va, &vb);
        }
    }
}
