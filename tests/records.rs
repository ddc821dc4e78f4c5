use cmpmode::{comparable_record, compare, try_compare, CmpMode, CompareError, HashCodeProvider, Kind, Record};
use pretty_assertions::assert_eq;
use std::fmt;

// Hash code is independent of the payload.
struct Hashed {
    code: i64,
    payload: &'static str,
}

impl HashCodeProvider for Hashed {
    fn hash_code(&self) -> i64 {
        self.code
    }
}

// Both capabilities; hash code must win.
impl fmt::Display for Hashed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.payload)
    }
}

impl Record for Hashed {
    fn as_hash_code(&self) -> Option<&dyn HashCodeProvider> {
        Some(self)
    }

    fn as_stringer(&self) -> Option<&dyn cmpmode::Stringer> {
        Some(self)
    }
}

struct Named(&'static str);

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name:{}", self.0)
    }
}

impl Record for Named {
    fn as_stringer(&self) -> Option<&dyn cmpmode::Stringer> {
        Some(self)
    }
}

// Capabilities chosen per value, so two operands of one type can disagree.
struct Mixed {
    code: Option<i64>,
    name: Option<&'static str>,
}

impl HashCodeProvider for Mixed {
    fn hash_code(&self) -> i64 {
        self.code.unwrap_or_default()
    }
}

impl fmt::Display for Mixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.unwrap_or_default())
    }
}

impl Record for Mixed {
    fn as_hash_code(&self) -> Option<&dyn HashCodeProvider> {
        self.code.map(|_| self as &dyn HashCodeProvider)
    }

    fn as_stringer(&self) -> Option<&dyn cmpmode::Stringer> {
        self.name.map(|_| self as &dyn cmpmode::Stringer)
    }
}

#[allow(dead_code)]
struct Plain {
    x: i32,
}

impl Record for Plain {}

comparable_record!(Hashed, Named, Mixed, Plain);

#[test]
fn test_hash_codes_order_records() {
    let a = Hashed { code: 5, payload: "zzz" };
    let b = Hashed { code: 9, payload: "aaa" };
    assert!(compare(&a, &b, CmpMode::Less));
    assert!(compare(&b, &a, CmpMode::Greater));
    assert!(!compare(&a, &b, CmpMode::Equal));
}

#[test]
fn test_equal_hash_codes_ignore_fields() {
    let a = Hashed { code: 1, payload: "left" };
    let b = Hashed { code: 1, payload: "right" };
    assert!(compare(&a, &b, CmpMode::Equal));
}

#[test]
fn test_string_form_when_no_hash_code() {
    let a = Named("alice");
    let b = Named("bob");
    assert!(compare(&a, &b, CmpMode::Less));
    assert!(compare(&Box::new(&b), &Box::new(&a), CmpMode::GreaterOrEqual));
}

#[test]
fn test_record_without_capability_is_unsupported() {
    let a = Plain { x: 1 };
    let b = Plain { x: 2 };
    assert!(!compare(&a, &b, CmpMode::Less));
    assert_eq!(
        try_compare(&a, &b, CmpMode::Equal),
        Err(CompareError::Unsupported { kind: Kind::Record })
    );
}

#[test]
fn test_one_sided_hash_code_falls_back_to_string_form() {
    let a = Mixed { code: Some(9), name: Some("a") };
    let b = Mixed { code: None, name: Some("b") };
    // By hash code 9 would be the larger; the string form decides instead.
    assert!(compare(&a, &b, CmpMode::Less));
    assert!(compare(&b, &a, CmpMode::Greater));
    assert!(!compare(&a, &b, CmpMode::Equal));
}

#[test]
fn test_one_sided_string_form_is_unsupported() {
    let a = Mixed { code: None, name: Some("a") };
    let b = Mixed { code: None, name: None };
    assert_eq!(
        try_compare(&a, &b, CmpMode::Less),
        Err(CompareError::Unsupported { kind: Kind::Record })
    );
    assert_eq!(
        try_compare(&b, &a, CmpMode::Equal),
        Err(CompareError::Unsupported { kind: Kind::Record })
    );
    assert!(!compare(&a, &b, CmpMode::Less));
}
