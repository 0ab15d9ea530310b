//! A custom numeric policy driven through the full parse/format cycle:
//! a double that stringifies with fixed six-digit precision instead of
//! the shortest round-trippable form.

use polyjson_core::{from_str, to_string, DoublePolicy, Number, NumberPolicy, Value};

/// A double rendered with fixed six-digit precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct SixDigit(f64);

impl From<f64> for SixDigit {
    fn from(value: f64) -> Self {
        SixDigit(value)
    }
}

impl From<SixDigit> for f64 {
    fn from(value: SixDigit) -> f64 {
        value.0
    }
}

struct SixDigitPolicy;

impl NumberPolicy for SixDigitPolicy {
    type Float = SixDigit;

    fn parse_float(text: &str) -> (SixDigit, usize) {
        let (value, consumed) = DoublePolicy::parse_float(text);
        (SixDigit(value), consumed)
    }

    fn parse_unsigned(text: &str, radix: u32) -> (u64, usize) {
        DoublePolicy::parse_unsigned(text, radix)
    }

    fn parse_signed(text: &str, radix: u32) -> (i64, usize) {
        DoublePolicy::parse_signed(text, radix)
    }

    fn is_finite(value: SixDigit) -> bool {
        value.0.is_finite()
    }

    fn from_signed(value: i64) -> SixDigit {
        SixDigit(value as f64)
    }

    fn from_unsigned(value: u64) -> SixDigit {
        SixDigit(value as f64)
    }

    fn write_float(value: SixDigit, out: &mut String) {
        out.push_str(&format!("{:.6}", value.0));
    }
}

type Doc = Value<SixDigitPolicy>;

fn parse(input: &str) -> Doc {
    from_str::<SixDigitPolicy>(input).unwrap()
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn zero_float_dumps_six_digits() {
    let mut doc = Doc::object();
    doc.insert("foo", Doc::float(SixDigit(0.0)));
    assert_eq!(to_string(&doc), r#"{"foo":0.000000}"#);
}

#[test]
fn fractional_float_dumps_six_digits() {
    let mut doc = Doc::object();
    doc.insert("foo", Doc::float(SixDigit(1.2)));
    assert_eq!(to_string(&doc), r#"{"foo":1.200000}"#);
}

#[test]
fn nan_dumps_null() {
    let mut doc = Doc::object();
    doc.insert("foo", Doc::float(SixDigit(f64::NAN)));
    assert_eq!(to_string(&doc), r#"{"foo":null}"#);
}

#[test]
fn infinity_dumps_null() {
    let mut doc = Doc::object();
    doc.insert("foo", Doc::float(SixDigit(f64::INFINITY)));
    assert_eq!(to_string(&doc), r#"{"foo":null}"#);
    doc.insert("foo", Doc::float(SixDigit(f64::NEG_INFINITY)));
    assert_eq!(to_string(&doc), r#"{"foo":null}"#);
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parse_then_dump_fixed_precision() {
    let doc = parse(r#"{"foo": 1.2}"#);
    assert_eq!(to_string(&doc), r#"{"foo":1.200000}"#);
}

#[test]
fn trailing_zeros_are_preserved() {
    // 5.0 keeps all six fractional digits under the fixed-precision
    // formatter, unlike the shortest-form default.
    let doc = parse(r#"{"foo": 5.0}"#);
    assert_eq!(to_string(&doc), r#"{"foo":5.000000}"#);
}

#[test]
fn parsed_field_equals_policy_float() {
    let doc = parse(r#"{"foo": 1.2}"#);
    assert_eq!(doc["foo"], Doc::float(SixDigit(1.2)));
    for (key, value) in doc.as_object().unwrap() {
        assert_eq!(key, "foo");
        assert_eq!(*value, Doc::float(SixDigit(1.2)));
    }
}

#[test]
fn integer_literals_keep_integer_subtype() {
    let doc = parse(r#"{"n": 7, "m": -7}"#);
    assert!(matches!(doc["n"].as_number(), Some(Number::Unsigned(7))));
    assert!(matches!(doc["m"].as_number(), Some(Number::Signed(-7))));
    assert_eq!(to_string(&doc), r#"{"n":7,"m":-7}"#);
}

#[test]
fn overflowing_literal_promotes_to_policy_float() {
    let doc = parse(r#"{"big": 100000000000000000000}"#);
    assert!(matches!(doc["big"].as_number(), Some(Number::Float(_))));
    assert_eq!(to_string(&doc), r#"{"big":100000000000000000000.000000}"#);
}

// ============================================================================
// Copying
// ============================================================================

#[test]
fn clone_dumps_identically() {
    let mut doc = Doc::object();
    doc.insert("foo", Doc::float(SixDigit(1.2)));
    let copy = doc.clone();
    assert_eq!(to_string(&copy), r#"{"foo":1.200000}"#);
}

#[test]
fn mutating_a_clone_leaves_the_original_alone() {
    let mut doc = Doc::object();
    doc.insert("foo", Doc::float(SixDigit(1.2)));
    let mut copy = doc.clone();
    copy["foo"] = Doc::float(SixDigit(9.9));
    assert_eq!(to_string(&doc), r#"{"foo":1.200000}"#);
    assert_eq!(to_string(&copy), r#"{"foo":9.900000}"#);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn policy_float_equality() {
    let mut doc1 = Doc::object();
    let mut doc2 = Doc::object();
    doc1.insert("foo", Doc::float(SixDigit(1.2)));
    doc2.insert("foo", Doc::float(SixDigit(1.2)));
    assert_eq!(doc1["foo"], doc2["foo"]);
    assert_eq!(doc1, doc2);
}

#[test]
fn policy_float_equals_integer() {
    let mut doc = Doc::object();
    doc.insert("foo", Doc::float(SixDigit(5.0)));
    assert!(doc["foo"] == 5i64);
    assert!(5i64 == doc["foo"]);
}

#[test]
fn integer_equals_policy_float() {
    let mut doc = Doc::object();
    doc.insert("foo", Value::from(5i64));
    assert_eq!(doc["foo"], Doc::float(SixDigit(5.0)));
    assert_eq!(Doc::float(SixDigit(5.0)), doc["foo"]);
}

#[test]
fn negative_policy_float_equals_negative_integer() {
    let mut doc = Doc::object();
    doc.insert("foo", Doc::float(SixDigit(-5.0)));
    assert!(doc["foo"] == -5i64);
    assert!(-5i64 == doc["foo"]);

    doc.insert("foo", Value::from(-5i64));
    assert_eq!(doc["foo"], Doc::float(SixDigit(-5.0)));
}

// ============================================================================
// serde interop for a custom policy
// ============================================================================

#[test]
fn custom_policy_serializes_through_serde() {
    let mut doc = Doc::object();
    doc.insert("foo", Doc::float(SixDigit(2.5)));
    doc.insert("n", Value::from(3u64));
    assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"foo":2.5,"n":3}"#);
}

#[test]
fn custom_policy_deserializes_through_serde() {
    let doc: Doc = serde_json::from_str(r#"{"foo":2.5,"n":3}"#).unwrap();
    assert_eq!(doc["foo"], Doc::float(SixDigit(2.5)));
    assert!(matches!(doc["n"].as_number(), Some(Number::Unsigned(3))));
}
