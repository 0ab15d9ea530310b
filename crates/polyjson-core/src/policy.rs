//! The numeric policy: the capability set a number-type family supplies.
//!
//! Every numeric representation in the document tree is a policy parameter
//! rather than a fixed type. The decoder asks the policy to convert literal
//! text into values, the encoder asks it to render floats back into text,
//! and the value model asks it to bridge integers into the float domain for
//! cross-subtype comparison. A policy is a stateless set of associated
//! functions, so swapping one in changes how every number in a
//! [`Value`](crate::Value) tree is parsed, compared, and printed without
//! touching the parser or writer internals — and without runtime dispatch.

use std::fmt::Debug;

/// Capability contract for a pluggable numeric-type family.
///
/// All functions are pure. The parse functions report the number of bytes
/// consumed from the front of `text`; **zero consumed bytes signals
/// failure** — policies never panic and never return errors directly.
/// The integer parsers saturate on overflow (at `u64::MAX`, or at the
/// `i64` bounds for the signed form) the way the C `strtoull`/`strtoll`
/// primitives clamp, while still consuming every digit; the decoder
/// detects the saturated result and falls back to the float
/// representation so the magnitude survives at reduced precision.
pub trait NumberPolicy {
    /// The floating-point representation this policy parses into and
    /// renders from.
    type Float: Copy + PartialEq + PartialOrd + Debug;

    /// Parse a floating-point literal from the front of `text`.
    ///
    /// Returns the value and the count of bytes consumed. Malformed input
    /// yields an arbitrary value with zero consumed bytes, which callers
    /// must treat as a parse failure.
    fn parse_float(text: &str) -> (Self::Float, usize);

    /// Parse an unsigned integer in the given radix, saturating at
    /// `u64::MAX` on overflow.
    fn parse_unsigned(text: &str, radix: u32) -> (u64, usize);

    /// Parse an optionally signed integer in the given radix, saturating
    /// at the `i64` bounds on overflow.
    fn parse_signed(text: &str, radix: u32) -> (i64, usize);

    /// `true` for ordinary numbers, `false` for NaN/infinity-equivalents.
    ///
    /// Values reported non-finite serialize as the JSON `null` literal. A
    /// policy may declare large-but-finite values non-finite; nothing in
    /// the document model assumes IEEE-754 beyond this predicate.
    fn is_finite(value: Self::Float) -> bool;

    /// Convert a signed integer into the float domain. Used for
    /// cross-subtype comparison; may lose precision for magnitudes beyond
    /// the float's exact integer range.
    fn from_signed(value: i64) -> Self::Float;

    /// Convert an unsigned integer into the float domain.
    fn from_unsigned(value: u64) -> Self::Float;

    /// Render a **finite** float as JSON number text. The encoder checks
    /// [`is_finite`](NumberPolicy::is_finite) first and substitutes
    /// `null` for non-finite values, so implementations only ever see
    /// finite input.
    fn write_float(value: Self::Float, out: &mut String);
}

/// The default policy: IEEE-754 double precision (`f64`).
///
/// Floats render in Rust's shortest round-trippable form, with `.0`
/// appended to integral results so a float subtype survives a
/// format-then-reparse cycle as a float.
#[derive(Debug, Clone, Copy)]
pub struct DoublePolicy;

impl NumberPolicy for DoublePolicy {
    type Float = f64;

    fn parse_float(text: &str) -> (f64, usize) {
        match text.parse::<f64>() {
            Ok(value) => (value, text.len()),
            Err(_) => (f64::NAN, 0),
        }
    }

    fn parse_unsigned(text: &str, radix: u32) -> (u64, usize) {
        let mut value: u64 = 0;
        let mut saturated = false;
        let mut consumed = 0;
        for (i, c) in text.char_indices() {
            let Some(digit) = c.to_digit(radix) else { break };
            consumed = i + c.len_utf8();
            if saturated {
                continue;
            }
            match value
                .checked_mul(u64::from(radix))
                .and_then(|v| v.checked_add(u64::from(digit)))
            {
                Some(v) => value = v,
                None => {
                    value = u64::MAX;
                    saturated = true;
                }
            }
        }
        (value, consumed)
    }

    fn parse_signed(text: &str, radix: u32) -> (i64, usize) {
        let (negative, sign_len) = match text.as_bytes().first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };
        let (magnitude, digits) = Self::parse_unsigned(&text[sign_len..], radix);
        if digits == 0 {
            return (0, 0);
        }
        let value = if negative {
            if magnitude >= 1u64 << 63 {
                i64::MIN
            } else {
                -(magnitude as i64)
            }
        } else if magnitude > i64::MAX as u64 {
            i64::MAX
        } else {
            magnitude as i64
        };
        (value, sign_len + digits)
    }

    fn is_finite(value: f64) -> bool {
        value.is_finite()
    }

    fn from_signed(value: i64) -> f64 {
        value as f64
    }

    fn from_unsigned(value: u64) -> f64 {
        value as f64
    }

    fn write_float(value: f64, out: &mut String) {
        let start = out.len();
        out.push_str(&value.to_string());
        let text = &out[start..];
        if !text.contains('.') && !text.contains('e') && !text.contains('E') {
            out.push_str(".0");
        }
    }
}
