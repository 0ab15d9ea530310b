//! The numeric leaf of the document tree.

use std::cmp::Ordering;
use std::fmt;

use crate::policy::NumberPolicy;

/// A single JSON number, tagged with the subtype chosen at construction.
///
/// The tag never changes after construction: `5` parses as
/// [`Number::Unsigned`] and `5.0` as [`Number::Float`], and each stays
/// that way for the life of the value even though the two compare equal.
/// Integer literals whose magnitude exceeds the 64-bit range are promoted
/// to `Float` by the decoder at construction time, never silently wrapped.
pub enum Number<P: NumberPolicy> {
    /// A signed 64-bit integer. Literals with a leading `-` land here.
    Signed(i64),
    /// An unsigned 64-bit integer. Non-negative literals land here.
    Unsigned(u64),
    /// A floating-point value in the policy's representation.
    Float(P::Float),
}

impl<P: NumberPolicy> Number<P> {
    /// `true` for either integer subtype.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Signed(_) | Number::Unsigned(_))
    }

    /// `true` for the float subtype.
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// The value as `i64`, if the subtype is integral and the value fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Signed(v) => Some(v),
            Number::Unsigned(v) => i64::try_from(v).ok(),
            Number::Float(_) => None,
        }
    }

    /// The value as `u64`, if the subtype is integral and the value fits.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Signed(v) => u64::try_from(v).ok(),
            Number::Unsigned(v) => Some(v),
            Number::Float(_) => None,
        }
    }

    /// The float payload, if the subtype is `Float`.
    pub fn as_float(&self) -> Option<P::Float> {
        match *self {
            Number::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Convert into the float domain regardless of subtype.
    ///
    /// Lossy for integers beyond the float's exact integer range.
    pub fn to_float(&self) -> P::Float {
        match *self {
            Number::Signed(v) => P::from_signed(v),
            Number::Unsigned(v) => P::from_unsigned(v),
            Number::Float(v) => v,
        }
    }

    /// `true` unless this is a float the policy reports non-finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            Number::Float(v) => P::is_finite(v),
            _ => true,
        }
    }
}

impl<P: NumberPolicy> Clone for Number<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: NumberPolicy> Copy for Number<P> {}

impl<P: NumberPolicy> fmt::Debug for Number<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Signed(v) => f.debug_tuple("Signed").field(v).finish(),
            Number::Unsigned(v) => f.debug_tuple("Unsigned").field(v).finish(),
            Number::Float(v) => f.debug_tuple("Float").field(v).finish(),
        }
    }
}

/// Cross-subtype equality: two numbers carrying the same mathematical
/// value are equal regardless of subtype. A negative `Signed` never
/// equals an `Unsigned`. Integer-to-float comparison converts the integer
/// into the float domain, which can lose precision for magnitudes beyond
/// the float's exact integer range — an accepted, documented limitation.
impl<P: NumberPolicy> PartialEq for Number<P> {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Signed(a), Number::Signed(b)) => a == b,
            (Number::Unsigned(a), Number::Unsigned(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Signed(a), Number::Unsigned(b)) | (Number::Unsigned(b), Number::Signed(a)) => {
                a >= 0 && a as u64 == b
            }
            (Number::Signed(a), Number::Float(b)) | (Number::Float(b), Number::Signed(a)) => {
                P::from_signed(a) == b
            }
            (Number::Unsigned(a), Number::Float(b)) | (Number::Float(b), Number::Unsigned(a)) => {
                P::from_unsigned(a) == b
            }
        }
    }
}

/// Ordering follows the same cross-subtype conversion rules as equality.
/// Comparisons involving a float the policy cannot order (NaN and
/// friends) yield `None`.
impl<P: NumberPolicy> PartialOrd for Number<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Signed(a), Number::Signed(b)) => Some(a.cmp(&b)),
            (Number::Unsigned(a), Number::Unsigned(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Signed(a), Number::Unsigned(b)) => {
                if a < 0 {
                    Some(Ordering::Less)
                } else {
                    Some((a as u64).cmp(&b))
                }
            }
            (Number::Unsigned(a), Number::Signed(b)) => {
                if b < 0 {
                    Some(Ordering::Greater)
                } else {
                    Some(a.cmp(&(b as u64)))
                }
            }
            (Number::Signed(a), Number::Float(b)) => P::from_signed(a).partial_cmp(&b),
            (Number::Float(a), Number::Signed(b)) => a.partial_cmp(&P::from_signed(b)),
            (Number::Unsigned(a), Number::Float(b)) => P::from_unsigned(a).partial_cmp(&b),
            (Number::Float(a), Number::Unsigned(b)) => a.partial_cmp(&P::from_unsigned(b)),
        }
    }
}

impl<P: NumberPolicy> From<i64> for Number<P> {
    fn from(value: i64) -> Self {
        Number::Signed(value)
    }
}

impl<P: NumberPolicy> From<u64> for Number<P> {
    fn from(value: u64) -> Self {
        Number::Unsigned(value)
    }
}
