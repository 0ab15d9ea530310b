//! serde `Serialize` support for document values.
//!
//! Available for policies whose float converts into `f64`. Non-finite
//! floats serialize as unit (null), matching the text encoder's
//! substitution rule.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::number::Number;
use crate::policy::NumberPolicy;
use crate::value::Value;

impl<P> Serialize for Number<P>
where
    P: NumberPolicy,
    P::Float: Into<f64>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Signed(v) => serializer.serialize_i64(v),
            Number::Unsigned(v) => serializer.serialize_u64(v),
            Number::Float(v) => {
                if P::is_finite(v) {
                    serializer.serialize_f64(v.into())
                } else {
                    serializer.serialize_unit()
                }
            }
        }
    }
}

impl<P> Serialize for Value<P>
where
    P: NumberPolicy,
    P::Float: Into<f64>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(number) => number.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, item) in entries {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
        }
    }
}
