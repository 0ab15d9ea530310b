//! Document-to-text encoder.
//!
//! Converts a [`Value`] tree back into JSON text. Integer subtypes render
//! as minimal decimal text; floats go through the policy, with non-finite
//! values substituted by the `null` literal so the output is always valid
//! JSON. The substitution is lossy: a re-parsed document sees null where
//! the non-finite float was. The encoder has no failure mode.

use std::fmt;

use crate::number::Number;
use crate::policy::NumberPolicy;
use crate::value::Value;

/// Render a document as compact JSON.
pub fn to_string<P: NumberPolicy>(value: &Value<P>) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Render a document as pretty JSON with two-space indentation.
pub fn to_string_pretty<P: NumberPolicy>(value: &Value<P>) -> String {
    let mut out = String::new();
    write_value_pretty(value, 0, &mut out);
    out
}

fn write_value<P: NumberPolicy>(value: &Value<P>, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(number) => write_number(number, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(item, out);
            }
            out.push('}');
        }
    }
}

fn write_value_pretty<P: NumberPolicy>(value: &Value<P>, depth: usize, out: &mut String) {
    match value {
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(entries) if entries.is_empty() => out.push_str("{}"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                push_indent(depth + 1, out);
                write_value_pretty(item, depth + 1, out);
            }
            out.push('\n');
            push_indent(depth, out);
            out.push(']');
        }
        Value::Object(entries) => {
            out.push_str("{\n");
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                push_indent(depth + 1, out);
                write_string(key, out);
                out.push_str(": ");
                write_value_pretty(item, depth + 1, out);
            }
            out.push('\n');
            push_indent(depth, out);
            out.push('}');
        }
        other => write_value(other, out),
    }
}

/// Render one number. Integer subtypes cannot fail; a float is checked
/// for finiteness first and collapses to `null` when the policy reports
/// it non-finite, since JSON number text cannot express NaN or the
/// infinities.
fn write_number<P: NumberPolicy>(number: &Number<P>, out: &mut String) {
    match *number {
        Number::Signed(v) => out.push_str(&v.to_string()),
        Number::Unsigned(v) => out.push_str(&v.to_string()),
        Number::Float(v) => {
            if P::is_finite(v) {
                P::write_float(v, out);
            } else {
                out.push_str("null");
            }
        }
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

impl<P: NumberPolicy> fmt::Display for Value<P> {
    /// The compact JSON form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}
