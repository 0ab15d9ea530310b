//! # polyjson-core
//!
//! JSON document model with a **pluggable numeric policy**: every numeric
//! concern in the tree — how literals become values, how values become
//! text, how finiteness is judged, how integers bridge into the float
//! domain for comparison — is supplied by a [`NumberPolicy`] type
//! parameter instead of being fixed to `f64`.
//!
//! The default [`DoublePolicy`] gives ordinary JSON semantics: `i64`/`u64`
//! integers and IEEE-754 double floats. Substituting a custom policy (a
//! reduced-precision float, a fixed-point decimal) changes every number in
//! the document without touching the parser or writer, and without
//! runtime dispatch.
//!
//! ## Quick start
//!
//! ```rust
//! use polyjson_core::{from_str, to_string, Value};
//!
//! let doc: Value = from_str(r#"{"name":"Alice","score":95.5}"#).unwrap();
//! assert!(doc["name"] == "Alice");
//! assert!(doc["score"] == 95.5);
//! assert_eq!(to_string(&doc), r#"{"name":"Alice","score":95.5}"#);
//! ```
//!
//! Integer-shaped literals keep an integer subtype (`5` re-serializes as
//! `5`, never `5.0`); a literal too large for the 64-bit integers is
//! promoted to the policy's float rather than rejected; and non-finite
//! floats serialize as `null` so the output is always valid JSON.
//!
//! ## Modules
//!
//! - [`policy`] — the [`NumberPolicy`] capability trait and the default
//!   [`DoublePolicy`]
//! - [`number`] — [`Number`], the tagged numeric leaf with cross-subtype
//!   equality and ordering
//! - [`value`] — [`Value`], the document tree
//! - [`decoder`] — text → [`Value`] (recursive descent, offset-carrying
//!   errors)
//! - [`encoder`] — [`Value`] → text (compact and pretty)
//! - [`error`] — [`ParseError`]
//!
//! serde `Serialize`/`Deserialize` impls live on [`Value`] and [`Number`]
//! directly, for policies whose float converts to/from `f64`.

mod de;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod number;
pub mod policy;
mod ser;
pub mod value;

pub use decoder::from_str;
pub use encoder::{to_string, to_string_pretty};
pub use error::{ParseError, Result};
pub use number::Number;
pub use policy::{DoublePolicy, NumberPolicy};
pub use value::Value;
