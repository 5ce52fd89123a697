mod classify;
mod decode;
mod desc;
mod error;
mod expr;
mod schema;
mod sentinel;
mod target;
mod typed;
mod value;

/// Rule classification for one `(value, descriptor)` pair.
pub use classify::{Rule, classify};
/// Recursive decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_property, decode_with};
/// Resolved type descriptor representation.
pub use desc::{ConstructError, Constructor, FieldDesc, FieldRole, PrimKind, RecordDesc, RecordId, TypeDesc};
/// Error and result aliases.
pub use error::{DecodeError, Result, SchemaError};
/// Unresolved type expressions and their text syntax.
pub use expr::TypeExpr;
/// Record registration, resolution pass, and schema file loading.
pub use schema::{FieldDef, FieldEntry, RecordDef, RecordEntry, Schema, SchemaBuilder, SchemaFile};
/// Process-wide "no result" marker.
pub use sentinel::{NO_RESULT, NoResult, Possible, is_no_result};
/// Bridge from decoded trees into native Rust types.
pub use target::{FromTyped, decode_into};
/// Decoded output value types.
pub use typed::{FieldValue, RecordValue, Typed};
/// Dynamic input value types.
pub use value::{Value, ValueKind};
