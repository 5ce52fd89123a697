use thiserror::Error;

use crate::shape::{ConstructError, ValueKind};

/// Crate-local result type.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Errors produced while classifying and decoding a dynamic value.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Input kind does not satisfy the matched rule's precondition.
	#[error("expected {expected}, got {got} at {at}")]
	Shape {
		/// Kind the rule requires.
		expected: ValueKind,
		/// Kind actually found.
		got: ValueKind,
		/// Location path of the offending value.
		at: Box<str>,
	},
	/// No classification rule matched the descriptor.
	#[error("unsupported type {desc} at {at}")]
	UnsupportedType {
		/// Rendered descriptor.
		desc: String,
		/// Location path of the offending value.
		at: Box<str>,
	},
	/// Every union alternative failed.
	#[error("no alternative of {desc} matched at {at}: {}", .failures.join(" && "))]
	UnionExhausted {
		/// Rendered union descriptor.
		desc: String,
		/// Location path of the union value.
		at: Box<str>,
		/// Each alternative's failure message, in attempted order.
		failures: Vec<String>,
	},
	/// Record constructor failure, forwarded untouched.
	#[error(transparent)]
	Construct(ConstructError),
	/// Descriptor nesting exceeded the configured depth.
	#[error("decode depth exceeded (max={max_depth}) at {at}")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
		/// Location path where the ceiling was hit.
		at: Box<str>,
	},
	/// Parser number cannot be represented as `i64` or `f64`.
	#[error("number out of range: {value} at {at}")]
	NumberOutOfRange {
		/// Number literal text.
		value: String,
		/// Location path of the number in the input document.
		at: Box<str>,
	},
	/// Native target could not describe itself against the schema.
	#[error("schema: {0}")]
	Schema(#[from] SchemaError),
	/// Decoded tree did not have the variant a native target expects.
	#[error("typed mismatch: expected {expected}, got {got}")]
	TypedMismatch {
		/// Expected typed variant.
		expected: &'static str,
		/// Actual typed variant.
		got: &'static str,
	},
}

impl DecodeError {
	/// Location path, when the error is tied to one.
	pub fn at(&self) -> Option<&str> {
		match self {
			DecodeError::Shape { at, .. }
			| DecodeError::UnsupportedType { at, .. }
			| DecodeError::UnionExhausted { at, .. }
			| DecodeError::DepthExceeded { at, .. }
			| DecodeError::NumberOutOfRange { at, .. } => Some(at.as_ref()),
			DecodeError::Construct(_) | DecodeError::Schema(_) | DecodeError::TypedMismatch { .. } => None,
		}
	}

	/// Whether this error came from a record constructor.
	pub fn is_construct(&self) -> bool {
		matches!(self, DecodeError::Construct(_))
	}

	/// Recover the constructor's own error.
	pub fn into_construct_error(self) -> Option<ConstructError> {
		match self {
			DecodeError::Construct(source) => Some(source),
			_ => None,
		}
	}
}

/// Errors produced while building and resolving a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
	/// A type expression referenced a record name that was never declared.
	#[error("unresolved type reference {name} in {context}")]
	UnresolvedReference {
		/// Referenced name.
		name: String,
		/// Where the reference appeared.
		context: String,
	},
	/// A record name was declared twice.
	#[error("duplicate record {name}")]
	DuplicateRecord {
		/// Record name.
		name: String,
	},
	/// A field name was declared twice within one record.
	#[error("duplicate field {field} on {record}")]
	DuplicateField {
		/// Record name.
		record: String,
		/// Field name.
		field: String,
	},
	/// A record was named after a built-in type keyword.
	#[error("record name {name} is reserved by the type syntax")]
	ReservedName {
		/// Record name.
		name: String,
	},
	/// A union with no alternatives.
	#[error("empty union in {context}")]
	EmptyUnion {
		/// Where the union appeared.
		context: String,
	},
	/// Type expression text is malformed.
	#[error("invalid type expression {input:?} at {at}: {reason}")]
	Syntax {
		/// Original expression text.
		input: String,
		/// Byte offset of the problem.
		at: usize,
		/// What was expected.
		reason: &'static str,
	},
	/// Schema file JSON is malformed.
	#[error("schema json: {0}")]
	Json(#[from] serde_json::Error),
}
