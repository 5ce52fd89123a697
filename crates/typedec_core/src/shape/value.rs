use std::collections::BTreeMap;
use std::fmt;

use crate::shape::DecodeError;
use crate::shape::classify::Loc;

/// Untyped input node, as produced by a document parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Integer number.
	Int(i64),
	/// Floating-point number.
	Float(f64),
	/// UTF-8 string.
	String(Box<str>),
	/// Ordered list of values.
	Seq(Vec<Value>),
	/// String-keyed mapping with unique keys.
	Map(BTreeMap<Box<str>, Value>),
}

/// Dynamic kind tag of a [`Value`], used for shape checks and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ValueKind {
	Null,
	Bool,
	Int,
	Float,
	String,
	Seq,
	Map,
}

impl Value {
	/// Return the dynamic kind tag of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Null => ValueKind::Null,
			Value::Bool(_) => ValueKind::Bool,
			Value::Int(_) => ValueKind::Int,
			Value::Float(_) => ValueKind::Float,
			Value::String(_) => ValueKind::String,
			Value::Seq(_) => ValueKind::Seq,
			Value::Map(_) => ValueKind::Map,
		}
	}

	/// Look up a key when this value is a mapping.
	pub fn get(&self, key: &str) -> Option<&Value> {
		match self {
			Value::Map(entries) => entries.get(key),
			_ => None,
		}
	}

	/// Adapt a `serde_json` tree.
	pub fn from_json(value: serde_json::Value) -> Result<Self, DecodeError> {
		Self::try_from(value)
	}
}

impl TryFrom<serde_json::Value> for Value {
	type Error = DecodeError;

	fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
		adapt_json(value, &Loc::ROOT)
	}
}

fn adapt_json(value: serde_json::Value, at: &Loc<'_>) -> Result<Value, DecodeError> {
	Ok(match value {
		serde_json::Value::Null => Value::Null,
		serde_json::Value::Bool(v) => Value::Bool(v),
		serde_json::Value::Number(number) => match (number.as_i64(), number.as_f64()) {
			(Some(v), _) => Value::Int(v),
			(None, Some(v)) if number.is_f64() => Value::Float(v),
			_ => {
				return Err(DecodeError::NumberOutOfRange {
					value: number.to_string(),
					at: at.to_string().into_boxed_str(),
				});
			}
		},
		serde_json::Value::String(v) => Value::String(v.into_boxed_str()),
		serde_json::Value::Array(items) => {
			let mut out = Vec::with_capacity(items.len());
			for (idx, item) in items.into_iter().enumerate() {
				out.push(adapt_json(item, &at.index(idx))?);
			}
			Value::Seq(out)
		}
		serde_json::Value::Object(entries) => {
			let mut out = BTreeMap::new();
			for (key, item) in entries {
				let item = adapt_json(item, &at.field(&key))?;
				out.insert(key.into_boxed_str(), item);
			}
			Value::Map(out)
		}
	})
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			ValueKind::Null => "null",
			ValueKind::Bool => "bool",
			ValueKind::Int => "int",
			ValueKind::Float => "float",
			ValueKind::String => "string",
			ValueKind::Seq => "sequence",
			ValueKind::Map => "mapping",
		};
		f.write_str(label)
	}
}
