use crate::shape::{DecodeError, DecodeOptions, PrimKind, Result, Schema, SchemaError, TypeDesc, Typed, Value, decode_with};

/// Native Rust type that can describe its target shape and take a decoded tree.
pub trait FromTyped: Sized {
	/// Descriptor values of this type decode against.
	fn describe(schema: &Schema) -> std::result::Result<TypeDesc, SchemaError>;

	/// Convert a tree decoded against [`FromTyped::describe`].
	fn from_typed(value: Typed) -> Result<Self>;
}

/// Decode `value` straight into a native type.
pub fn decode_into<T: FromTyped>(schema: &Schema, value: &Value, opt: &DecodeOptions) -> Result<T> {
	let desc = T::describe(schema)?;
	T::from_typed(decode_with(schema, value, &desc, opt)?)
}

fn mismatch(expected: &'static str, got: &Typed) -> DecodeError {
	DecodeError::TypedMismatch {
		expected,
		got: got.kind_name(),
	}
}

impl FromTyped for String {
	fn describe(_: &Schema) -> std::result::Result<TypeDesc, SchemaError> {
		Ok(TypeDesc::Prim(PrimKind::String))
	}

	fn from_typed(value: Typed) -> Result<Self> {
		match value {
			Typed::String(v) => Ok(v.into_string()),
			other => Err(mismatch("string", &other)),
		}
	}
}

impl FromTyped for i64 {
	fn describe(_: &Schema) -> std::result::Result<TypeDesc, SchemaError> {
		Ok(TypeDesc::Prim(PrimKind::Int))
	}

	// `Bool` only reaches here when `bool_as_int` let it through.
	fn from_typed(value: Typed) -> Result<Self> {
		match value {
			Typed::Int(v) => Ok(v),
			Typed::Bool(v) => Ok(i64::from(v)),
			other => Err(mismatch("int", &other)),
		}
	}
}

impl FromTyped for f64 {
	fn describe(_: &Schema) -> std::result::Result<TypeDesc, SchemaError> {
		Ok(TypeDesc::Prim(PrimKind::Float))
	}

	fn from_typed(value: Typed) -> Result<Self> {
		match value {
			Typed::Float(v) => Ok(v),
			other => Err(mismatch("float", &other)),
		}
	}
}

impl FromTyped for bool {
	fn describe(_: &Schema) -> std::result::Result<TypeDesc, SchemaError> {
		Ok(TypeDesc::Prim(PrimKind::Bool))
	}

	fn from_typed(value: Typed) -> Result<Self> {
		match value {
			Typed::Bool(v) => Ok(v),
			other => Err(mismatch("bool", &other)),
		}
	}
}

impl FromTyped for () {
	fn describe(_: &Schema) -> std::result::Result<TypeDesc, SchemaError> {
		Ok(TypeDesc::Null)
	}

	fn from_typed(value: Typed) -> Result<Self> {
		match value {
			Typed::Null => Ok(()),
			other => Err(mismatch("null", &other)),
		}
	}
}

impl FromTyped for Value {
	fn describe(_: &Schema) -> std::result::Result<TypeDesc, SchemaError> {
		Ok(TypeDesc::Any)
	}

	fn from_typed(value: Typed) -> Result<Self> {
		match value {
			Typed::Any(v) => Ok(v),
			other => Err(mismatch("any", &other)),
		}
	}
}

impl<T: FromTyped> FromTyped for Vec<T> {
	fn describe(schema: &Schema) -> std::result::Result<TypeDesc, SchemaError> {
		Ok(TypeDesc::seq(T::describe(schema)?))
	}

	fn from_typed(value: Typed) -> Result<Self> {
		match value {
			Typed::Seq(items) => items.into_iter().map(T::from_typed).collect(),
			other => Err(mismatch("sequence", &other)),
		}
	}
}

impl<T: FromTyped> FromTyped for Option<T> {
	fn describe(schema: &Schema) -> std::result::Result<TypeDesc, SchemaError> {
		Ok(TypeDesc::optional(T::describe(schema)?))
	}

	fn from_typed(value: Typed) -> Result<Self> {
		match value {
			Typed::Null => Ok(None),
			other => T::from_typed(other).map(Some),
		}
	}
}
