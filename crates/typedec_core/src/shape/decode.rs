use tracing::{debug, trace};

use crate::shape::classify::{Loc, classify_at, shape_error};
use crate::shape::{DecodeError, NO_RESULT, Possible, PrimKind, RecordDesc, Result, Rule, Schema, TypeDesc, Typed, Value, ValueKind};

static MISSING: Value = Value::Null;

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum value nesting depth; each record field and sequence element is one level.
	pub max_depth: u32,
	/// Accept booleans where an integer is declared.
	pub bool_as_int: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			bool_as_int: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that accepts booleans as integers.
	pub fn lenient() -> Self {
		Self {
			bool_as_int: true,
			..Self::default()
		}
	}
}

/// Decode `value` against `desc` with default options.
pub fn decode(schema: &Schema, value: &Value, desc: &TypeDesc) -> Result<Typed> {
	decode_with(schema, value, desc, &DecodeOptions::default())
}

/// Decode `value` against `desc`.
///
/// All-or-nothing: the first failure outside a union aborts the call.
pub fn decode_with(schema: &Schema, value: &Value, desc: &TypeDesc, opt: &DecodeOptions) -> Result<Typed> {
	decode_impl(schema, value, desc, opt, &Loc::ROOT, 0)
}

/// Decode one key of a mapping, telling an absent key apart from an explicit null.
pub fn decode_property(schema: &Schema, mapping: &Value, key: &str, desc: &TypeDesc, opt: &DecodeOptions) -> Result<Possible<Typed>> {
	let root = Loc::ROOT;
	if mapping.kind() != ValueKind::Map {
		return Err(shape_error(ValueKind::Map, mapping.kind(), &root));
	}

	match mapping.get(key) {
		None => Ok(Possible::Absent(NO_RESULT)),
		Some(item) => {
			let at = root.field(key);
			decode_impl(schema, item, desc, opt, &at, 0).map(Possible::Present)
		}
	}
}

fn decode_impl(schema: &Schema, value: &Value, desc: &TypeDesc, opt: &DecodeOptions, at: &Loc<'_>, depth: u32) -> Result<Typed> {
	if depth >= opt.max_depth {
		return Err(DecodeError::DepthExceeded {
			max_depth: opt.max_depth,
			at: at.to_string().into_boxed_str(),
		});
	}

	match classify_at(schema, value, desc, opt, at)? {
		Rule::Record(record) => decode_record(schema, value, record, opt, at, depth),
		Rule::Seq(element) => {
			let Value::Seq(items) = value else {
				return Err(shape_error(ValueKind::Seq, value.kind(), at));
			};
			let mut out = Vec::with_capacity(items.len());
			for (idx, item) in items.iter().enumerate() {
				let item_at = at.index(idx);
				out.push(decode_impl(schema, item, element, opt, &item_at, depth + 1)?);
			}
			Ok(Typed::Seq(out))
		}
		Rule::Deferred(inner) => decode_impl(schema, value, inner, opt, at, depth),
		Rule::Null => Ok(Typed::Null),
		Rule::Any => Ok(Typed::Any(value.clone())),
		Rule::Prim(kind) => primitive(kind, value, at),
		Rule::Union(items) => decode_union(schema, value, items, opt, at, depth),
	}
}

fn decode_record(schema: &Schema, value: &Value, record: &RecordDesc, opt: &DecodeOptions, at: &Loc<'_>, depth: u32) -> Result<Typed> {
	let mut values = Vec::with_capacity(record.fields().len());
	for field in record.fields() {
		let input = value.get(&field.name).unwrap_or(&MISSING);
		let field_at = at.field(&field.name);
		values.push(decode_impl(schema, input, &field.ty, opt, &field_at, depth + 1)?);
	}

	record.construct(values).map(Typed::Record).map_err(DecodeError::Construct)
}

fn decode_union(schema: &Schema, value: &Value, items: &[TypeDesc], opt: &DecodeOptions, at: &Loc<'_>, depth: u32) -> Result<Typed> {
	let mut failures = Vec::with_capacity(items.len());
	for (idx, item) in items.iter().enumerate() {
		match decode_impl(schema, value, item, opt, at, depth) {
			Ok(typed) => return Ok(typed),
			Err(err @ (DecodeError::Construct(_) | DecodeError::DepthExceeded { .. })) => return Err(err),
			Err(err) => {
				trace!(at = %at, alternative = idx, error = %err, "union alternative rejected");
				failures.push(err.to_string());
			}
		}
	}

	let desc = items.iter().map(|item| schema.render(item)).collect::<Vec<_>>().join(" | ");
	debug!(at = %at, union = %desc, attempts = failures.len(), "union exhausted");
	Err(DecodeError::UnionExhausted {
		desc,
		at: at.to_string().into_boxed_str(),
		failures,
	})
}

fn primitive(kind: PrimKind, value: &Value, at: &Loc<'_>) -> Result<Typed> {
	match value {
		Value::Bool(v) => Ok(Typed::Bool(*v)),
		Value::Int(v) => Ok(Typed::Int(*v)),
		Value::Float(v) => Ok(Typed::Float(*v)),
		Value::String(v) => Ok(Typed::String(v.clone())),
		Value::Null | Value::Seq(_) | Value::Map(_) => Err(shape_error(kind.value_kind(), value.kind(), at)),
	}
}
