use std::fmt;

use crate::shape::{DecodeError, DecodeOptions, PrimKind, RecordDesc, Result, Schema, TypeDesc, Value, ValueKind};

/// Decoding rule selected for one `(value, descriptor)` pair.
#[derive(Debug, Clone, Copy)]
pub enum Rule<'s> {
	/// Decode each declared field, then construct.
	Record(&'s RecordDesc),
	/// Decode each element against the element type.
	Seq(&'s TypeDesc),
	/// Decode the same value against the inner type.
	Deferred(&'s TypeDesc),
	/// Value is null.
	Null,
	/// Pass the value through.
	Any,
	/// Value already has the exact primitive kind.
	Prim(PrimKind),
	/// Try alternatives in order.
	Union(&'s [TypeDesc]),
}

/// Select the rule for `desc` and check the value's shape against it.
///
/// Precedence is fixed: record, sequence, deferred, null, wildcard, primitive,
/// union. A record id missing from `schema` matches nothing.
pub fn classify<'s>(schema: &'s Schema, value: &Value, desc: &'s TypeDesc, options: &DecodeOptions) -> Result<Rule<'s>> {
	classify_at(schema, value, desc, options, &Loc::ROOT)
}

pub(crate) fn classify_at<'s>(schema: &'s Schema, value: &Value, desc: &'s TypeDesc, options: &DecodeOptions, at: &Loc<'_>) -> Result<Rule<'s>> {
	if let TypeDesc::Record(id) = desc
		&& let Some(record) = schema.record(*id)
	{
		expect_kind(value, ValueKind::Map, at)?;
		return Ok(Rule::Record(record));
	}

	match desc {
		TypeDesc::Seq(element) => {
			expect_kind(value, ValueKind::Seq, at)?;
			Ok(Rule::Seq(element))
		}
		TypeDesc::Deferred(inner) => Ok(Rule::Deferred(inner)),
		TypeDesc::Null => {
			expect_kind(value, ValueKind::Null, at)?;
			Ok(Rule::Null)
		}
		TypeDesc::Any => Ok(Rule::Any),
		TypeDesc::Prim(kind) => {
			let accepted = value.kind() == kind.value_kind() || (options.bool_as_int && *kind == PrimKind::Int && value.kind() == ValueKind::Bool);
			if !accepted {
				return Err(shape_error(kind.value_kind(), value.kind(), at));
			}
			Ok(Rule::Prim(*kind))
		}
		TypeDesc::Union(items) => Ok(Rule::Union(items)),
		TypeDesc::Record(_) => Err(DecodeError::UnsupportedType {
			desc: desc.to_string(),
			at: at.to_string().into_boxed_str(),
		}),
	}
}

fn expect_kind(value: &Value, expected: ValueKind, at: &Loc<'_>) -> Result<()> {
	if value.kind() != expected {
		return Err(shape_error(expected, value.kind(), at));
	}
	Ok(())
}

pub(crate) fn shape_error(expected: ValueKind, got: ValueKind, at: &Loc<'_>) -> DecodeError {
	DecodeError::Shape {
		expected,
		got,
		at: at.to_string().into_boxed_str(),
	}
}

/// Location of the value being decoded, rendered only when an error needs it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Loc<'a> {
	parent: Option<&'a Loc<'a>>,
	step: Step<'a>,
}

#[derive(Debug, Clone, Copy)]
enum Step<'a> {
	Root,
	Field(&'a str),
	Index(usize),
}

impl Loc<'static> {
	pub(crate) const ROOT: Loc<'static> = Loc { parent: None, step: Step::Root };
}

impl<'a> Loc<'a> {
	pub(crate) fn field(&'a self, name: &'a str) -> Loc<'a> {
		Loc {
			parent: Some(self),
			step: Step::Field(name),
		}
	}

	pub(crate) fn index(&'a self, idx: usize) -> Loc<'a> {
		Loc {
			parent: Some(self),
			step: Step::Index(idx),
		}
	}
}

impl fmt::Display for Loc<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(parent) = self.parent {
			parent.fmt(f)?;
		}
		match self.step {
			Step::Root => f.write_str("$"),
			Step::Field(name) => write!(f, ".{name}"),
			Step::Index(idx) => write!(f, "[{idx}]"),
		}
	}
}
