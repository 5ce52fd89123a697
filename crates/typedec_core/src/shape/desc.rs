use std::fmt;
use std::sync::Arc;

use crate::shape::{FieldValue, RecordValue, Typed, ValueKind};

/// Boxed failure raised by a record constructor; surfaced to callers unchanged.
pub type ConstructError = Box<dyn std::error::Error + Send + Sync>;

/// Record constructor hook.
///
/// Receives the record descriptor and every decoded field value in declared
/// order, construction-only fields included.
pub type Constructor = Arc<dyn Fn(&RecordDesc, Vec<Typed>) -> Result<RecordValue, ConstructError> + Send + Sync>;

/// Index of a record descriptor inside a [`Schema`](crate::shape::Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u32);

/// Resolved target type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDesc {
	/// Named record, stored in the schema arena.
	Record(RecordId),
	/// Homogeneous sequence of the element type.
	Seq(Box<TypeDesc>),
	/// Wrapper forwarding to its inner type without adding structure.
	Deferred(Box<TypeDesc>),
	/// Matches only null.
	Null,
	/// Matches anything and passes it through.
	Any,
	/// Exact primitive kind.
	Prim(PrimKind),
	/// Ordered alternatives, first match wins.
	Union(Box<[TypeDesc]>),
}

/// Primitive scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimKind {
	/// UTF-8 string.
	String,
	/// Integer number.
	Int,
	/// Floating-point number.
	Float,
	/// Boolean.
	Bool,
}

/// How a record field participates in construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldRole {
	/// Decoded and retained on the constructed record.
	#[default]
	Normal,
	/// Decoded and passed to the constructor, then dropped.
	ConstructOnly,
}

/// One declared record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDesc {
	/// Mapping key and field name.
	pub name: Box<str>,
	/// Field type; construction-only fields are wrapped in [`TypeDesc::Deferred`].
	pub ty: TypeDesc,
	/// Field role.
	pub role: FieldRole,
}

/// Resolved record declaration.
#[derive(Clone)]
pub struct RecordDesc {
	pub(crate) name: Box<str>,
	pub(crate) fields: Vec<FieldDesc>,
	pub(crate) constructor: Option<Constructor>,
}

impl TypeDesc {
	/// `T | null`.
	pub fn optional(inner: TypeDesc) -> Self {
		TypeDesc::Union(vec![inner, TypeDesc::Null].into_boxed_slice())
	}

	/// Sequence of `element`.
	pub fn seq(element: TypeDesc) -> Self {
		TypeDesc::Seq(Box::new(element))
	}

	/// Deferred wrapper around `inner`.
	pub fn deferred(inner: TypeDesc) -> Self {
		TypeDesc::Deferred(Box::new(inner))
	}
}

impl PrimKind {
	/// Dynamic kind a value must have to satisfy this primitive.
	pub fn value_kind(self) -> ValueKind {
		match self {
			PrimKind::String => ValueKind::String,
			PrimKind::Int => ValueKind::Int,
			PrimKind::Float => ValueKind::Float,
			PrimKind::Bool => ValueKind::Bool,
		}
	}
}

impl RecordDesc {
	/// Record type name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared fields in order.
	pub fn fields(&self) -> &[FieldDesc] {
		&self.fields
	}

	/// Look up a declared field by name.
	pub fn field(&self, name: &str) -> Option<&FieldDesc> {
		self.fields.iter().find(|field| field.name.as_ref() == name)
	}

	/// Whether a custom constructor is attached.
	pub fn has_constructor(&self) -> bool {
		self.constructor.is_some()
	}

	/// Default construction: keep normal fields, drop construction-only ones.
	pub fn assemble(&self, values: Vec<Typed>) -> RecordValue {
		let fields = self
			.fields
			.iter()
			.zip(values)
			.filter(|(field, _)| field.role == FieldRole::Normal)
			.map(|(field, value)| FieldValue {
				name: field.name.clone(),
				value,
			})
			.collect();

		RecordValue {
			type_name: self.name.clone(),
			fields,
		}
	}

	pub(crate) fn construct(&self, values: Vec<Typed>) -> Result<RecordValue, ConstructError> {
		match &self.constructor {
			Some(constructor) => constructor(self, values),
			None => Ok(self.assemble(values)),
		}
	}
}

impl fmt::Debug for RecordDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RecordDesc")
			.field("name", &self.name)
			.field("fields", &self.fields)
			.field("constructor", &self.constructor.is_some())
			.finish()
	}
}

impl fmt::Display for PrimKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.value_kind().fmt(f)
	}
}

impl fmt::Display for TypeDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TypeDesc::Record(id) => write!(f, "record#{}", id.0),
			TypeDesc::Seq(inner) => write!(f, "list<{inner}>"),
			TypeDesc::Deferred(inner) => write!(f, "init<{inner}>"),
			TypeDesc::Null => f.write_str("null"),
			TypeDesc::Any => f.write_str("any"),
			TypeDesc::Prim(kind) => kind.fmt(f),
			TypeDesc::Union(items) => {
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(" | ")?;
					}
					item.fmt(f)?;
				}
				Ok(())
			}
		}
	}
}
