use crate::shape::Value;

/// Decoded value whose shape conforms to the target descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Typed {
	/// Null accepted by a null descriptor.
	Null,
	/// Boolean primitive.
	Bool(bool),
	/// Integer primitive.
	Int(i64),
	/// Float primitive.
	Float(f64),
	/// String primitive.
	String(Box<str>),
	/// Wildcard pass-through, left untyped.
	Any(Value),
	/// Decoded sequence elements, in input order.
	Seq(Vec<Typed>),
	/// Constructed record.
	Record(RecordValue),
}

/// Constructed record instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	/// Record type name.
	pub type_name: Box<str>,
	/// Retained fields in declared order.
	pub fields: Vec<FieldValue>,
}

/// One retained record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Decoded field value.
	pub value: Typed,
}

impl Typed {
	/// Short label for the variant.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Typed::Null => "null",
			Typed::Bool(_) => "bool",
			Typed::Int(_) => "int",
			Typed::Float(_) => "float",
			Typed::String(_) => "string",
			Typed::Any(_) => "any",
			Typed::Seq(_) => "sequence",
			Typed::Record(_) => "record",
		}
	}

	/// Whether this is [`Typed::Null`] or a wildcard holding null.
	pub fn is_null(&self) -> bool {
		matches!(self, Typed::Null | Typed::Any(Value::Null))
	}

	/// Field lookup when this is a record.
	pub fn field(&self, name: &str) -> Option<&Typed> {
		match self {
			Typed::Record(record) => record.get(name),
			_ => None,
		}
	}
}

impl RecordValue {
	/// Look up a retained field by name.
	pub fn get(&self, name: &str) -> Option<&Typed> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}

	/// Remove and return a retained field by name.
	pub fn take(&mut self, name: &str) -> Option<Typed> {
		let idx = self.fields.iter().position(|field| field.name.as_ref() == name)?;
		Some(self.fields.remove(idx).value)
	}
}
