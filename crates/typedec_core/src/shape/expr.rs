use std::fmt;

use crate::shape::{PrimKind, SchemaError};

const MAX_NESTING: u32 = 128;

/// Whether `name` is claimed by the type syntax and cannot name a record.
pub(crate) fn is_builtin_name(name: &str) -> bool {
	matches!(
		name,
		"string" | "str" | "int" | "integer" | "float" | "bool" | "boolean" | "null" | "none" | "any" | "object" | "list" | "optional" | "init"
	)
}

/// Unresolved type expression; record references are still names.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
	/// Reference to a record by name.
	Named(Box<str>),
	/// Sequence of the element expression.
	Seq(Box<TypeExpr>),
	/// Construction-only wrapper.
	Deferred(Box<TypeExpr>),
	/// Null.
	Null,
	/// Wildcard.
	Any,
	/// Primitive.
	Prim(PrimKind),
	/// Ordered alternatives.
	Union(Vec<TypeExpr>),
}

impl TypeExpr {
	/// Record reference.
	pub fn named(name: &str) -> Self {
		TypeExpr::Named(name.into())
	}

	/// Sequence of `element`.
	pub fn seq(element: TypeExpr) -> Self {
		TypeExpr::Seq(Box::new(element))
	}

	/// `T | null`, flattening when `T` is already a union.
	pub fn optional(inner: TypeExpr) -> Self {
		match inner {
			TypeExpr::Union(mut items) => {
				items.push(TypeExpr::Null);
				TypeExpr::Union(items)
			}
			other => TypeExpr::Union(vec![other, TypeExpr::Null]),
		}
	}

	/// Construction-only wrapper around `inner`.
	pub fn deferred(inner: TypeExpr) -> Self {
		TypeExpr::Deferred(Box::new(inner))
	}

	/// Parse type syntax such as `list<Person | string>` or `optional<int>`.
	pub fn parse(input: &str) -> Result<Self, SchemaError> {
		let mut parser = Parser {
			input,
			bytes: input.as_bytes(),
			idx: 0,
			nesting: 0,
		};
		let expr = parser.union()?;
		parser.skip_ws();
		if parser.idx < parser.bytes.len() {
			return Err(parser.error("unexpected trailing input"));
		}
		Ok(expr)
	}
}

struct Parser<'a> {
	input: &'a str,
	bytes: &'a [u8],
	idx: usize,
	nesting: u32,
}

impl Parser<'_> {
	fn union(&mut self) -> Result<TypeExpr, SchemaError> {
		let first = self.term()?;
		let mut items = vec![first];

		loop {
			self.skip_ws();
			if self.idx < self.bytes.len() && self.bytes[self.idx] == b'|' {
				self.idx += 1;
				items.push(self.term()?);
			} else {
				break;
			}
		}

		if items.len() == 1 {
			Ok(items.pop().unwrap_or(TypeExpr::Any))
		} else {
			Ok(TypeExpr::Union(items))
		}
	}

	fn term(&mut self) -> Result<TypeExpr, SchemaError> {
		self.skip_ws();
		let start = self.idx;
		while self.idx < self.bytes.len() {
			let byte = self.bytes[self.idx];
			if byte.is_ascii_alphanumeric() || byte == b'_' {
				self.idx += 1;
			} else {
				break;
			}
		}

		if self.idx == start {
			return Err(self.error("expected type name"));
		}
		if self.bytes[start].is_ascii_digit() {
			self.idx = start;
			return Err(self.error("type name cannot start with a digit"));
		}

		let ident = &self.input[start..self.idx];
		let arg = self.type_arg()?;

		let expr = match (ident, arg) {
			("string" | "str", None) => TypeExpr::Prim(PrimKind::String),
			("int" | "integer", None) => TypeExpr::Prim(PrimKind::Int),
			("float", None) => TypeExpr::Prim(PrimKind::Float),
			("bool" | "boolean", None) => TypeExpr::Prim(PrimKind::Bool),
			("null" | "none", None) => TypeExpr::Null,
			("any" | "object", None) => TypeExpr::Any,
			("list", None) => TypeExpr::seq(TypeExpr::Any),
			("list", Some(inner)) => TypeExpr::seq(inner),
			("optional", Some(inner)) => TypeExpr::optional(inner),
			("init", None) => TypeExpr::Any,
			("init", Some(inner)) => TypeExpr::deferred(inner),
			("optional", None) => {
				self.idx = start;
				return Err(self.error("optional requires a type argument"));
			}
			(_, Some(_)) => {
				self.idx = start;
				return Err(self.error("type does not take arguments"));
			}
			(name, None) => TypeExpr::named(name),
		};
		Ok(expr)
	}

	fn type_arg(&mut self) -> Result<Option<TypeExpr>, SchemaError> {
		self.skip_ws();
		if self.idx >= self.bytes.len() || self.bytes[self.idx] != b'<' {
			return Ok(None);
		}
		if self.nesting >= MAX_NESTING {
			return Err(self.error("type expression nested too deeply"));
		}
		self.idx += 1;

		self.nesting += 1;
		let inner = self.union()?;
		self.nesting -= 1;
		self.skip_ws();
		if self.idx >= self.bytes.len() || self.bytes[self.idx] != b'>' {
			return Err(self.error("expected '>'"));
		}
		self.idx += 1;
		Ok(Some(inner))
	}

	fn skip_ws(&mut self) {
		while self.idx < self.bytes.len() && self.bytes[self.idx].is_ascii_whitespace() {
			self.idx += 1;
		}
	}

	fn error(&self, reason: &'static str) -> SchemaError {
		SchemaError::Syntax {
			input: self.input.to_owned(),
			at: self.idx,
			reason,
		}
	}
}

impl fmt::Display for TypeExpr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TypeExpr::Named(name) => f.write_str(name),
			TypeExpr::Seq(inner) => write!(f, "list<{inner}>"),
			TypeExpr::Deferred(inner) => write!(f, "init<{inner}>"),
			TypeExpr::Null => f.write_str("null"),
			TypeExpr::Any => f.write_str("any"),
			TypeExpr::Prim(kind) => kind.fmt(f),
			TypeExpr::Union(items) => {
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

#[cfg(test)]
mod tests;
