use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use serde::Deserialize;

use crate::shape::expr::is_builtin_name;
use crate::shape::{ConstructError, Constructor, FieldDesc, FieldRole, RecordDesc, RecordId, RecordValue, SchemaError, TypeDesc, TypeExpr, Typed};

/// Unresolved field declaration.
#[derive(Debug, Clone)]
pub struct FieldDef {
	/// Field name.
	pub name: Box<str>,
	/// Field type expression.
	pub ty: TypeExpr,
	/// Field role.
	pub role: FieldRole,
}

/// Unresolved record declaration registered on a [`SchemaBuilder`].
#[derive(Clone)]
pub struct RecordDef {
	name: Box<str>,
	fields: Vec<FieldDef>,
	constructor: Option<Constructor>,
}

/// Collects record declarations ahead of the resolution pass.
#[derive(Default, Clone)]
pub struct SchemaBuilder {
	records: Vec<RecordDef>,
}

/// Resolved, immutable arena of record descriptors.
#[derive(Debug, Clone, Default)]
pub struct Schema {
	records: Vec<RecordDesc>,
	by_name: HashMap<Box<str>, RecordId>,
}

impl RecordDef {
	/// Start a record declaration.
	pub fn new(name: &str) -> Self {
		Self {
			name: name.into(),
			fields: Vec::new(),
			constructor: None,
		}
	}

	/// Append a normal field.
	pub fn field(mut self, name: &str, ty: TypeExpr) -> Self {
		self.fields.push(FieldDef {
			name: name.into(),
			ty,
			role: FieldRole::Normal,
		});
		self
	}

	/// Append a construction-only field.
	pub fn init_field(mut self, name: &str, ty: TypeExpr) -> Self {
		self.fields.push(FieldDef {
			name: name.into(),
			ty,
			role: FieldRole::ConstructOnly,
		});
		self
	}

	/// Attach a constructor that runs after every field decodes.
	pub fn constructor<F>(mut self, constructor: F) -> Self
	where
		F: Fn(&RecordDesc, Vec<Typed>) -> Result<RecordValue, ConstructError> + Send + Sync + 'static,
	{
		self.constructor = Some(Arc::new(constructor));
		self
	}

	/// Record name.
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl SchemaBuilder {
	/// Empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a record, builder style.
	pub fn record(mut self, def: RecordDef) -> Self {
		self.records.push(def);
		self
	}

	/// Register a record in place.
	pub fn add(&mut self, def: RecordDef) {
		self.records.push(def);
	}

	/// Resolve every field type and freeze the schema.
	///
	/// Record names may be referenced before they are declared and records may
	/// refer to themselves.
	pub fn build(self) -> Result<Schema, SchemaError> {
		let mut by_name = HashMap::with_capacity(self.records.len());
		for (idx, def) in self.records.iter().enumerate() {
			if is_builtin_name(&def.name) {
				return Err(SchemaError::ReservedName { name: def.name.to_string() });
			}
			match by_name.entry(def.name.clone()) {
				Entry::Occupied(_) => {
					return Err(SchemaError::DuplicateRecord { name: def.name.to_string() });
				}
				Entry::Vacant(slot) => {
					slot.insert(RecordId(idx as u32));
				}
			}
		}

		let mut records = Vec::with_capacity(self.records.len());
		for def in self.records {
			let mut fields: Vec<FieldDesc> = Vec::with_capacity(def.fields.len());
			for field in def.fields {
				if fields.iter().any(|seen| seen.name == field.name) {
					return Err(SchemaError::DuplicateField {
						record: def.name.to_string(),
						field: field.name.to_string(),
					});
				}

				let context = format!("{}.{}", def.name, field.name);
				let mut ty = resolve_expr(&by_name, &field.ty, &context)?;
				if field.role == FieldRole::ConstructOnly && !matches!(ty, TypeDesc::Deferred(_)) {
					ty = TypeDesc::deferred(ty);
				}
				fields.push(FieldDesc {
					name: field.name,
					ty,
					role: field.role,
				});
			}

			records.push(RecordDesc {
				name: def.name,
				fields,
				constructor: def.constructor,
			});
		}

		Ok(Schema { records, by_name })
	}
}

impl Schema {
	/// Schema with no records; enough for descriptors without record types.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Look up a record descriptor by id.
	pub fn record(&self, id: RecordId) -> Option<&RecordDesc> {
		self.records.get(id.0 as usize)
	}

	/// Look up a record id by name.
	pub fn record_id(&self, name: &str) -> Option<RecordId> {
		self.by_name.get(name).copied()
	}

	/// All records in declaration order.
	pub fn records(&self) -> impl Iterator<Item = (RecordId, &RecordDesc)> {
		self.records.iter().enumerate().map(|(idx, item)| (RecordId(idx as u32), item))
	}

	/// Number of declared records.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Whether no records are declared.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Resolve a target expression against this schema's records.
	pub fn resolve(&self, expr: &TypeExpr) -> Result<TypeDesc, SchemaError> {
		resolve_expr(&self.by_name, expr, "target")
	}

	/// Parse and resolve a target expression.
	pub fn resolve_str(&self, text: &str) -> Result<TypeDesc, SchemaError> {
		self.resolve(&TypeExpr::parse(text)?)
	}

	/// Render a descriptor using record names.
	pub fn render(&self, desc: &TypeDesc) -> String {
		match desc {
			TypeDesc::Record(id) => match self.record(*id) {
				Some(record) => record.name().to_owned(),
				None => desc.to_string(),
			},
			TypeDesc::Seq(inner) => format!("list<{}>", self.render(inner)),
			TypeDesc::Deferred(inner) => format!("init<{}>", self.render(inner)),
			TypeDesc::Union(items) => items.iter().map(|item| self.render(item)).collect::<Vec<_>>().join(" | "),
			TypeDesc::Null | TypeDesc::Any | TypeDesc::Prim(_) => desc.to_string(),
		}
	}
}

fn resolve_expr(by_name: &HashMap<Box<str>, RecordId>, expr: &TypeExpr, context: &str) -> Result<TypeDesc, SchemaError> {
	Ok(match expr {
		TypeExpr::Named(name) => match by_name.get(name) {
			Some(id) => TypeDesc::Record(*id),
			None => {
				return Err(SchemaError::UnresolvedReference {
					name: name.to_string(),
					context: context.to_owned(),
				});
			}
		},
		TypeExpr::Seq(inner) => TypeDesc::seq(resolve_expr(by_name, inner, context)?),
		TypeExpr::Deferred(inner) => TypeDesc::deferred(resolve_expr(by_name, inner, context)?),
		TypeExpr::Null => TypeDesc::Null,
		TypeExpr::Any => TypeDesc::Any,
		TypeExpr::Prim(kind) => TypeDesc::Prim(*kind),
		TypeExpr::Union(items) => {
			if items.is_empty() {
				return Err(SchemaError::EmptyUnion { context: context.to_owned() });
			}
			let resolved = items.iter().map(|item| resolve_expr(by_name, item, context)).collect::<Result<Vec<_>, _>>()?;
			TypeDesc::Union(resolved.into_boxed_slice())
		}
	})
}

/// On-disk schema document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
	/// Record declarations.
	#[serde(default)]
	pub records: Vec<RecordEntry>,
}

/// One record in a [`SchemaFile`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordEntry {
	/// Record name.
	pub name: String,
	/// Fields in declared order.
	#[serde(default)]
	pub fields: Vec<FieldEntry>,
}

/// One field in a [`RecordEntry`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
	/// Field name.
	pub name: String,
	/// Type expression text.
	#[serde(rename = "type")]
	pub ty: String,
	/// Construction-only field.
	#[serde(default)]
	pub init: bool,
}

impl SchemaFile {
	/// Parse a schema document from JSON text.
	pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
		Ok(serde_json::from_str(text)?)
	}

	/// Parse every field expression into a builder.
	pub fn into_builder(self) -> Result<SchemaBuilder, SchemaError> {
		let mut builder = SchemaBuilder::new();
		for record in self.records {
			let mut def = RecordDef::new(&record.name);
			for field in record.fields {
				let ty = TypeExpr::parse(&field.ty)?;
				def = if field.init { def.init_field(&field.name, ty) } else { def.field(&field.name, ty) };
			}
			builder.add(def);
		}
		Ok(builder)
	}

	/// Parse, register, and resolve in one step.
	pub fn build(self) -> Result<Schema, SchemaError> {
		self.into_builder()?.build()
	}
}

#[cfg(test)]
mod tests;
