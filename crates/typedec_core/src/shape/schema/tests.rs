use super::{RecordDef, Schema, SchemaBuilder, SchemaFile};
use crate::shape::{FieldRole, PrimKind, SchemaError, TypeDesc, TypeExpr};

fn int() -> TypeExpr {
	TypeExpr::Prim(PrimKind::Int)
}

#[test]
fn forward_and_self_references_resolve() {
	let schema = SchemaBuilder::new()
		.record(RecordDef::new("Tree").field("root", TypeExpr::named("Node")))
		.record(
			RecordDef::new("Node")
				.field("value", int())
				.field("children", TypeExpr::seq(TypeExpr::named("Node"))),
		)
		.build()
		.expect("schema resolves");

	let tree = schema.record_id("Tree").expect("tree declared");
	let node = schema.record_id("Node").expect("node declared");
	let tree_desc = schema.record(tree).expect("tree record");
	assert_eq!(tree_desc.fields()[0].ty, TypeDesc::Record(node));

	let node_desc = schema.record(node).expect("node record");
	assert_eq!(node_desc.field("children").map(|field| &field.ty), Some(&TypeDesc::seq(TypeDesc::Record(node))));
}

#[test]
fn unresolved_reference_fails_loudly() {
	let err = SchemaBuilder::new()
		.record(RecordDef::new("Book").field("author", TypeExpr::named("Person")))
		.build()
		.expect_err("Person is undeclared");

	match err {
		SchemaError::UnresolvedReference { name, context } => {
			assert_eq!(name, "Person");
			assert_eq!(context, "Book.author");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn duplicate_names_are_rejected() {
	let err = SchemaBuilder::new()
		.record(RecordDef::new("A"))
		.record(RecordDef::new("A"))
		.build()
		.expect_err("duplicate record");
	assert!(matches!(err, SchemaError::DuplicateRecord { .. }));

	let err = SchemaBuilder::new()
		.record(RecordDef::new("A").field("x", int()).field("x", int()))
		.build()
		.expect_err("duplicate field");
	assert!(matches!(err, SchemaError::DuplicateField { .. }));
}

#[test]
fn builtin_type_names_cannot_name_records() {
	for name in ["int", "list", "any", "optional", "init", "none"] {
		let err = SchemaBuilder::new().record(RecordDef::new(name)).build().expect_err("reserved name");
		assert!(matches!(&err, SchemaError::ReservedName { name: got } if got == name), "{err}");
	}
	SchemaBuilder::new().record(RecordDef::new("Integer")).build().expect("case differs");
}

#[test]
fn empty_union_is_rejected() {
	let err = Schema::empty().resolve(&TypeExpr::Union(Vec::new())).expect_err("empty union");
	assert!(matches!(err, SchemaError::EmptyUnion { .. }));
}

#[test]
fn construct_only_fields_are_deferred() {
	let schema = SchemaBuilder::new()
		.record(RecordDef::new("Point").field("x", int()).init_field("scale", int()))
		.build()
		.expect("schema resolves");
	let id = schema.record_id("Point").expect("declared");
	let field = schema.record(id).and_then(|record| record.field("scale")).expect("field");

	assert_eq!(field.role, FieldRole::ConstructOnly);
	assert_eq!(field.ty, TypeDesc::deferred(TypeDesc::Prim(PrimKind::Int)));
}

#[test]
fn render_uses_record_names() {
	let schema = SchemaBuilder::new().record(RecordDef::new("Person")).build().expect("schema resolves");
	let desc = schema.resolve_str("list<Person | null>").expect("target resolves");
	assert_eq!(schema.render(&desc), "list<Person | null>");
}

#[test]
fn schema_file_loads_records() {
	let text = r#"{
		"records": [
			{ "name": "Person", "fields": [
				{ "name": "firstname", "type": "string" },
				{ "name": "nickname", "type": "optional<string>" },
				{ "name": "strict", "type": "bool", "init": true }
			] }
		]
	}"#;
	let schema = SchemaFile::from_json_str(text).expect("json parses").build().expect("schema resolves");
	let record = schema.record(schema.record_id("Person").expect("declared")).expect("record");

	assert_eq!(record.fields().len(), 3);
	assert_eq!(record.fields()[1].ty, TypeDesc::optional(TypeDesc::Prim(PrimKind::String)));
	assert_eq!(record.fields()[2].role, FieldRole::ConstructOnly);
}

#[test]
fn schema_file_rejects_unknown_keys() {
	let err = SchemaFile::from_json_str(r#"{ "records": [], "extra": 1 }"#).expect_err("unknown key");
	assert!(matches!(err, SchemaError::Json(_)));
}
