use super::TypeExpr;
use crate::shape::{PrimKind, SchemaError};

#[test]
fn primitives_and_aliases_parse() {
	assert_eq!(TypeExpr::parse("string").expect("parses"), TypeExpr::Prim(PrimKind::String));
	assert_eq!(TypeExpr::parse(" integer ").expect("parses"), TypeExpr::Prim(PrimKind::Int));
	assert_eq!(TypeExpr::parse("boolean").expect("parses"), TypeExpr::Prim(PrimKind::Bool));
	assert_eq!(TypeExpr::parse("object").expect("parses"), TypeExpr::Any);
	assert_eq!(TypeExpr::parse("none").expect("parses"), TypeExpr::Null);
}

#[test]
fn bare_list_defaults_to_wildcard_elements() {
	assert_eq!(TypeExpr::parse("list").expect("parses"), TypeExpr::seq(TypeExpr::Any));
}

#[test]
fn unions_keep_declared_order() {
	let expr = TypeExpr::parse("list<Small | string>").expect("parses");
	assert_eq!(
		expr,
		TypeExpr::seq(TypeExpr::Union(vec![TypeExpr::named("Small"), TypeExpr::Prim(PrimKind::String)]))
	);
}

#[test]
fn optional_appends_null_and_flattens() {
	assert_eq!(
		TypeExpr::parse("optional<int>").expect("parses"),
		TypeExpr::Union(vec![TypeExpr::Prim(PrimKind::Int), TypeExpr::Null])
	);
	assert_eq!(
		TypeExpr::parse("optional<int | string>").expect("parses"),
		TypeExpr::Union(vec![TypeExpr::Prim(PrimKind::Int), TypeExpr::Prim(PrimKind::String), TypeExpr::Null])
	);
}

#[test]
fn init_wraps_or_defaults_to_wildcard() {
	assert_eq!(TypeExpr::parse("init<int>").expect("parses"), TypeExpr::deferred(TypeExpr::Prim(PrimKind::Int)));
	assert_eq!(TypeExpr::parse("init").expect("parses"), TypeExpr::Any);
}

#[test]
fn malformed_expressions_report_offset() {
	let err = TypeExpr::parse("list<int").expect_err("missing close");
	assert!(matches!(err, SchemaError::Syntax { at: 8, .. }), "{err}");

	let err = TypeExpr::parse("int |").expect_err("dangling bar");
	assert!(matches!(err, SchemaError::Syntax { .. }));

	let err = TypeExpr::parse("Person<int>").expect_err("records take no args");
	assert!(matches!(err, SchemaError::Syntax { at: 0, .. }));

	let err = TypeExpr::parse("int string").expect_err("trailing");
	assert!(matches!(err, SchemaError::Syntax { .. }));

	let err = TypeExpr::parse("9lives").expect_err("digit start");
	assert!(matches!(err, SchemaError::Syntax { at: 0, .. }));
}

#[test]
fn deep_nesting_is_a_syntax_error() {
	let nested = |depth: usize| format!("{}int{}", "list<".repeat(depth), ">".repeat(depth));

	TypeExpr::parse(&nested(128)).expect("128 levels parse");

	let err = TypeExpr::parse(&nested(5000)).expect_err("too deep");
	match err {
		SchemaError::Syntax { at, reason, .. } => {
			assert_eq!(reason, "type expression nested too deeply");
			assert_eq!(at, 128 * "list<".len() + "list".len());
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn display_round_trips_through_parse() {
	let text = "list<Person | string | null>";
	let expr = TypeExpr::parse(text).expect("parses");
	assert_eq!(expr.to_string(), text);
}
