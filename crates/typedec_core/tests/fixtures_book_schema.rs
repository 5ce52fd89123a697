#![allow(missing_docs)]

use typedec::shape::{DecodeError, SchemaFile, Typed, Value, ValueKind, decode};
use typedec_testkit::{json_fixture, read_fixture};

fn book_schema() -> typedec::shape::Schema {
	SchemaFile::from_json_str(&read_fixture("book_schema.json"))
		.expect("schema json parses")
		.build()
		.expect("schema resolves")
}

#[test]
fn book_fixture_decodes_from_schema_file() {
	let schema = book_schema();
	let target = schema.resolve_str("Book").expect("target resolves");
	let input = Value::from_json(json_fixture("book.json")).expect("fixture adapts");

	let typed = decode(&schema, &input, &target).expect("book decodes");
	let Typed::Record(book) = &typed else {
		panic!("expected record");
	};
	assert_eq!(book.type_name.as_ref(), "Book");
	assert_eq!(book.fields.len(), 7);
	assert_eq!(typed.field("edition"), Some(&Typed::Int(2)));
	assert_eq!(typed.field("notes"), Some(&Typed::Null));
	assert_eq!(typed.field("editor").and_then(|editor| editor.field("firstname")), Some(&Typed::String("Dennis".into())));
}

#[test]
fn bad_author_fixture_reports_nested_location() {
	let schema = book_schema();
	let target = schema.resolve_str("Book").expect("target resolves");
	let input = Value::from_json(json_fixture("book_bad_author.json")).expect("fixture adapts");

	let err = decode(&schema, &input, &target).expect_err("lastname is an int");
	match err {
		DecodeError::Shape { expected, got, at } => {
			assert_eq!(expected, ValueKind::String);
			assert_eq!(got, ValueKind::Int);
			assert_eq!(at.as_ref(), "$.author.lastname");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn list_of_books_or_isbn_strings() {
	let schema = book_schema();
	let target = schema.resolve_str("list<Book | string>").expect("target resolves");
	let book = json_fixture("book.json");
	let input = Value::from_json(serde_json::json!([book, "978-0-201-63361-0"])).expect("adapts");

	let Typed::Seq(items) = decode(&schema, &input, &target).expect("mixed list decodes") else {
		panic!("expected sequence");
	};
	assert!(matches!(items[0], Typed::Record(_)));
	assert_eq!(items[1], Typed::String("978-0-201-63361-0".into()));

	let bad = Value::from_json(serde_json::json!([42])).expect("adapts");
	let err = decode(&schema, &bad, &target).expect_err("int is neither a book nor a string");
	let message = err.to_string();
	assert!(message.contains("no alternative of Book | string matched at $[0]"), "{message}");
	assert!(message.contains("expected mapping, got int") && message.contains("expected string, got int"), "{message}");
}
