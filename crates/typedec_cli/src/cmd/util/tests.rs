use serde_json::json;
use typedec::shape::{FieldValue, RecordValue, Typed, Value};

use super::{render_typed, typed_json, value_json};

fn person() -> Typed {
	Typed::Record(RecordValue {
		type_name: "Person".into(),
		fields: vec![
			FieldValue {
				name: "name".into(),
				value: Typed::String("Ada".into()),
			},
			FieldValue {
				name: "tags".into(),
				value: Typed::Seq(vec![Typed::Int(1), Typed::Null]),
			},
		],
	})
}

#[test]
fn records_render_as_objects() {
	assert_eq!(typed_json(&person()), json!({"name": "Ada", "tags": [1, null]}));
}

#[test]
fn non_finite_floats_render_as_null() {
	assert_eq!(typed_json(&Typed::Float(f64::NAN)), json!(null));
	assert_eq!(value_json(&Value::Float(1.5)), json!(1.5));
}

#[test]
fn text_rendering_nests_fields() {
	let text = render_typed(&person());
	assert_eq!(text, "Person {\n  name = \"Ada\"\n  tags =\n    [\n      1\n      null\n    ]\n}\n");
}
