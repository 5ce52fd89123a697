use std::path::PathBuf;

use serde::Serialize;
use typedec::shape::FieldRole;

use crate::cmd::util::{emit_json, load_schema};

#[derive(Serialize)]
struct FieldJson {
	name: String,
	#[serde(rename = "type")]
	ty: String,
	init: bool,
}

#[derive(Serialize)]
struct RecordJson {
	name: String,
	fields: Vec<FieldJson>,
}

/// Resolve a schema file and list its records.
pub fn run(path: PathBuf, json: bool) -> crate::error::Result<()> {
	let schema = load_schema(Some(&path))?;

	if json {
		let records: Vec<RecordJson> = schema
			.records()
			.map(|(_, record)| RecordJson {
				name: record.name().to_owned(),
				fields: record
					.fields()
					.iter()
					.map(|field| FieldJson {
						name: field.name.to_string(),
						ty: schema.render(&field.ty),
						init: field.role == FieldRole::ConstructOnly,
					})
					.collect(),
			})
			.collect();
		emit_json(&records);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("records: {}", schema.len());
	for (id, record) in schema.records() {
		println!("{}\t{}", id.0, record.name());
		for field in record.fields() {
			let marker = if field.role == FieldRole::ConstructOnly { " (init)" } else { "" };
			println!("  {}: {}{marker}", field.name, schema.render(&field.ty));
		}
	}
	Ok(())
}
