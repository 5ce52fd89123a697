use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use typedec::shape::{DecodeOptions, Schema, SchemaFile, Typed, Value};

use crate::error::{CliError, Result};

/// Decode behavior flags shared by `decode` and `check`.
#[derive(clap::Args, Debug, Clone)]
pub struct DecodeArgs {
	/// Input JSON document.
	pub input: std::path::PathBuf,
	/// Schema file declaring the records the target may reference.
	#[arg(long)]
	pub schema: Option<std::path::PathBuf>,
	/// Target type expression, e.g. `Book` or `list<int | null>`.
	#[arg(long = "type")]
	pub target: String,
	/// Accept booleans where an integer is declared.
	#[arg(long)]
	pub lenient_bool: bool,
	/// Maximum value nesting depth.
	#[arg(long)]
	pub max_depth: Option<u32>,
}

impl DecodeArgs {
	/// Build decode options from flags.
	pub fn options(&self) -> DecodeOptions {
		let mut options = if self.lenient_bool { DecodeOptions::lenient() } else { DecodeOptions::default() };
		if let Some(max_depth) = self.max_depth {
			options.max_depth = max_depth;
		}
		options
	}
}

/// Read a text file, tagging failures with the path.
pub(crate) fn read_text(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| CliError::Io {
		path: path.to_path_buf(),
		source,
	})
}

/// Load and resolve a schema file, or an empty schema when none is given.
pub(crate) fn load_schema(path: Option<&Path>) -> Result<Schema> {
	let Some(path) = path else {
		return Ok(Schema::empty());
	};
	let text = read_text(path)?;
	Ok(SchemaFile::from_json_str(&text)?.build()?)
}

/// Parse a JSON document into a dynamic value.
pub(crate) fn load_input(path: &Path) -> Result<Value> {
	let text = read_text(path)?;
	let json: serde_json::Value = serde_json::from_str(&text)?;
	Ok(Value::from_json(json)?)
}

/// Print a serializable payload as pretty JSON.
pub(crate) fn emit_json<T: Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}

/// Render a dynamic value for display.
pub(crate) fn value_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Null => serde_json::Value::Null,
		Value::Bool(v) => serde_json::Value::Bool(*v),
		Value::Int(v) => serde_json::Value::from(*v),
		Value::Float(v) => float_json(*v),
		Value::String(v) => serde_json::Value::String(v.to_string()),
		Value::Seq(items) => serde_json::Value::Array(items.iter().map(value_json).collect()),
		Value::Map(entries) => serde_json::Value::Object(entries.iter().map(|(key, item)| (key.to_string(), value_json(item))).collect()),
	}
}

/// Render a decoded tree for display; records become objects.
pub(crate) fn typed_json(value: &Typed) -> serde_json::Value {
	match value {
		Typed::Null => serde_json::Value::Null,
		Typed::Bool(v) => serde_json::Value::Bool(*v),
		Typed::Int(v) => serde_json::Value::from(*v),
		Typed::Float(v) => float_json(*v),
		Typed::String(v) => serde_json::Value::String(v.to_string()),
		Typed::Any(v) => value_json(v),
		Typed::Seq(items) => serde_json::Value::Array(items.iter().map(typed_json).collect()),
		Typed::Record(record) => serde_json::Value::Object(
			record
				.fields
				.iter()
				.map(|field| (field.name.to_string(), typed_json(&field.value)))
				.collect(),
		),
	}
}

fn float_json(value: f64) -> serde_json::Value {
	serde_json::Number::from_f64(value).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

/// Render a decoded tree as indented text.
pub(crate) fn render_typed(value: &Typed) -> String {
	let mut out = String::new();
	write_typed(&mut out, value, 0);
	out
}

fn write_typed(out: &mut String, value: &Typed, indent: usize) {
	let pad = " ".repeat(indent);
	match value {
		Typed::Null => {
			let _ = writeln!(out, "{pad}null");
		}
		Typed::Bool(v) => {
			let _ = writeln!(out, "{pad}{v}");
		}
		Typed::Int(v) => {
			let _ = writeln!(out, "{pad}{v}");
		}
		Typed::Float(v) => {
			let _ = writeln!(out, "{pad}{v:?}");
		}
		Typed::String(v) => {
			let _ = writeln!(out, "{pad}{v:?}");
		}
		Typed::Any(v) => {
			let _ = writeln!(out, "{pad}any {}", value_json(v));
		}
		Typed::Seq(items) => {
			if items.is_empty() {
				let _ = writeln!(out, "{pad}[]");
				return;
			}
			let _ = writeln!(out, "{pad}[");
			for item in items {
				write_typed(out, item, indent + 2);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Typed::Record(record) => {
			let _ = writeln!(out, "{pad}{} {{", record.type_name);
			for field in &record.fields {
				if matches!(field.value, Typed::Record(_)) || matches!(&field.value, Typed::Seq(items) if !items.is_empty()) {
					let _ = writeln!(out, "{pad}  {} =", field.name);
					write_typed(out, &field.value, indent + 4);
				} else {
					let _ = write!(out, "{pad}  {} = ", field.name);
					write_typed(out, &field.value, 0);
				}
			}
			let _ = writeln!(out, "{pad}}}");
		}
	}
}

#[cfg(test)]
mod tests;
