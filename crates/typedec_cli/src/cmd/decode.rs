use serde::Serialize;
use tracing::debug;
use typedec::shape::decode_with;

use crate::cmd::util::{DecodeArgs, emit_json, load_input, load_schema, render_typed, typed_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct DecodeJson {
	path: String,
	target: String,
	value: serde_json::Value,
}

/// Decode a document against the target type and print the typed tree.
pub fn run(args: Args) -> crate::error::Result<()> {
	let Args { decode, json } = args;

	let schema = load_schema(decode.schema.as_deref())?;
	let target = schema.resolve_str(&decode.target)?;
	let input = load_input(&decode.input)?;
	debug!(path = %decode.input.display(), target = %schema.render(&target), "decoding document");
	let typed = decode_with(&schema, &input, &target, &decode.options())?;

	if json {
		emit_json(&DecodeJson {
			path: decode.input.display().to_string(),
			target: schema.render(&target),
			value: typed_json(&typed),
		});
		return Ok(());
	}

	println!("path: {}", decode.input.display());
	println!("target: {}", schema.render(&target));
	println!("decoded:");
	print!("{}", render_typed(&typed));
	Ok(())
}
