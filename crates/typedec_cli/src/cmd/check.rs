use serde::Serialize;
use typedec::shape::decode_with;

use crate::cmd::util::{DecodeArgs, emit_json, load_input, load_schema};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub decode: DecodeArgs,
	/// Report the outcome as JSON instead of failing the process.
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct CheckJson {
	path: String,
	target: String,
	ok: bool,
	error: Option<String>,
	at: Option<String>,
}

/// Report whether a document decodes against the target type.
pub fn run(args: Args) -> crate::error::Result<()> {
	let Args { decode, json } = args;

	let schema = load_schema(decode.schema.as_deref())?;
	let target = schema.resolve_str(&decode.target)?;
	let input = load_input(&decode.input)?;
	let outcome = decode_with(&schema, &input, &target, &decode.options());

	if json {
		let (error, at) = match &outcome {
			Ok(_) => (None, None),
			Err(err) => (Some(err.to_string()), err.at().map(str::to_owned)),
		};
		emit_json(&CheckJson {
			path: decode.input.display().to_string(),
			target: schema.render(&target),
			ok: outcome.is_ok(),
			error,
			at,
		});
		return Ok(());
	}

	outcome?;
	println!("ok");
	Ok(())
}
