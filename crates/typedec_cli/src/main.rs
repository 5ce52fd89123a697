#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "typedec", about = "Decode JSON documents against declared record types")]
struct Cli {
	/// Emit debug-level decode events on stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a document and print the typed tree.
	Decode(cmd::decode::Args),
	/// Report whether a document decodes.
	Check(cmd::check::Args),
	/// List the records of a schema file.
	Schema {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Check(args) => cmd::check::run(args),
		Commands::Schema { path, json } => cmd::schema::run(path, json),
	}
}

fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.compact()
		.try_init();
}
