use std::path::PathBuf;

use thiserror::Error;
use typedec::shape::{DecodeError, SchemaError};

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading an input or schema file failed.
	#[error("io: {}: {source}", path.display())]
	Io {
		/// File being read.
		path: PathBuf,
		/// Underlying failure.
		#[source]
		source: std::io::Error,
	},
	/// Input document is not valid JSON.
	#[error("input json: {0}")]
	Json(#[from] serde_json::Error),
	/// Schema or target expression is invalid.
	#[error(transparent)]
	Schema(#[from] SchemaError),
	/// Document does not decode against the target.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}
