/// Validity check command.
pub mod check;
/// Document decode command.
pub mod decode;
/// Schema listing command.
pub mod schema;

pub(crate) mod util;
