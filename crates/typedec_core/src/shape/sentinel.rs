use std::any::Any;
use std::fmt;

/// Marker for "no result", distinct from a decoded null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoResult;

/// The one "no result" value.
pub const NO_RESULT: NoResult = NoResult;

/// Whether `value` is the "no result" marker.
pub fn is_no_result<T: Any>(value: &T) -> bool {
	(value as &dyn Any).is::<NoResult>()
}

/// Value that is either present or marked absent.
///
/// Wrap in `Result` for the errored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Possible<T> {
	/// Value was found.
	Present(T),
	/// Value was not found at all.
	Absent(NoResult),
}

impl<T> Possible<T> {
	/// Whether a value is present.
	pub fn is_present(&self) -> bool {
		matches!(self, Possible::Present(_))
	}

	/// Whether the value is absent.
	pub fn is_absent(&self) -> bool {
		matches!(self, Possible::Absent(_))
	}

	/// Present value, if any.
	pub fn present(self) -> Option<T> {
		match self {
			Possible::Present(value) => Some(value),
			Possible::Absent(_) => None,
		}
	}

	/// Borrow the present value.
	pub fn as_ref(&self) -> Possible<&T> {
		match self {
			Possible::Present(value) => Possible::Present(value),
			Possible::Absent(marker) => Possible::Absent(*marker),
		}
	}

	/// Map the present value.
	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Possible<U> {
		match self {
			Possible::Present(value) => Possible::Present(f(value)),
			Possible::Absent(marker) => Possible::Absent(marker),
		}
	}
}

impl<T> From<Option<T>> for Possible<T> {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => Possible::Present(value),
			None => Possible::Absent(NO_RESULT),
		}
	}
}

impl fmt::Display for NoResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("<no result>")
	}
}
