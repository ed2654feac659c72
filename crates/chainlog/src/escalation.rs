// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Fatal and panic outcomes.
//!
//! Fatal and panic level methods do not end the process or unwind on their
//! own. They emit their record and hand back one of these values; the caller
//! enforces it with [`TerminationRequest::exit`] or
//! [`UnrecoverableSignal::raise`]. Tests can inspect them instead.

use std::{
	fmt::{self, Display, Formatter},
	process,
};

use crate::{Value, render};

/// Exit status requested by fatal level methods.
pub const FATAL_EXIT_STATUS: i32 = 1;

/// Returned by every `fatal*` method: the process should now exit.
#[must_use = "a fatal log only ends the process once `exit` is called"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminationRequest {
	pub status: i32,
}

impl TerminationRequest {
	pub(crate) fn fatal() -> Self {
		Self {
			status: FATAL_EXIT_STATUS,
		}
	}

	pub fn exit(self) -> ! {
		process::exit(self.status)
	}
}

/// What the unwinding payload was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalPayload {
	/// The arguments passed to `panic` or produced for `panic_fn`.
	Args(Vec<Value>),
	/// The rendered message of `panicf`.
	Message(String),
}

/// Returned by `panic`, `panicf` and `panic_fn`: the caller should unwind.
#[must_use = "a panic log only unwinds once `raise` is called"]
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecoverableSignal {
	pub payload: SignalPayload,
}

impl UnrecoverableSignal {
	pub(crate) fn from_args(args: &[Value]) -> Self {
		Self {
			payload: SignalPayload::Args(args.to_vec()),
		}
	}

	pub(crate) fn from_message(message: String) -> Self {
		Self {
			payload: SignalPayload::Message(message),
		}
	}

	/// Unwind with this signal as the panic payload.
	pub fn raise(self) -> ! {
		std::panic::panic_any(self)
	}
}

impl Display for UnrecoverableSignal {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match &self.payload {
			SignalPayload::Args(args) => f.write_str(&render::sprint(args)),
			SignalPayload::Message(message) => f.write_str(message),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::panic::{self, AssertUnwindSafe};

	use super::*;
	use crate::values;

	#[test]
	fn test_fatal_status_is_non_zero() {
		assert_ne!(TerminationRequest::fatal().status, 0);
	}

	#[test]
	fn test_raise_unwinds_with_signal_payload() {
		let signal = UnrecoverableSignal::from_args(&values!["db ", "gone"]);
		let caught = panic::catch_unwind(AssertUnwindSafe(|| signal.clone().raise())).unwrap_err();
		let payload = caught.downcast::<UnrecoverableSignal>().unwrap();
		assert_eq!(*payload, signal);
		assert_eq!(payload.to_string(), "db gone");
	}
}
