// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Logging macros for convenient usage
//!
//! Each macro takes a logger or entry followed by the values to log, and
//! goes through the Direct family: `log_info!(entry, "user ", id)`.

/// Log at an explicit level
#[macro_export]
macro_rules! log_at {
	($target:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
		use $crate::LevelLogger as _;
		$target.log($level, &$crate::values![$($arg),*])
	}};
}

/// Trace level logging
#[macro_export]
macro_rules! log_trace {
	($target:expr $(, $arg:expr)* $(,)?) => {
		$crate::log_at!($target, $crate::Level::Trace $(, $arg)*)
	};
}

/// Debug level logging
#[macro_export]
macro_rules! log_debug {
	($target:expr $(, $arg:expr)* $(,)?) => {
		$crate::log_at!($target, $crate::Level::Debug $(, $arg)*)
	};
}

/// Info level logging
#[macro_export]
macro_rules! log_info {
	($target:expr $(, $arg:expr)* $(,)?) => {
		$crate::log_at!($target, $crate::Level::Info $(, $arg)*)
	};
}

/// Warning level logging
#[macro_export]
macro_rules! log_warn {
	($target:expr $(, $arg:expr)* $(,)?) => {
		$crate::log_at!($target, $crate::Level::Warn $(, $arg)*)
	};
}

/// Error level logging
#[macro_export]
macro_rules! log_error {
	($target:expr $(, $arg:expr)* $(,)?) => {
		$crate::log_at!($target, $crate::Level::Error $(, $arg)*)
	};
}
