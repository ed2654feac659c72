// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The emission and derivation surface shared by [`Entry`] and [`Logger`].
//!
//! Implementors supply the four primitives of [`LevelLogger`]; every
//! level-named wrapper is a provided method, so all call shapes funnel into
//! the same three family methods.
//!
//! [`Entry`]: crate::Entry
//! [`Logger`]: crate::Logger

use std::{error::Error as StdError, sync::Arc};

use crate::{
	Backend, Context, Entry, Level, TerminationRequest, UnrecoverableSignal, Value, render,
};

pub trait LevelLogger {
	fn is_level_enabled(&self, level: Level) -> bool;

	/// Direct family: concatenate and forward, no enablement check.
	fn log(&self, level: Level, args: &[Value]);

	/// Formatted family: forward only if `level` is enabled.
	fn logf(&self, level: Level, format: &str, args: &[Value]);

	/// Line family: space-join and forward only if `level` is enabled.
	fn logln(&self, level: Level, args: &[Value]);

	fn trace(&self, args: &[Value]) {
		self.log(Level::Trace, args)
	}

	fn debug(&self, args: &[Value]) {
		self.log(Level::Debug, args)
	}

	fn info(&self, args: &[Value]) {
		self.log(Level::Info, args)
	}

	fn print(&self, args: &[Value]) {
		self.info(args)
	}

	fn warn(&self, args: &[Value]) {
		self.log(Level::Warn, args)
	}

	fn warning(&self, args: &[Value]) {
		self.warn(args)
	}

	fn error(&self, args: &[Value]) {
		self.log(Level::Error, args)
	}

	fn fatal(&self, args: &[Value]) -> TerminationRequest {
		self.log(Level::Fatal, args);
		TerminationRequest::fatal()
	}

	fn panic(&self, args: &[Value]) -> UnrecoverableSignal {
		self.log(Level::Panic, args);
		UnrecoverableSignal::from_args(args)
	}

	fn tracef(&self, format: &str, args: &[Value]) {
		self.logf(Level::Trace, format, args)
	}

	fn debugf(&self, format: &str, args: &[Value]) {
		self.logf(Level::Debug, format, args)
	}

	fn infof(&self, format: &str, args: &[Value]) {
		self.logf(Level::Info, format, args)
	}

	fn printf(&self, format: &str, args: &[Value]) {
		self.infof(format, args)
	}

	fn warnf(&self, format: &str, args: &[Value]) {
		self.logf(Level::Warn, format, args)
	}

	fn warningf(&self, format: &str, args: &[Value]) {
		self.warnf(format, args)
	}

	fn errorf(&self, format: &str, args: &[Value]) {
		self.logf(Level::Error, format, args)
	}

	/// Terminates even when the fatal level is disabled.
	fn fatalf(&self, format: &str, args: &[Value]) -> TerminationRequest {
		self.logf(Level::Fatal, format, args);
		TerminationRequest::fatal()
	}

	/// The signal carries the rendered message whether or not the record was
	/// emitted.
	fn panicf(&self, format: &str, args: &[Value]) -> UnrecoverableSignal {
		self.logf(Level::Panic, format, args);
		UnrecoverableSignal::from_message(render::sprintf(format, args))
	}

	fn traceln(&self, args: &[Value]) {
		self.logln(Level::Trace, args)
	}

	fn debugln(&self, args: &[Value]) {
		self.logln(Level::Debug, args)
	}

	fn infoln(&self, args: &[Value]) {
		self.logln(Level::Info, args)
	}

	fn println(&self, args: &[Value]) {
		self.infoln(args)
	}

	fn warnln(&self, args: &[Value]) {
		self.logln(Level::Warn, args)
	}

	fn warningln(&self, args: &[Value]) {
		self.warnln(args)
	}

	fn errorln(&self, args: &[Value]) {
		self.logln(Level::Error, args)
	}

	fn fatalln(&self, args: &[Value]) -> TerminationRequest {
		self.logln(Level::Fatal, args);
		TerminationRequest::fatal()
	}

	/// Emits at panic level but, unlike `panic` and `panicf`, returns no
	/// signal. Callers relying on unwinding must use one of those instead.
	fn panicln(&self, args: &[Value]) {
		self.logln(Level::Panic, args)
	}
}

/// Non-destructive derivation of entries.
pub trait FieldLogger {
	type Backend: Backend;

	fn with_field(&self, key: impl Into<Arc<str>>, value: impl Into<Value>) -> Entry<Self::Backend>;

	fn with_fields<I, K, V>(&self, fields: I) -> Entry<Self::Backend>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<Arc<str>>,
		V: Into<Value>;

	fn with_error<E>(&self, err: E) -> Entry<Self::Backend>
	where
		E: StdError + Send + Sync + 'static;

	fn with_context(&self, ctx: Context) -> Entry<Self::Backend>;
}
