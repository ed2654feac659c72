// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The caller-facing logger.
//!
//! A [`Logger`] owns one root [`Entry`] and forwards the whole entry
//! surface to it. On top of that it offers lazy variants (`*_fn`) whose
//! arguments are only produced when the level is enabled.

use std::{error::Error as StdError, sync::Arc};

use crate::{
	Backend, Context, Entry, Level, TerminationRequest, UnrecoverableSignal, Value,
	config::LoggerConfig,
	traits::{FieldLogger, LevelLogger},
};

pub struct Logger<B: Backend> {
	entry: Entry<B>,
}

impl<B: Backend> Logger<B> {
	pub fn new(context: impl Into<Option<Context>>, backend: B) -> Self {
		Self {
			entry: Entry::new(context, backend),
		}
	}

	pub fn with_config(context: impl Into<Option<Context>>, backend: B, config: &LoggerConfig) -> Self {
		let entry = Entry::new(context, backend).with_error_key(Arc::from(config.error_key.as_str()));
		Self {
			entry,
		}
	}

	/// The root entry.
	pub fn entry(&self) -> &Entry<B> {
		&self.entry
	}

	pub fn into_entry(self) -> Entry<B> {
		self.entry
	}

	/// Run `producer` and log its values only if `level` is enabled.
	pub fn log_fn<F>(&self, level: Level, producer: F)
	where
		F: FnOnce() -> Vec<Value>,
	{
		if self.is_level_enabled(level) {
			self.log(level, &producer());
		}
	}

	pub fn trace_fn<F: FnOnce() -> Vec<Value>>(&self, producer: F) {
		self.log_fn(Level::Trace, producer)
	}

	pub fn debug_fn<F: FnOnce() -> Vec<Value>>(&self, producer: F) {
		self.log_fn(Level::Debug, producer)
	}

	pub fn info_fn<F: FnOnce() -> Vec<Value>>(&self, producer: F) {
		self.log_fn(Level::Info, producer)
	}

	pub fn print_fn<F: FnOnce() -> Vec<Value>>(&self, producer: F) {
		self.info_fn(producer)
	}

	pub fn warn_fn<F: FnOnce() -> Vec<Value>>(&self, producer: F) {
		self.log_fn(Level::Warn, producer)
	}

	pub fn warning_fn<F: FnOnce() -> Vec<Value>>(&self, producer: F) {
		self.warn_fn(producer)
	}

	pub fn error_fn<F: FnOnce() -> Vec<Value>>(&self, producer: F) {
		self.log_fn(Level::Error, producer)
	}

	/// Terminates whether or not the fatal level is enabled.
	pub fn fatal_fn<F: FnOnce() -> Vec<Value>>(&self, producer: F) -> TerminationRequest {
		self.log_fn(Level::Fatal, producer);
		TerminationRequest::fatal()
	}

	/// The signal carries the produced values, or none if the panic level is
	/// disabled and the producer never ran.
	pub fn panic_fn<F: FnOnce() -> Vec<Value>>(&self, producer: F) -> UnrecoverableSignal {
		let mut produced = Vec::new();
		self.log_fn(Level::Panic, || {
			produced = producer();
			produced.clone()
		});
		UnrecoverableSignal::from_args(&produced)
	}
}

impl<B: Backend> LevelLogger for Logger<B> {
	fn is_level_enabled(&self, level: Level) -> bool {
		self.entry.is_level_enabled(level)
	}

	fn log(&self, level: Level, args: &[Value]) {
		self.entry.log(level, args)
	}

	fn logf(&self, level: Level, format: &str, args: &[Value]) {
		self.entry.logf(level, format, args)
	}

	fn logln(&self, level: Level, args: &[Value]) {
		self.entry.logln(level, args)
	}
}

impl<B: Backend> FieldLogger for Logger<B> {
	type Backend = B;

	fn with_field(&self, key: impl Into<Arc<str>>, value: impl Into<Value>) -> Entry<B> {
		self.entry.with_field(key, value)
	}

	fn with_fields<I, K, V>(&self, fields: I) -> Entry<B>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<Arc<str>>,
		V: Into<Value>,
	{
		self.entry.with_fields(fields)
	}

	fn with_error<E>(&self, err: E) -> Entry<B>
	where
		E: StdError + Send + Sync + 'static,
	{
		self.entry.with_error(err)
	}

	fn with_context(&self, ctx: Context) -> Entry<B> {
		self.entry.with_context(ctx)
	}
}

impl<B: Backend> From<Logger<B>> for Entry<B> {
	fn from(logger: Logger<B>) -> Self {
		logger.entry
	}
}

impl<B: Backend> Clone for Logger<B> {
	fn clone(&self) -> Self {
		Self {
			entry: self.entry.duplicate(),
		}
	}
}
