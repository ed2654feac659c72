// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Immutable, chainable log entries.
//!
//! An [`Entry`] is a snapshot of:
//! - the attributes attached so far (`fields`)
//! - the [`Context`] records are logged under
//! - a backend handle already bound with exactly those attributes
//!
//! Every derivation (`with_field`, `with_fields`, `with_error`,
//! `with_context`) returns a new entry and leaves the receiver untouched.
//! Binding is incremental: the derived backend is the parent's backend bound
//! with only the newly added attributes.

use std::{error::Error as StdError, fmt, sync::Arc};

use crate::{
	Attr, Backend, Context, Level, Value,
	config::DEFAULT_ERROR_KEY,
	render,
	traits::{FieldLogger, LevelLogger},
};

pub struct Entry<B: Backend> {
	backend: B,
	context: Context,
	fields: Arc<[Attr]>,
	error_key: Arc<str>,
}

impl<B: Backend> Entry<B> {
	/// Build a root entry. A missing context becomes [`Context::background`].
	pub fn new(context: impl Into<Option<Context>>, backend: B) -> Self {
		Self {
			backend,
			context: context.into().unwrap_or_else(Context::background),
			fields: Arc::from(Vec::new()),
			error_key: Arc::from(DEFAULT_ERROR_KEY),
		}
	}

	/// Shallow copy; shares the immutable field list and backend handle.
	pub fn duplicate(&self) -> Self {
		Self {
			backend: self.backend.clone(),
			context: self.context.clone(),
			fields: Arc::clone(&self.fields),
			error_key: Arc::clone(&self.error_key),
		}
	}

	pub(crate) fn with_backend(&self, backend: B) -> Self {
		let mut dup = self.duplicate();
		dup.backend = backend;
		dup
	}

	pub(crate) fn with_error_key(&self, error_key: Arc<str>) -> Self {
		let mut dup = self.duplicate();
		dup.error_key = error_key;
		dup
	}

	fn with_attrs(&self, attrs: Vec<Attr>) -> Self {
		if attrs.is_empty() {
			return self.duplicate();
		}
		let mut dup = self.with_backend(self.backend.with_attrs(&attrs));
		let mut fields = Vec::with_capacity(self.fields.len() + attrs.len());
		fields.extend_from_slice(&self.fields);
		fields.extend(attrs);
		dup.fields = Arc::from(fields);
		dup
	}

	/// Attach one attribute.
	pub fn with_field(&self, key: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
		self.with_attrs(vec![Attr::new(key, value)])
	}

	/// Attach many attributes with a single rebind. Attributes keep the
	/// iteration order of `fields`; for hash maps that order is unspecified.
	pub fn with_fields<I, K, V>(&self, fields: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<Arc<str>>,
		V: Into<Value>,
	{
		self.with_attrs(fields.into_iter().map(|(key, value)| Attr::new(key, value)).collect())
	}

	/// Attach `err` under the configured error key. The error itself is
	/// bound, not its rendered text.
	pub fn with_error<E>(&self, err: E) -> Self
	where
		E: StdError + Send + Sync + 'static,
	{
		self.with_field(Arc::clone(&self.error_key), Value::error(err))
	}

	/// Replace the context only.
	pub fn with_context(&self, ctx: Context) -> Self {
		let mut dup = self.duplicate();
		dup.context = ctx;
		dup
	}

	pub fn fields(&self) -> &Arc<[Attr]> {
		&self.fields
	}

	pub fn context(&self) -> &Context {
		&self.context
	}

	/// The bound backend handle.
	pub fn backend(&self) -> &B {
		&self.backend
	}

	pub fn error_key(&self) -> &str {
		&self.error_key
	}

	fn emit(&self, level: Level, message: &str) {
		self.backend.log(&self.context, level.to_severity(), message);
	}
}

impl<B: Backend> LevelLogger for Entry<B> {
	fn is_level_enabled(&self, level: Level) -> bool {
		self.backend.enabled(&self.context, level.to_severity())
	}

	fn log(&self, level: Level, args: &[Value]) {
		self.emit(level, &render::sprint(args));
	}

	fn logf(&self, level: Level, format: &str, args: &[Value]) {
		if self.is_level_enabled(level) {
			self.emit(level, &render::sprintf(format, args));
		}
	}

	fn logln(&self, level: Level, args: &[Value]) {
		if self.is_level_enabled(level) {
			self.log(level, &[Value::from(render::sprintln(args))]);
		}
	}
}

impl<B: Backend> FieldLogger for Entry<B> {
	type Backend = B;

	fn with_field(&self, key: impl Into<Arc<str>>, value: impl Into<Value>) -> Entry<B> {
		Entry::with_field(self, key, value)
	}

	fn with_fields<I, K, V>(&self, fields: I) -> Entry<B>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<Arc<str>>,
		V: Into<Value>,
	{
		Entry::with_fields(self, fields)
	}

	fn with_error<E>(&self, err: E) -> Entry<B>
	where
		E: StdError + Send + Sync + 'static,
	{
		Entry::with_error(self, err)
	}

	fn with_context(&self, ctx: Context) -> Entry<B> {
		Entry::with_context(self, ctx)
	}
}

impl<B: Backend> Clone for Entry<B> {
	fn clone(&self) -> Self {
		self.duplicate()
	}
}

impl<B: Backend + fmt::Debug> fmt::Debug for Entry<B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Entry")
			.field("fields", &self.fields)
			.field("context", &self.context)
			.field("backend", &self.backend)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::{collections::HashMap, io, sync::Arc};

	use super::*;
	use crate::{Severity, testing::MemoryBackend, values};

	fn root() -> (Entry<MemoryBackend>, MemoryBackend) {
		let backend = MemoryBackend::new();
		(Entry::new(None, backend.clone()), backend)
	}

	#[test]
	fn test_new_substitutes_background_context() {
		let (entry, _) = root();
		assert!(!entry.context().is_cancelled());
		assert!(entry.fields().is_empty());
		assert_eq!(entry.error_key(), "error");
	}

	#[test]
	fn test_with_field_appends_and_leaves_parent() {
		let (entry, _) = root();
		let first = entry.with_field("a", 1);
		let second = first.with_field("b", "two");

		assert!(entry.fields().is_empty());
		assert_eq!(first.fields().as_ref(), &[Attr::new("a", 1)]);
		assert_eq!(second.fields().as_ref(), &[Attr::new("a", 1), Attr::new("b", "two")]);
		assert_eq!(first.backend().bound(), vec![Attr::new("a", 1)]);
		assert_eq!(second.backend().bound(), vec![Attr::new("a", 1), Attr::new("b", "two")]);
	}

	#[test]
	fn test_binding_is_incremental() {
		let (entry, backend) = root();
		let _ = entry.with_field("a", 1).with_field("b", 2);
		assert_eq!(backend.bind_calls(), vec![vec![Attr::new("a", 1)], vec![Attr::new("b", 2)]]);
	}

	#[test]
	fn test_duplicate_keys_are_kept() {
		let (entry, backend) = root();
		let entry = entry.with_field("k", 1).with_field("k", 2);
		entry.info(&values!["dup"]);

		let records = backend.records();
		assert_eq!(records[0].attrs, vec![Attr::new("k", 1), Attr::new("k", 2)]);
	}

	#[test]
	fn test_with_fields_binds_once() {
		let (entry, backend) = root();
		let derived = entry.with_fields([("a", Value::from(1)), ("b", Value::from(true))]);

		assert_eq!(derived.fields().len(), 2);
		assert_eq!(backend.bind_calls().len(), 1);
		assert_eq!(derived.backend().bound(), derived.fields().to_vec());
	}

	#[test]
	fn test_with_fields_from_map_keeps_all_pairs() {
		let (entry, _) = root();
		let map: HashMap<&str, i64> = HashMap::from([("x", 1), ("y", 2), ("z", 3)]);
		let derived = entry.with_field("first", 0).with_fields(map);

		assert_eq!(derived.fields()[0], Attr::new("first", 0));
		let mut keys: Vec<_> = derived.fields()[1..].iter().map(|attr| attr.key.to_string()).collect();
		keys.sort();
		assert_eq!(keys, ["x", "y", "z"]);
	}

	#[test]
	fn test_with_fields_empty_is_duplicate() {
		let (entry, backend) = root();
		let entry = entry.with_field("a", 1);
		let derived = entry.with_fields(HashMap::<String, Value>::new());

		assert!(Arc::ptr_eq(entry.fields(), derived.fields()));
		assert_eq!(backend.bind_calls().len(), 1);
	}

	#[test]
	fn test_with_error_binds_the_error_value() {
		let (entry, backend) = root();
		entry.with_error(io::Error::other("disk full")).error(&values!["write failed"]);

		let record = &backend.records()[0];
		assert_eq!(record.attrs.len(), 1);
		assert_eq!(&*record.attrs[0].key, "error");
		assert!(matches!(record.attrs[0].value, Value::Error(_)));
		assert_eq!(record.attrs[0].value.to_string(), "disk full");
	}

	#[test]
	fn test_with_context_changes_only_context() {
		let (entry, _) = root();
		let entry = entry.with_field("a", 1);
		let (ctx, token) = Context::background().with_cancel();
		let derived = entry.with_context(ctx);
		token.cancel();

		assert!(derived.context().is_cancelled());
		assert!(!entry.context().is_cancelled());
		assert!(Arc::ptr_eq(entry.fields(), derived.fields()));
		assert!(entry.backend().same_binding(derived.backend()));
	}

	#[test]
	fn test_records_carry_context() {
		let (entry, backend) = root();
		let ctx = Context::background().with_value("request_id", "r-1");
		entry.with_context(ctx).info(&values!["hi"]);
		assert_eq!(backend.records()[0].context.value("request_id"), Some(&Value::from("r-1")));
	}

	#[test]
	fn test_direct_family_ignores_enablement() {
		let (entry, backend) = root();
		backend.set_min_severity(Severity::ERROR);
		entry.debug(&values!["a", "b"]);

		let records = backend.records();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].message, "ab");
		assert_eq!(records[0].severity, Severity::DEBUG);
	}

	#[test]
	fn test_formatted_family() {
		let (entry, backend) = root();
		entry.infof("%d-%s", &values![7, "x"]);
		entry.warningf("%s", &values!["w"]);

		let records = backend.records();
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].message, "7-x");
		assert_eq!(records[1].severity, Severity::WARN);
	}

	#[test]
	fn test_line_family() {
		let (entry, backend) = root();
		entry.println(&values!["a", 1, true]);

		let records = backend.records();
		assert_eq!(records[0].message, "a 1 true");
		assert_eq!(records[0].severity, Severity::INFO);
	}

	#[test]
	fn test_disabled_levels_emit_nothing() {
		let (entry, backend) = root();
		backend.set_min_severity(Severity::WARN);
		for level in [Level::Info, Level::Debug, Level::Trace] {
			assert!(!entry.is_level_enabled(level));
			entry.logf(level, "%d", &values![1]);
			entry.logln(level, &values![1]);
		}
		assert!(backend.records().is_empty());
		assert!(entry.is_level_enabled(Level::Error));
	}

	#[test]
	fn test_fatal_every_family_requests_termination() {
		let (entry, backend) = root();
		let requests = [
			entry.fatal(&values!["a"]),
			entry.fatalf("%s", &values!["b"]),
			entry.fatalln(&values!["c"]),
		];

		for request in requests {
			assert_ne!(request.status, 0);
		}
		let messages: Vec<_> = backend.records().into_iter().map(|record| record.message).collect();
		assert_eq!(messages, ["a", "b", "c"]);
	}

	#[test]
	fn test_fatalf_terminates_when_disabled() {
		let (entry, backend) = root();
		backend.set_min_severity(Severity(100));
		let request = entry.fatalf("%d", &values!["not a number"]);
		assert_eq!(request.status, 1);
		assert!(backend.records().is_empty());
	}

	#[test]
	fn test_panic_signals() {
		let (entry, backend) = root();
		let direct = entry.panic(&values!["x", 1]);
		let formatted = entry.panicf("%d!", &values![2]);
		entry.panicln(&values!["no", "signal"]);

		assert_eq!(direct.payload, crate::SignalPayload::Args(values!["x", 1].to_vec()));
		assert_eq!(formatted.to_string(), "2!");
		let records = backend.records();
		assert_eq!(records.len(), 3);
		assert_eq!(records[2].message, "no signal");
		assert!(records.iter().all(|record| record.severity == Severity::PANIC));
	}

	#[test]
	fn test_logln_passes_through_direct_path() {
		let (entry, backend) = root();
		entry.logln(Level::Error, &values!["a", "b"]);
		assert_eq!(backend.records()[0].message, "a b");
	}
}
