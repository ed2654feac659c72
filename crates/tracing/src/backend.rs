// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A [`Backend`] that turns records into `tracing` events.

use std::{fmt::Write, sync::Arc};

use chainlog::{Attr, Backend, Context, Level, Severity};
use tracing::{debug, error, info, trace, warn};

struct Binding {
	attrs: Box<[Attr]>,
	parent: Option<Arc<Binding>>,
}

/// Forwards records to the current `tracing` dispatcher.
///
/// Each record becomes one event carrying:
/// - `severity`: the facade level name
/// - `fields`: bound attributes as space separated `key=value` pairs
/// - the rendered message
///
/// Attributes travel as that single `fields` string, so a JSON subscriber
/// sees one string field rather than one field per key. Values that are
/// empty or contain whitespace, `=` or `"` are written quoted and escaped
/// (`msg="disk full"`), which keeps the pairs unambiguous.
///
/// Enablement is asked at this crate's own callsites, whose target is
/// `chainlog_tracing`. Per-target directives for the calling crate
/// (`RUST_LOG=myapp=debug`) do not reach records logged through the facade;
/// use a global level or a `chainlog_tracing=<level>` directive instead.
///
/// Fatal and panic records are emitted as `ERROR` events.
#[derive(Clone)]
pub struct TracingBackend {
	binding: Option<Arc<Binding>>,
	min_severity: Severity,
}

impl TracingBackend {
	/// Everything down to trace level; the subscriber does the filtering.
	pub fn new() -> Self {
		Self {
			binding: None,
			min_severity: Severity(i32::MIN),
		}
	}

	/// Drop records below `level` before they reach `tracing`.
	pub fn with_min_level(mut self, level: Level) -> Self {
		self.min_severity = level.to_severity();
		self
	}

	/// Bound attributes, oldest first.
	pub fn attrs(&self) -> Vec<Attr> {
		let mut batches = Vec::new();
		let mut node = self.binding.as_deref();
		while let Some(current) = node {
			batches.push(&current.attrs);
			node = current.parent.as_deref();
		}
		batches.into_iter().rev().flat_map(|batch| batch.iter().cloned()).collect()
	}

	fn render_fields(&self) -> String {
		let mut rendered = String::new();
		for (i, attr) in self.attrs().iter().enumerate() {
			if i > 0 {
				rendered.push(' ');
			}
			let value = attr.value.to_string();
			if needs_quoting(&value) {
				let _ = write!(rendered, "{}={value:?}", attr.key);
			} else {
				let _ = write!(rendered, "{}={value}", attr.key);
			}
		}
		rendered
	}
}

fn needs_quoting(value: &str) -> bool {
	value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '=' || c == '"')
}

impl Default for TracingBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl Backend for TracingBackend {
	fn with_attrs(&self, attrs: &[Attr]) -> Self {
		if attrs.is_empty() {
			return self.clone();
		}
		Self {
			binding: Some(Arc::new(Binding {
				attrs: attrs.into(),
				parent: self.binding.clone(),
			})),
			min_severity: self.min_severity,
		}
	}

	fn enabled(&self, _ctx: &Context, severity: Severity) -> bool {
		if severity < self.min_severity {
			return false;
		}
		match severity.to_level() {
			Level::Trace => tracing::enabled!(tracing::Level::TRACE),
			Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
			Level::Info => tracing::enabled!(tracing::Level::INFO),
			Level::Warn => tracing::enabled!(tracing::Level::WARN),
			Level::Error | Level::Fatal | Level::Panic => tracing::enabled!(tracing::Level::ERROR),
		}
	}

	fn log(&self, _ctx: &Context, severity: Severity, message: &str) {
		if severity < self.min_severity {
			return;
		}
		let level = severity.to_level();
		let fields = self.render_fields();
		match level {
			Level::Trace => trace!(severity = %level, fields = %fields, "{message}"),
			Level::Debug => debug!(severity = %level, fields = %fields, "{message}"),
			Level::Info => info!(severity = %level, fields = %fields, "{message}"),
			Level::Warn => warn!(severity = %level, fields = %fields, "{message}"),
			Level::Error | Level::Fatal | Level::Panic => {
				error!(severity = %level, fields = %fields, "{message}")
			}
		}
	}
}

impl std::fmt::Debug for TracingBackend {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TracingBackend")
			.field("attrs", &self.attrs())
			.field("min_severity", &self.min_severity)
			.finish()
	}
}
