// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! An in-memory backend that records everything it is asked to do.

use std::sync::{
	Arc,
	atomic::{AtomicI32, Ordering},
};

use parking_lot::Mutex;

use crate::{Attr, Backend, Context, Severity};

/// A record captured by [`MemoryBackend`].
#[derive(Debug, Clone)]
pub struct Record {
	pub context: Context,
	pub severity: Severity,
	pub message: String,
	pub attrs: Vec<Attr>,
}

#[derive(Default)]
struct Sink {
	records: Mutex<Vec<Record>>,
	bind_calls: Mutex<Vec<Vec<Attr>>>,
	min_severity: AtomicI32,
}

/// Recording backend. Handles derived from one `MemoryBackend` share its
/// sink, so records emitted through any derived entry show up here.
///
/// `log` records unconditionally: the minimum severity only drives
/// `enabled`, which makes visible whether a caller checked it.
#[derive(Clone)]
pub struct MemoryBackend {
	sink: Arc<Sink>,
	bound: Arc<[Attr]>,
}

impl MemoryBackend {
	/// Everything enabled.
	pub fn new() -> Self {
		let sink = Sink {
			min_severity: AtomicI32::new(i32::MIN),
			..Default::default()
		};
		Self {
			sink: Arc::new(sink),
			bound: Arc::from(Vec::new()),
		}
	}

	/// Records below `severity` are reported disabled. Shared by all handles.
	pub fn set_min_severity(&self, severity: Severity) {
		self.sink.min_severity.store(severity.0, Ordering::SeqCst);
	}

	pub fn records(&self) -> Vec<Record> {
		self.sink.records.lock().clone()
	}

	/// The attribute batches passed to [`Backend::with_attrs`], in call order.
	pub fn bind_calls(&self) -> Vec<Vec<Attr>> {
		self.sink.bind_calls.lock().clone()
	}

	/// Attributes bound to this handle.
	pub fn bound(&self) -> Vec<Attr> {
		self.bound.to_vec()
	}

	/// Whether both handles carry the very same binding.
	pub fn same_binding(&self, other: &MemoryBackend) -> bool {
		Arc::ptr_eq(&self.sink, &other.sink) && Arc::ptr_eq(&self.bound, &other.bound)
	}
}

impl Default for MemoryBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl Backend for MemoryBackend {
	fn with_attrs(&self, attrs: &[Attr]) -> Self {
		self.sink.bind_calls.lock().push(attrs.to_vec());
		let mut bound = Vec::with_capacity(self.bound.len() + attrs.len());
		bound.extend_from_slice(&self.bound);
		bound.extend_from_slice(attrs);
		Self {
			sink: Arc::clone(&self.sink),
			bound: Arc::from(bound),
		}
	}

	fn enabled(&self, _ctx: &Context, severity: Severity) -> bool {
		severity.0 >= self.sink.min_severity.load(Ordering::SeqCst)
	}

	fn log(&self, ctx: &Context, severity: Severity, message: &str) {
		self.sink.records.lock().push(Record {
			context: ctx.clone(),
			severity,
			message: message.to_string(),
			attrs: self.bound.to_vec(),
		});
	}
}

impl std::fmt::Debug for MemoryBackend {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryBackend").field("bound", &self.bound).finish_non_exhaustive()
	}
}
