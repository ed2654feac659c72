// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Request-scoped context carried by every entry.
//!
//! The context provides backends with access to:
//! - Cancellation status of the surrounding operation
//! - An optional deadline
//! - Request-scoped values (request ids, tenant, ...)
//!
//! The logging facade never acts on cancellation itself; it only hands the
//! context to the backend alongside each record.

use std::{
	fmt,
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering},
	},
	time::{Duration, Instant},
};

use crate::Value;

/// A cancellation token for signaling that an operation was abandoned.
#[derive(Clone)]
pub struct CancellationToken {
	cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
	/// Create a new cancellation token.
	pub fn new() -> Self {
		Self {
			cancelled: Arc::new(AtomicBool::new(false)),
		}
	}

	/// Signal cancellation.
	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::SeqCst);
	}

	/// Check if cancellation was requested.
	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::SeqCst)
	}
}

impl Default for CancellationToken {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for CancellationToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CancellationToken").field("cancelled", &self.is_cancelled()).finish()
	}
}

struct ValueNode {
	key: &'static str,
	value: Value,
	parent: Option<Arc<ValueNode>>,
}

/// Cheaply clonable, immutable context handle.
///
/// Every `with_*` method returns a new context; the receiver is untouched.
#[derive(Clone)]
pub struct Context {
	tokens: Arc<[CancellationToken]>,
	deadline: Option<Instant>,
	values: Option<Arc<ValueNode>>,
}

impl Context {
	/// The root context: never cancelled, no deadline, no values.
	pub fn background() -> Self {
		Self {
			tokens: Arc::from(Vec::new()),
			deadline: None,
			values: None,
		}
	}

	/// Derive a context that is cancelled when the returned token is, or
	/// when any ancestor is.
	pub fn with_cancel(&self) -> (Context, CancellationToken) {
		let token = CancellationToken::new();
		let mut tokens = self.tokens.to_vec();
		tokens.push(token.clone());
		let ctx = Context {
			tokens: Arc::from(tokens),
			deadline: self.deadline,
			values: self.values.clone(),
		};
		(ctx, token)
	}

	/// Derive a context with a deadline. An earlier inherited deadline wins.
	pub fn with_deadline(&self, deadline: Instant) -> Context {
		let deadline = match self.deadline {
			Some(existing) if existing <= deadline => existing,
			_ => deadline,
		};
		Context {
			tokens: Arc::clone(&self.tokens),
			deadline: Some(deadline),
			values: self.values.clone(),
		}
	}

	pub fn with_timeout(&self, timeout: Duration) -> Context {
		self.with_deadline(Instant::now() + timeout)
	}

	/// Derive a context carrying `key`. Shadows any ancestor value with the
	/// same key.
	pub fn with_value(&self, key: &'static str, value: impl Into<Value>) -> Context {
		Context {
			tokens: Arc::clone(&self.tokens),
			deadline: self.deadline,
			values: Some(Arc::new(ValueNode {
				key,
				value: value.into(),
				parent: self.values.clone(),
			})),
		}
	}

	/// Look up the nearest value stored under `key`.
	pub fn value(&self, key: &str) -> Option<&Value> {
		let mut node = self.values.as_deref();
		while let Some(current) = node {
			if current.key == key {
				return Some(&current.value);
			}
			node = current.parent.as_deref();
		}
		None
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// True once any token in the chain is cancelled or the deadline passed.
	pub fn is_cancelled(&self) -> bool {
		if self.tokens.iter().any(CancellationToken::is_cancelled) {
			return true;
		}
		self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
	}
}

impl Default for Context {
	fn default() -> Self {
		Self::background()
	}
}

impl fmt::Debug for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Context")
			.field("cancelled", &self.is_cancelled())
			.field("deadline", &self.deadline)
			.finish_non_exhaustive()
	}
}
