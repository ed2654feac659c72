// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Attr, Context, Severity};

/// The structured-logging backend an [`Entry`](crate::Entry) writes to.
///
/// A backend value is a handle: binding attributes returns a new handle and
/// never changes the receiver, so handles can be shared freely between
/// threads and entries. Formatting, filtering and writing are entirely the
/// backend's business.
pub trait Backend: Clone + Send + Sync {
	/// Return a handle that carries `attrs` in addition to everything this
	/// handle already carries, in order. Duplicated keys are kept.
	fn with_attrs(&self, attrs: &[Attr]) -> Self;

	/// Whether a record of `severity` would be written under `ctx`.
	fn enabled(&self, ctx: &Context, severity: Severity) -> bool;

	/// Write one record carrying the bound attributes.
	fn log(&self, ctx: &Context, severity: Severity, message: &str);
}
