// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Key under which `with_error` binds errors unless configured otherwise.
pub const DEFAULT_ERROR_KEY: &str = "error";

/// Settings applied when a [`Logger`](crate::Logger) is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
	/// Attribute key used by `with_error`.
	pub error_key: String,
}

impl LoggerConfig {
	pub fn new() -> Self {
		Self {
			error_key: DEFAULT_ERROR_KEY.to_string(),
		}
	}

	pub fn error_key(mut self, key: impl Into<String>) -> Self {
		self.error_key = key.into();
		self
	}
}

impl Default for LoggerConfig {
	fn default() -> Self {
		Self::new()
	}
}
