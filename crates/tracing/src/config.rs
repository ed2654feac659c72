// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Subscriber configuration.

use chainlog::Level;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::{Error, Result, TracingBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Compact,
	Json,
}

/// How records reach the terminal.
///
/// ```
/// # use chainlog_tracing::{LogFormat, TracingConfig};
/// let config: TracingConfig = serde_json::from_str(r#"{"level":"debug","format":"json"}"#).unwrap();
/// assert_eq!(config.format, LogFormat::Json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TracingConfig {
	/// Minimum level, used when neither `filter` nor `RUST_LOG` is set.
	pub level: Level,
	/// Explicit `EnvFilter` directive; wins over `RUST_LOG`.
	pub filter: Option<String>,
	pub format: LogFormat,
	pub ansi: bool,
}

impl Default for TracingConfig {
	fn default() -> Self {
		Self {
			level: Level::Info,
			filter: None,
			format: LogFormat::default(),
			ansi: true,
		}
	}
}

impl TracingConfig {
	pub fn env_filter(&self) -> Result<EnvFilter> {
		if let Some(directive) = &self.filter {
			return EnvFilter::try_new(directive).map_err(|err| Error::InvalidFilter {
				directive: directive.clone(),
				reason: err.to_string(),
			});
		}
		match EnvFilter::try_from_default_env() {
			Ok(filter) => Ok(filter),
			Err(_) => Ok(EnvFilter::new(level_directive(self.level))),
		}
	}

	/// Install a global fmt subscriber. Fails if one is already installed.
	pub fn install(&self) -> Result<()> {
		let filter = self.env_filter()?;
		let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(self.ansi);
		let installed = match self.format {
			LogFormat::Pretty => builder.pretty().try_init(),
			LogFormat::Compact => builder.compact().try_init(),
			LogFormat::Json => builder.json().try_init(),
		};
		installed.map_err(|err| Error::AlreadyInstalled(err.to_string()))
	}

	/// A backend that drops records below the configured level.
	pub fn backend(&self) -> TracingBackend {
		TracingBackend::new().with_min_level(self.level)
	}
}

fn level_directive(level: Level) -> &'static str {
	match level {
		Level::Panic | Level::Fatal | Level::Error => "error",
		Level::Warn => "warn",
		Level::Info => "info",
		Level::Debug => "debug",
		Level::Trace => "trace",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config: TracingConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, TracingConfig::default());
		assert_eq!(config.level, Level::Info);
		assert!(config.ansi);
	}

	#[test]
	fn test_warn_level_name() {
		let config: TracingConfig = serde_json::from_str(r#"{"level": "warn"}"#).unwrap();
		assert_eq!(config.level, Level::Warn);
		let written = serde_json::to_value(&config).unwrap();
		assert_eq!(written["level"], "warning");
	}

	#[test]
	fn test_explicit_filter() {
		let config = TracingConfig {
			filter: Some("chainlog=debug,warn".to_string()),
			..Default::default()
		};
		let filter = config.env_filter().unwrap();
		assert!(filter.to_string().contains("chainlog=debug"));
	}

	#[test]
	fn test_invalid_filter_is_reported() {
		let config = TracingConfig {
			filter: Some("chainlog=notalevel".to_string()),
			..Default::default()
		};
		let err = config.env_filter().unwrap_err();
		assert!(matches!(err, Error::InvalidFilter { .. }), "{err}");
	}

	#[test]
	fn test_backend_honours_level() {
		let backend = TracingConfig {
			level: Level::Error,
			..Default::default()
		}
		.backend();
		assert!(!chainlog::Backend::enabled(&backend, &chainlog::Context::background(), chainlog::Severity::WARN));
	}

	#[test]
	fn test_level_directive_collapses_terminal_levels() {
		assert_eq!(level_directive(Level::Panic), "error");
		assert_eq!(level_directive(Level::Fatal), "error");
		assert_eq!(level_directive(Level::Warn), "warn");
	}
}
