// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Facade levels and the backend severity space.
//!
//! [`Level`] is what callers name when they log. [`Severity`] is what a
//! [`Backend`](crate::Backend) filters on. The translation between the two
//! is fixed, total and order preserving: a more severe level always maps to
//! a strictly larger severity value.

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Log levels, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	Panic,
	Fatal,
	Error,
	#[serde(rename = "warning", alias = "warn")]
	Warn,
	Info,
	Debug,
	Trace,
}

impl Level {
	/// Alias of [`Level::Warn`].
	pub const WARNING: Level = Level::Warn;

	pub const ALL: [Level; 7] = [
		Level::Panic,
		Level::Fatal,
		Level::Error,
		Level::Warn,
		Level::Info,
		Level::Debug,
		Level::Trace,
	];

	/// Translate into the backend's native severity.
	pub const fn to_severity(self) -> Severity {
		match self {
			Level::Trace => Severity::TRACE,
			Level::Debug => Severity::DEBUG,
			Level::Info => Severity::INFO,
			Level::Warn => Severity::WARN,
			Level::Error => Severity::ERROR,
			Level::Fatal => Severity::FATAL,
			Level::Panic => Severity::PANIC,
		}
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			Level::Panic => "panic",
			Level::Fatal => "fatal",
			Level::Error => "error",
			Level::Warn => "warning",
			Level::Info => "info",
			Level::Debug => "debug",
			Level::Trace => "trace",
		}
	}
}

impl Display for Level {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
	type Err = ParseLevelError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"panic" => Ok(Level::Panic),
			"fatal" => Ok(Level::Fatal),
			"error" => Ok(Level::Error),
			"warn" | "warning" => Ok(Level::Warn),
			"info" => Ok(Level::Info),
			"debug" => Ok(Level::Debug),
			"trace" => Ok(Level::Trace),
			_ => Err(ParseLevelError(s.to_string())),
		}
	}
}

/// Backend severity. Larger is more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Severity(pub i32);

impl Severity {
	pub const TRACE: Severity = Severity(-8);
	pub const DEBUG: Severity = Severity(-4);
	pub const INFO: Severity = Severity(0);
	pub const WARN: Severity = Severity(4);
	pub const ERROR: Severity = Severity(8);
	pub const FATAL: Severity = Severity(12);
	pub const PANIC: Severity = Severity(16);

	/// The most severe level whose severity does not exceed `self`.
	///
	/// Values below [`Severity::TRACE`] map to [`Level::Trace`].
	pub fn to_level(self) -> Level {
		Level::ALL.into_iter().find(|level| level.to_severity() <= self).unwrap_or(Level::Trace)
	}
}

impl Display for Severity {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let level = self.to_level();
		let delta = self.0 - level.to_severity().0;
		if delta == 0 {
			write!(f, "{}", level.as_str().to_uppercase())
		} else {
			write!(f, "{}{:+}", level.as_str().to_uppercase(), delta)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mapping_preserves_order() {
		// Level::ALL runs most severe first
		for pair in Level::ALL.windows(2) {
			assert!(pair[0].to_severity() > pair[1].to_severity(), "{} vs {}", pair[0], pair[1]);
		}
	}

	#[test]
	fn test_severity_round_trips_to_level() {
		for level in Level::ALL {
			assert_eq!(level.to_severity().to_level(), level);
		}
		assert_eq!(Severity(1).to_level(), Level::Info);
		assert_eq!(Severity(-100).to_level(), Level::Trace);
		assert_eq!(Severity(100).to_level(), Level::Panic);
	}

	#[test]
	fn test_parse() {
		assert_eq!("WARNING".parse::<Level>().unwrap(), Level::WARNING);
		assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
		assert_eq!("Trace".parse::<Level>().unwrap(), Level::Trace);
		assert_eq!("loud".parse::<Level>(), Err(ParseLevelError("loud".to_string())));
	}

	#[test]
	fn test_severity_display() {
		assert_eq!(Severity::INFO.to_string(), "INFO");
		assert_eq!(Severity(6).to_string(), "WARNING+2");
	}

	#[test]
	fn test_serde_by_name() {
		assert_eq!(serde_json::to_string(&Level::Error).unwrap(), "\"error\"");
		assert_eq!(serde_json::from_str::<Level>("\"warning\"").unwrap(), Level::Warn);
		assert_eq!(serde_json::from_str::<Level>("\"warn\"").unwrap(), Level::Warn);
	}

	#[test]
	fn test_serde_name_matches_display() {
		for level in Level::ALL {
			let written = serde_json::to_string(&level).unwrap();
			assert_eq!(written, format!("\"{level}\""));
			assert_eq!(serde_json::from_str::<Level>(&written).unwrap(), level);
		}
		assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"warning\"");
	}
}
