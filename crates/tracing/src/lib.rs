// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! `tracing` integration for `chainlog`.
//!
//! ```no_run
//! use chainlog::{FieldLogger, LevelLogger, Logger, values};
//! use chainlog_tracing::TracingConfig;
//!
//! let config = TracingConfig::default();
//! config.install().expect("subscriber");
//!
//! let logger = Logger::new(None, config.backend());
//! logger.with_field("component", "ingest").infof("started %d workers", &values![4]);
//! ```

mod backend;
mod config;
mod error;

pub use backend::TracingBackend;
pub use config::{LogFormat, TracingConfig};
pub use error::{Error, Result};
