// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Leveled logging over a structured backend.
//!
//! Build a [`Logger`] around a [`Backend`] handle, derive [`Entry`] values by
//! attaching fields or a [`Context`], and log through level-named methods:
//!
//! ```
//! use chainlog::{FieldLogger, LevelLogger, Logger, testing::MemoryBackend, values};
//!
//! let backend = MemoryBackend::new();
//! let logger = Logger::new(None, backend.clone());
//!
//! let request = logger.with_field("request_id", "r-42");
//! request.infof("served %d bytes", &values![512]);
//! request.with_field("status", 404).warnln(&values!["not", "found"]);
//!
//! let records = backend.records();
//! assert_eq!(records[0].message, "served 512 bytes");
//! assert_eq!(records[1].attrs.len(), 2);
//! ```
//!
//! Fatal and panic methods return a [`TerminationRequest`] or an
//! [`UnrecoverableSignal`] that the caller enforces.

mod backend;
mod config;
mod context;
mod entry;
mod escalation;
mod level;
mod logger;
mod macros;
pub mod render;
pub mod testing;
mod traits;
mod value;

pub use backend::Backend;
pub use config::{DEFAULT_ERROR_KEY, LoggerConfig};
pub use context::{CancellationToken, Context};
pub use entry::Entry;
pub use escalation::{FATAL_EXIT_STATUS, SignalPayload, TerminationRequest, UnrecoverableSignal};
pub use level::{Level, ParseLevelError, Severity};
pub use logger::Logger;
pub use traits::{FieldLogger, LevelLogger};
pub use value::{Attr, Value};
