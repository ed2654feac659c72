// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cell::Cell;

use chainlog::{Context, Level, LevelLogger, Logger, Severity, testing::MemoryBackend, values};

fn logger_at(min: Level) -> (Logger<MemoryBackend>, MemoryBackend) {
	let backend = MemoryBackend::new();
	backend.set_min_severity(min.to_severity());
	(Logger::new(Context::background(), backend.clone()), backend)
}

#[test]
fn test_gated_families_skip_disabled_levels() {
	for level in Level::ALL {
		// only `level` itself and anything more severe is enabled
		let (logger, backend) = logger_at(level);
		let produced = Cell::new(0);

		for probe in Level::ALL {
			logger.logf(probe, "%d-%s", &values![7, "x"]);
			logger.logln(probe, &values!["a", 1, true]);
			logger.log_fn(probe, || {
				produced.set(produced.get() + 1);
				values!["lazy"].to_vec()
			});
		}

		let enabled = Level::ALL.iter().filter(|probe| probe.to_severity() >= level.to_severity()).count();
		let records = backend.records();
		assert_eq!(records.len(), enabled * 3, "min level {level}");
		assert_eq!(produced.get(), enabled);
		assert!(records.iter().all(|record| record.severity >= level.to_severity()));
	}
}

#[test]
fn test_family_renderings() {
	let (logger, backend) = logger_at(Level::Trace);
	logger.tracef("%d-%s", &values![7, "x"]);
	logger.debugln(&values!["a", 1, true]);
	logger.warning(&values!["a", "b"]);

	let messages: Vec<_> = backend.records().into_iter().map(|record| (record.severity, record.message)).collect();
	assert_eq!(
		messages,
		[
			(Severity::TRACE, "7-x".to_string()),
			(Severity::DEBUG, "a 1 true".to_string()),
			(Severity::WARN, "ab".to_string()),
		]
	);
}

#[test]
fn test_fatal_emits_once_then_requests_exit() {
	let (logger, backend) = logger_at(Level::Trace);

	let request = logger.fatalf("%d", &values!["not a number"]);

	let records = backend.records();
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].severity, Severity::FATAL);
	assert_eq!(records[0].message, "%!d(string=not a number)");
	assert_ne!(request.status, 0);
}

#[test]
fn test_panicln_emits_without_signal() {
	let (logger, backend) = logger_at(Level::Trace);
	logger.panicln(&values!["still", "running"]);
	assert_eq!(backend.records()[0].message, "still running");
}
