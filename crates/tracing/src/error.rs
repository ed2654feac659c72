// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid filter directive {directive:?}: {reason}")]
	InvalidFilter {
		directive: String,
		reason: String,
	},

	#[error("a global tracing subscriber is already installed: {0}")]
	AlreadyInstalled(String),
}

pub type Result<T> = std::result::Result<T, Error>;
