// Copyright 2025 Irreducible Inc.

use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("unsupported digest width {bits} bits, expected 256 or 512")]
	UnsupportedDigestWidth { bits: usize },
	#[error("digest width is not a number: {0}")]
	InvalidDigestWidth(#[from] ParseIntError),
	#[error("digest is {actual} bytes long, expected {expected}")]
	DigestWidthMismatch { expected: usize, actual: usize },
}
