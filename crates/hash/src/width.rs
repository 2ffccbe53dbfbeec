// Copyright 2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use stribog_utils::bail;

use crate::{
	consts::{Block, IV_256, IV_512},
	Error,
};

/// The two digest widths defined by GOST R 34.11-2012.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestWidth {
	Bits256,
	Bits512,
}

impl DigestWidth {
	pub const fn bits(self) -> usize {
		match self {
			Self::Bits256 => 256,
			Self::Bits512 => 512,
		}
	}

	pub const fn bytes(self) -> usize {
		self.bits() / 8
	}

	/// Initial chaining value for this width.
	pub(crate) const fn iv(self) -> &'static Block {
		match self {
			Self::Bits256 => &IV_256,
			Self::Bits512 => &IV_512,
		}
	}
}

impl TryFrom<usize> for DigestWidth {
	type Error = Error;

	fn try_from(bits: usize) -> Result<Self, Error> {
		match bits {
			256 => Ok(Self::Bits256),
			512 => Ok(Self::Bits512),
			_ => {
				bail!(Error::UnsupportedDigestWidth { bits });
			}
		}
	}
}

impl FromStr for DigestWidth {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		let bits = s.trim().parse::<usize>()?;
		Self::try_from(bits)
	}
}

impl fmt::Display for DigestWidth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Streebog-{}", self.bits())
	}
}
