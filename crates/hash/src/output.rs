// Copyright 2025 Irreducible Inc.

use std::fmt;

use stribog_utils::ensure;

use crate::{consts::BLOCK_SIZE, width::DigestWidth, Error};

/// A computed hash value of either width.
///
/// Bytes are ordered most significant first, the way the standard writes hash codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
	bytes: [u8; BLOCK_SIZE],
	width: DigestWidth,
}

impl Digest {
	/// Wraps the leading `width.bytes()` bytes of `bytes`; the remainder is ignored.
	pub(crate) fn new(bytes: [u8; BLOCK_SIZE], width: DigestWidth) -> Self {
		let mut out = [0u8; BLOCK_SIZE];
		out[..width.bytes()].copy_from_slice(&bytes[..width.bytes()]);
		Self { bytes: out, width }
	}

	pub fn width(&self) -> DigestWidth {
		self.width
	}

	pub fn len(&self) -> usize {
		self.width.bytes()
	}

	pub fn is_empty(&self) -> bool {
		false
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.width.bytes()]
	}

	pub fn into_vec(self) -> Vec<u8> {
		self.as_bytes().to_vec()
	}

	/// Returns a [`fmt::Display`] adapter that prefixes the hex digest with its width.
	pub fn labeled(&self) -> Labeled<'_> {
		Labeled(self)
	}
}

impl AsRef<[u8]> for Digest {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl fmt::LowerHex for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for b in self.as_bytes() {
			write!(f, "{b:02x}")?;
		}
		Ok(())
	}
}

impl fmt::Display for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl fmt::Debug for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Digest({}, {self:x})", self.width)
	}
}

/// Display adapter produced by [`Digest::labeled`].
#[derive(Debug, Clone, Copy)]
pub struct Labeled<'a>(&'a Digest);

impl fmt::Display for Labeled<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Hash ({} bits): {:x}", self.0.width.bits(), self.0)
	}
}

impl<const N: usize> TryFrom<Digest> for [u8; N] {
	type Error = Error;

	fn try_from(digest: Digest) -> Result<Self, Error> {
		ensure!(
			digest.len() == N,
			Error::DigestWidthMismatch {
				expected: N,
				actual: digest.len(),
			}
		);
		let mut out = [0u8; N];
		out.copy_from_slice(digest.as_bytes());
		Ok(out)
	}
}
