// Copyright 2025 Irreducible Inc.

//! This module implements the GOST R 34.11-2012 hash function, also known as Streebog.
//!
//! Messages are read as the standard writes them: the first byte of the message is its most
//! significant byte. Full blocks are therefore taken from the end of the byte string, and the
//! leading `len % 64` bytes form the padded tail block.

use tracing::{instrument, trace};

use crate::{
	block::{add_bits, add_mod512, to_external_order, to_internal_order},
	compression::{CompressionFunction, StreebogCompression},
	consts::{Block, BLOCK_BITS, BLOCK_SIZE, ZERO},
	output::Digest,
	width::DigestWidth,
	Error,
};

/// Chaining value, block counter and checksum of one hash computation.
#[derive(Debug, Clone)]
struct StreebogState<C> {
	h: Block,
	n: Block,
	sigma: Block,
	compression: C,
}

impl<C: CompressionFunction<Block, 3>> StreebogState<C> {
	fn new(iv: &Block, compression: C) -> Self {
		Self {
			h: *iv,
			n: ZERO,
			sigma: ZERO,
			compression,
		}
	}

	/// Compresses one full block given in internal order.
	fn absorb(&mut self, block: &Block, counter_increment: &Block) {
		self.h = self.compression.compress([self.h, self.n, *block]);
		self.n = add_mod512(&self.n, counter_increment);
		self.sigma = add_mod512(&self.sigma, block);
	}

	fn absorb_tail(&mut self, tail: &[u8]) {
		debug_assert!(tail.len() < BLOCK_SIZE);
		let block = pad(tail);
		self.h = self.compression.compress([self.h, self.n, block]);
		// The tail is shorter than a block, so its bit length fits in 9 bits.
		self.n = add_bits(&self.n, (tail.len() * 8) as u16);
		self.sigma = add_mod512(&self.sigma, &block);
	}

	/// Folds the block counter and checksum into the chaining value and returns it.
	fn finalize(self) -> Block {
		let h = self.compression.compress([self.h, ZERO, self.n]);
		self.compression.compress([h, ZERO, self.sigma])
	}
}

/// Builds the padded tail block in internal order.
///
/// The message bytes are right-aligned and immediately preceded by a single `0x01` byte, so the
/// padding bit directly follows the last message bit when the block is read as a big-endian bit
/// string.
fn pad(tail: &[u8]) -> Block {
	let mut padded = [0u8; BLOCK_SIZE];
	let start = BLOCK_SIZE - tail.len();
	padded[start..].copy_from_slice(tail);
	padded[start - 1] = 0x01;
	to_internal_order(&padded)
}

/// A Streebog hasher configured for one digest width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streebog {
	width: DigestWidth,
}

impl Streebog {
	/// Creates a hasher producing `width_bits`-bit digests.
	///
	/// Fails for any width other than 256 or 512.
	pub fn new(width_bits: usize) -> Result<Self, Error> {
		let width = DigestWidth::try_from(width_bits)?;
		Ok(Self::with_width(width))
	}

	pub const fn with_width(width: DigestWidth) -> Self {
		Self { width }
	}

	pub fn width(&self) -> DigestWidth {
		self.width
	}

	/// Hashes a complete message.
	#[instrument("Streebog::compute", skip_all, level = "debug", fields(width = self.width.bits(), len = message.len()))]
	pub fn compute(&self, message: &[u8]) -> Digest {
		let mut state = StreebogState::new(self.width.iv(), StreebogCompression);

		let mut remaining = message;
		let mut full_blocks = 0usize;
		while let Some((rest, chunk)) = remaining.split_last_chunk::<BLOCK_SIZE>() {
			state.absorb(&to_internal_order(chunk), &BLOCK_BITS);
			remaining = rest;
			full_blocks += 1;
		}
		state.absorb_tail(remaining);
		trace!(full_blocks, tail_len = remaining.len(), "absorbed message");

		let h = to_external_order(&state.finalize());
		// The 256-bit digest is the most significant half of the chaining value.
		Digest::new(h, self.width)
	}
}

/// Computes the 256-bit Streebog digest of `message`.
pub fn streebog256(message: &[u8]) -> [u8; 32] {
	let digest = Streebog::with_width(DigestWidth::Bits256).compute(message);
	let mut out = [0u8; 32];
	out.copy_from_slice(digest.as_bytes());
	out
}

/// Computes the 512-bit Streebog digest of `message`.
pub fn streebog512(message: &[u8]) -> [u8; 64] {
	let digest = Streebog::with_width(DigestWidth::Bits512).compute(message);
	let mut out = [0u8; 64];
	out.copy_from_slice(digest.as_bytes());
	out
}
