// Copyright 2025 Irreducible Inc.

//! The keyed round function E: a 12-round substitution-permutation cipher over 512-bit blocks.

use crate::{
	block::{lps, xor, xor_assign},
	consts::{Block, ROUNDS, ROUND_CONSTANTS},
};

/// Iterator over the round keys K2..K13 derived from an initial key K1.
#[derive(Debug, Clone)]
pub struct KeySchedule {
	key: Block,
	round: usize,
}

impl KeySchedule {
	pub fn new(key: Block) -> Self {
		Self { key, round: 0 }
	}
}

impl Iterator for KeySchedule {
	type Item = Block;

	fn next(&mut self) -> Option<Block> {
		let constant = ROUND_CONSTANTS.get(self.round)?;
		xor_assign(&mut self.key, constant);
		lps(&mut self.key);
		self.round += 1;
		Some(self.key)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = ROUNDS - self.round;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for KeySchedule {}

/// Encrypts `m` under `key`.
///
/// The key is taken by value and exhausted into its twelfth derived round key; the caller's copy
/// is left as it was.
pub fn encrypt(key: Block, m: &Block) -> Block {
	let mut state = xor(m, &key);
	for round_key in KeySchedule::new(key) {
		lps(&mut state);
		xor_assign(&mut state, &round_key);
	}
	state
}
