// Copyright 2024-2025 Irreducible Inc.
// Copyright (c) 2024 The Plonky3 Authors

//! Compression function interfaces and the GOST R 34.11-2012 compression function g.
//!
//! The traits are taken from [p3_symmetric](https://github.com/Plonky3/Plonky3/blob/main/symmetric/src/compression.rs) in [Plonky3].
//!
//! [Plonky3]: <https://github.com/plonky3/plonky3>

use crate::{
	block::{lps, xor, xor_assign},
	cipher::encrypt,
	consts::Block,
};

/// An `N`-to-1 compression function collision-resistant in a hash tree setting.
///
/// Unlike `CompressionFunction`, it may not be collision-resistant in general.
/// Instead it is only collision-resistant in hash-tree like settings where
/// the preimage of a non-leaf node must consist of compression outputs.
pub trait PseudoCompressionFunction<T, const N: usize>: Clone {
	fn compress(&self, input: [T; N]) -> T;
}

/// An `N`-to-1 compression function.
pub trait CompressionFunction<T, const N: usize>: PseudoCompressionFunction<T, N> {}

/// The compression function g, taking `[h, N, m]` to the next chaining value.
///
/// This is a Miyaguchi–Preneel construction over the keyed round function: the key is derived
/// from the chaining value and block counter, and both `h` and `m` are fed forward.
#[derive(Debug, Default, Clone, Copy)]
pub struct StreebogCompression;

impl PseudoCompressionFunction<Block, 3> for StreebogCompression {
	fn compress(&self, input: [Block; 3]) -> Block {
		let [h, n, m] = input;
		let mut key = xor(&h, &n);
		lps(&mut key);
		let mut out = encrypt(key, &m);
		xor_assign(&mut out, &h);
		xor_assign(&mut out, &m);
		out
	}
}

impl CompressionFunction<Block, 3> for StreebogCompression {}
