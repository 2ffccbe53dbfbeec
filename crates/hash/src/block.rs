// Copyright 2025 Irreducible Inc.

//! The X, S, P and L transforms and 512-bit modular arithmetic over [`Block`]s.
//!
//! Everything here operates in internal byte order. Conversion from and to the byte order of
//! messages and digests happens only in [`to_internal_order`] and [`to_external_order`].

use crate::consts::{Block, BLOCK_SIZE, LINEAR_COEFFS, SBOX, TAU};

/// X-transform: byte-wise XOR of two blocks.
#[inline]
pub fn xor(a: &Block, b: &Block) -> Block {
	let mut out = *a;
	xor_assign(&mut out, b);
	out
}

#[inline]
pub fn xor_assign(a: &mut Block, b: &Block) {
	for (x, y) in a.iter_mut().zip(b) {
		*x ^= y;
	}
}

/// S-transform: substitutes every byte through the S-box.
#[inline]
pub fn substitute(x: &mut Block) {
	for b in x.iter_mut() {
		*b = SBOX[*b as usize];
	}
}

/// P-transform: relabels byte positions according to `TAU`.
#[inline]
pub fn permute(x: &mut Block) {
	let src = *x;
	for (out, &t) in x.iter_mut().zip(TAU.iter()) {
		*out = src[t as usize];
	}
}

/// Multiplies a single 64-bit word by the L-transform matrix.
#[inline]
fn linear_word(word: u64) -> u64 {
	let mut acc = 0u64;
	for j in (0..64).rev() {
		if (word >> j) & 1 == 1 {
			acc ^= LINEAR_COEFFS[63 - j];
		}
	}
	acc
}

/// L-transform: multiplies each of the eight 64-bit words of the block by the fixed GF(2)
/// matrix, keeping word order.
#[inline]
pub fn linear_diffuse(x: &mut Block) {
	for chunk in x.chunks_exact_mut(8) {
		let mut word = [0u8; 8];
		word.copy_from_slice(chunk);
		let diffused = linear_word(u64::from_le_bytes(word));
		chunk.copy_from_slice(&diffused.to_le_bytes());
	}
}

/// The composition L ∘ P ∘ S, applied both to the cipher state and to the round keys.
#[inline]
pub fn lps(x: &mut Block) {
	substitute(x);
	permute(x);
	linear_diffuse(x);
}

/// Addition modulo 2^512. Overflow out of the most significant byte is discarded.
pub fn add_mod512(a: &Block, b: &Block) -> Block {
	let mut out = [0u8; BLOCK_SIZE];
	let mut carry = 0u16;
	for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
		let sum = x as u16 + y as u16 + carry;
		*o = sum as u8;
		carry = sum >> 8;
	}
	out
}

/// Adds a bit count to a 512-bit counter.
pub fn add_bits(counter: &Block, bits: u16) -> Block {
	let mut increment = [0u8; BLOCK_SIZE];
	increment[..2].copy_from_slice(&bits.to_le_bytes());
	add_mod512(counter, &increment)
}

/// Converts 64 message bytes, most significant byte first, into internal order.
#[inline]
pub fn to_internal_order(bytes: &[u8; BLOCK_SIZE]) -> Block {
	let mut out = *bytes;
	out.reverse();
	out
}

/// Converts an internal vector into bytes with the most significant byte first.
#[inline]
pub fn to_external_order(block: &Block) -> [u8; BLOCK_SIZE] {
	let mut out = *block;
	out.reverse();
	out
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn unit_vector(bit: usize) -> Block {
		let mut v = [0u8; BLOCK_SIZE];
		v[bit / 8] = 1 << (bit % 8);
		v
	}

	#[test]
	fn test_add_mod512_carries_across_all_bytes() {
		let ones = [0xff; BLOCK_SIZE];
		let one = add_bits(&[0u8; BLOCK_SIZE], 1);
		assert_eq!(add_mod512(&ones, &one), [0u8; BLOCK_SIZE]);

		let mut almost = [0xff; BLOCK_SIZE];
		almost[63] = 0x00;
		let mut expected = [0u8; BLOCK_SIZE];
		expected[63] = 0x01;
		assert_eq!(add_mod512(&almost, &one), expected);
	}

	#[test]
	fn test_add_bits_small_values() {
		let counter = add_bits(&[0u8; BLOCK_SIZE], 504);
		let counter = add_bits(&counter, 512);
		assert_eq!(u16::from_le_bytes([counter[0], counter[1]]), 1016);
		assert!(counter[2..].iter().all(|&b| b == 0));
	}

	#[test]
	fn test_linear_diffuse_unit_vectors() {
		// The image of the most significant bit of a word is the first matrix row.
		let mut x = unit_vector(63);
		linear_diffuse(&mut x);
		assert_eq!(u64::from_le_bytes(x[..8].try_into().unwrap()), LINEAR_COEFFS[0]);
		assert!(x[8..].iter().all(|&b| b == 0));

		let mut x = unit_vector(64 * 5);
		linear_diffuse(&mut x);
		assert_eq!(u64::from_le_bytes(x[40..48].try_into().unwrap()), LINEAR_COEFFS[63]);
	}

	#[test]
	fn test_linear_matrix_full_rank() {
		// Gaussian elimination over GF(2): full rank makes the L-transform a bijection.
		let mut rows = LINEAR_COEFFS;
		let mut rank = 0;
		for bit in (0..64).rev() {
			let Some(pivot) = (rank..64).find(|&i| (rows[i] >> bit) & 1 == 1) else {
				continue;
			};
			rows.swap(rank, pivot);
			for i in 0..64 {
				if i != rank && (rows[i] >> bit) & 1 == 1 {
					rows[i] ^= rows[rank];
				}
			}
			rank += 1;
		}
		assert_eq!(rank, 64);
	}

	#[test]
	fn test_permute_is_involution() {
		let original: Block = std::array::from_fn(|i| i as u8);
		let mut x = original;
		permute(&mut x);
		assert_eq!(x[1], 8);
		assert_eq!(x[8], 1);
		permute(&mut x);
		assert_eq!(x, original);
	}

	#[test]
	fn test_byte_order_conversion() {
		let bytes: [u8; BLOCK_SIZE] = std::array::from_fn(|i| i as u8);
		let internal = to_internal_order(&bytes);
		assert_eq!(internal[0], 63);
		assert_eq!(to_external_order(&internal), bytes);
	}

	proptest! {
		#[test]
		fn test_linear_diffuse_single_bit_flips(
			input in prop::array::uniform32(any::<u8>()),
			bit in 0usize..512,
		) {
			let mut x = [0u8; BLOCK_SIZE];
			x[..32].copy_from_slice(&input);
			x[32..].copy_from_slice(&input);
			let mut flipped = xor(&x, &unit_vector(bit));
			linear_diffuse(&mut x);
			linear_diffuse(&mut flipped);
			prop_assert_ne!(x, flipped);
		}

		#[test]
		fn test_linear_diffuse_is_linear(
			a in prop::collection::vec(any::<u8>(), BLOCK_SIZE),
			b in prop::collection::vec(any::<u8>(), BLOCK_SIZE),
		) {
			let a: Block = a.try_into().unwrap();
			let b: Block = b.try_into().unwrap();
			let mut sum = xor(&a, &b);
			let (mut la, mut lb) = (a, b);
			linear_diffuse(&mut sum);
			linear_diffuse(&mut la);
			linear_diffuse(&mut lb);
			prop_assert_eq!(sum, xor(&la, &lb));
		}

		#[test]
		fn test_add_mod512_undone_by_subtraction(
			a in prop::collection::vec(any::<u8>(), BLOCK_SIZE),
			b in prop::collection::vec(any::<u8>(), BLOCK_SIZE),
		) {
			let a: Block = a.try_into().unwrap();
			let b: Block = b.try_into().unwrap();
			let sum = add_mod512(&a, &b);
			// Subtracting b back out byte by byte recovers a.
			let mut borrow = 0i16;
			let mut diff = [0u8; BLOCK_SIZE];
			for i in 0..BLOCK_SIZE {
				let d = sum[i] as i16 - b[i] as i16 - borrow;
				diff[i] = d.rem_euclid(256) as u8;
				borrow = if d < 0 { 1 } else { 0 };
			}
			prop_assert_eq!(diff, a);
		}
	}
}
