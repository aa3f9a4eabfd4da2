// Copyright 2025 Irreducible Inc.

//! The arithmetic unit of the SHA-2 family and the logical functions defined over it.
//!
//! Each function below takes its width from the [`Word`] it operates on, so a rotation of a
//! 32-bit word can never be computed with 64-bit amounts or vice versa.

use std::{
	fmt::{Debug, LowerHex},
	ops::{BitAnd, BitXor, Not, Shr},
};

use crate::constants::{ROUND_CONSTANTS_32, ROUND_CONSTANTS_64};

/// Rotation and shift amounts of the Σ and σ functions for one word width.
///
/// The third amount of each small sigma is a logical right shift, all others are rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigmaConstants {
	pub big_sigma0: [u32; 3],
	pub big_sigma1: [u32; 3],
	pub small_sigma0: [u32; 3],
	pub small_sigma1: [u32; 3],
}

/// A fixed-width unsigned word together with the parameters of the SHA-2 family built on it.
///
/// All additions wrap modulo `2^BITS`.
pub trait Word:
	Copy
	+ Default
	+ Debug
	+ Eq
	+ LowerHex
	+ BitAnd<Output = Self>
	+ BitXor<Output = Self>
	+ Not<Output = Self>
	+ Shr<u32, Output = Self>
	+ Send
	+ Sync
	+ 'static
{
	const BITS: u32;
	const BYTES: usize;
	/// Number of compression rounds, equal to the message schedule length.
	const ROUNDS: usize;
	const SIGMA: SigmaConstants;
	const ROUND_CONSTANTS: &'static [Self];

	/// Statically sized message schedule holding exactly [`Word::ROUNDS`] words.
	type Schedule: AsRef<[Self]> + AsMut<[Self]> + Copy + Debug;

	const EMPTY_SCHEDULE: Self::Schedule;

	fn wrapping_add(self, rhs: Self) -> Self;

	fn rotate_right(self, n: u32) -> Self;

	/// Reads a big-endian word.
	///
	/// # Panics
	/// Panics if `bytes.len() != Self::BYTES`.
	fn from_be_slice(bytes: &[u8]) -> Self;

	/// Writes the word big-endian into `out`.
	///
	/// # Panics
	/// Panics if `out.len() != Self::BYTES`.
	fn write_be_slice(self, out: &mut [u8]);
}

macro_rules! impl_word {
	($ty:ty, $rounds:expr, $constants:expr, $sigma:expr) => {
		impl Word for $ty {
			const BITS: u32 = <$ty>::BITS;
			const BYTES: usize = std::mem::size_of::<$ty>();
			const ROUNDS: usize = $rounds;
			const SIGMA: SigmaConstants = $sigma;
			const ROUND_CONSTANTS: &'static [Self] = &$constants;

			type Schedule = [$ty; $rounds];

			const EMPTY_SCHEDULE: Self::Schedule = [0; $rounds];

			#[inline]
			fn wrapping_add(self, rhs: Self) -> Self {
				<$ty>::wrapping_add(self, rhs)
			}

			#[inline]
			fn rotate_right(self, n: u32) -> Self {
				<$ty>::rotate_right(self, n)
			}

			#[inline]
			fn from_be_slice(bytes: &[u8]) -> Self {
				let mut buf = [0u8; std::mem::size_of::<$ty>()];
				buf.copy_from_slice(bytes);
				<$ty>::from_be_bytes(buf)
			}

			#[inline]
			fn write_be_slice(self, out: &mut [u8]) {
				out.copy_from_slice(&self.to_be_bytes());
			}
		}
	};
}

impl_word!(
	u32,
	64,
	ROUND_CONSTANTS_32,
	SigmaConstants {
		big_sigma0: [2, 13, 22],
		big_sigma1: [6, 11, 25],
		small_sigma0: [7, 18, 3],
		small_sigma1: [17, 19, 10],
	}
);

impl_word!(
	u64,
	80,
	ROUND_CONSTANTS_64,
	SigmaConstants {
		big_sigma0: [28, 34, 39],
		big_sigma1: [14, 18, 41],
		small_sigma0: [1, 8, 7],
		small_sigma1: [19, 61, 6],
	}
);

#[inline]
pub fn ch<W: Word>(x: W, y: W, z: W) -> W {
	(x & y) ^ (!x & z)
}

#[inline]
pub fn maj<W: Word>(x: W, y: W, z: W) -> W {
	(x & y) ^ (x & z) ^ (y & z)
}

#[inline]
fn rotations<W: Word>(x: W, [a, b, c]: [u32; 3]) -> W {
	x.rotate_right(a) ^ x.rotate_right(b) ^ x.rotate_right(c)
}

#[inline]
fn rotations_and_shift<W: Word>(x: W, [a, b, c]: [u32; 3]) -> W {
	x.rotate_right(a) ^ x.rotate_right(b) ^ (x >> c)
}

/// Σ0, applied to the first working variable in every round.
#[inline]
pub fn big_sigma0<W: Word>(x: W) -> W {
	rotations(x, W::SIGMA.big_sigma0)
}

/// Σ1, applied to the fifth working variable in every round.
#[inline]
pub fn big_sigma1<W: Word>(x: W) -> W {
	rotations(x, W::SIGMA.big_sigma1)
}

/// σ0, used by the message schedule expansion.
#[inline]
pub fn small_sigma0<W: Word>(x: W) -> W {
	rotations_and_shift(x, W::SIGMA.small_sigma0)
}

/// σ1, used by the message schedule expansion.
#[inline]
pub fn small_sigma1<W: Word>(x: W) -> W {
	rotations_and_shift(x, W::SIGMA.small_sigma1)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_family_parameters() {
		assert_eq!(<u32 as Word>::BYTES, 4);
		assert_eq!(<u64 as Word>::BYTES, 8);
		assert_eq!(<u32 as Word>::ROUND_CONSTANTS.len(), <u32 as Word>::ROUNDS);
		assert_eq!(<u64 as Word>::ROUND_CONSTANTS.len(), <u64 as Word>::ROUNDS);
		assert_eq!(<u32 as Word>::EMPTY_SCHEDULE.len(), 64);
		assert_eq!(<u64 as Word>::EMPTY_SCHEDULE.len(), 80);
	}

	#[test]
	fn test_ch_selects_bits() {
		assert_eq!(ch(0xffff0000u32, 0x12345678, 0x9abcdef0), 0x1234def0);
		assert_eq!(ch(0u64, u64::MAX, 0x0f0f), 0x0f0f);
	}

	#[test]
	fn test_maj_takes_majority() {
		assert_eq!(maj(0b1100u32, 0b1010, 0b1001), 0b1000);
		assert_eq!(maj(u64::MAX, 0, u64::MAX), u64::MAX);
	}

	#[test]
	fn test_small_sigma_shifts_without_wrapping() {
		// The shifted-out low bits must not reappear at the top.
		assert_eq!(small_sigma0(1u32), 1u32.rotate_right(7) ^ 1u32.rotate_right(18));
		assert_eq!(small_sigma1(1u64), 1u64.rotate_right(19) ^ 1u64.rotate_right(61));
	}

	#[test]
	fn test_big_sigma_of_single_bit() {
		assert_eq!(big_sigma0(1u32), (1 << 30) | (1 << 19) | (1 << 10));
		assert_eq!(big_sigma1(1u64), (1 << 50) | (1 << 46) | (1 << 23));
	}

	#[test]
	fn test_be_slice_layout() {
		assert_eq!(u32::from_be_slice(&[0x01, 0x02, 0x03, 0x04]), 0x01020304);
		let mut out = [0u8; 8];
		0x0102030405060708u64.write_be_slice(&mut out);
		assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
	}

	proptest! {
		#[test]
		fn test_ch_matches_bitwise_choice(x in any::<u32>(), y in any::<u32>(), z in any::<u32>()) {
			for bit in 0..32 {
				let selected = if x >> bit & 1 == 1 { y } else { z };
				prop_assert_eq!(ch(x, y, z) >> bit & 1, selected >> bit & 1);
			}
		}

		#[test]
		fn test_sigma_is_linear(x in any::<u64>(), y in any::<u64>()) {
			prop_assert_eq!(big_sigma0(x ^ y), big_sigma0(x) ^ big_sigma0(y));
			prop_assert_eq!(small_sigma1(x ^ y), small_sigma1(x) ^ small_sigma1(y));
		}
	}
}
