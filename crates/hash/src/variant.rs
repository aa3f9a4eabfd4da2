// Copyright 2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use sha2_utils::checked_arithmetics::checked_int_div;

use crate::{
	constants::{SHA256_IV, SHA384_IV, SHA512_IV},
	error::Result,
	hasher,
	word::Word,
};

/// Number of words in the accumulator and in the working state.
pub const STATE_WORDS: usize = 8;

/// Number of words in every message block, for all variants.
pub const BLOCK_WORDS: usize = 16;

/// The running hash value, chained across all blocks of one message.
pub type State<W> = [W; STATE_WORDS];

/// A parsed message block.
pub type Block<W> = [W; BLOCK_WORDS];

/// Compile-time descriptor of one member of the SHA-2 family.
///
/// The word type fixes the round count, the round constants and the rotation amounts; the
/// variant itself contributes the initial value and how much of the final state is emitted.
pub trait Variant {
	type Word: Word;

	const KIND: VariantKind;
	const IV: State<Self::Word>;
	/// Number of leading state words serialized into the digest.
	const OUTPUT_WORDS: usize;

	const BLOCK_BYTES: usize = BLOCK_WORDS * <Self::Word as Word>::BYTES;
	/// The bit length of the message is appended in a field two words wide.
	const LENGTH_FIELD_BYTES: usize = 2 * <Self::Word as Word>::BYTES;
	const DIGEST_BYTES: usize = Self::OUTPUT_WORDS * <Self::Word as Word>::BYTES;

	/// Hashes `message` and returns the lowercase hex digest.
	fn hash(message: impl AsRef<[u8]>) -> Result<String>
	where
		Self: Sized,
	{
		hasher::hash::<Self>(message.as_ref())
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha384;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512;

impl Variant for Sha256 {
	type Word = u32;

	const KIND: VariantKind = VariantKind::Sha256;
	const IV: State<u32> = SHA256_IV;
	const OUTPUT_WORDS: usize = 8;
}

impl Variant for Sha384 {
	type Word = u64;

	const KIND: VariantKind = VariantKind::Sha384;
	const IV: State<u64> = SHA384_IV;
	const OUTPUT_WORDS: usize = 6;
}

impl Variant for Sha512 {
	type Word = u64;

	const KIND: VariantKind = VariantKind::Sha512;
	const IV: State<u64> = SHA512_IV;
	const OUTPUT_WORDS: usize = 8;
}

/// Selects a variant at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
	Sha256,
	Sha384,
	Sha512,
}

/// One row of the variant parameter table, all sizes in bits unless noted otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantParams {
	pub word_bits: u32,
	pub block_bits: usize,
	pub length_field_bits: usize,
	/// Number of schedule words, equal to the number of rounds.
	pub schedule_len: usize,
	pub output_words: usize,
}

impl VariantParams {
	/// Number of hex characters in a digest.
	pub const fn hex_len(&self) -> usize {
		self.output_words * self.word_bits as usize / 4
	}

	const fn of<V: Variant>() -> Self {
		let word_bits = <V::Word as Word>::BITS;
		let block_bits = V::BLOCK_BYTES * 8;
		assert!(checked_int_div(block_bits, word_bits as usize) == BLOCK_WORDS);
		Self {
			word_bits,
			block_bits,
			length_field_bits: V::LENGTH_FIELD_BYTES * 8,
			schedule_len: <V::Word as Word>::ROUNDS,
			output_words: V::OUTPUT_WORDS,
		}
	}
}

impl VariantKind {
	pub const ALL: [Self; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];

	pub const fn params(self) -> VariantParams {
		match self {
			Self::Sha256 => VariantParams::of::<Sha256>(),
			Self::Sha384 => VariantParams::of::<Sha384>(),
			Self::Sha512 => VariantParams::of::<Sha512>(),
		}
	}

	/// Hashes `message` with the selected variant.
	pub fn hash(self, message: impl AsRef<[u8]>) -> Result<String> {
		match self {
			Self::Sha256 => Sha256::hash(message),
			Self::Sha384 => Sha384::hash(message),
			Self::Sha512 => Sha512::hash(message),
		}
	}
}

impl fmt::Display for VariantKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Sha256 => "SHA256",
			Self::Sha384 => "SHA384",
			Self::Sha512 => "SHA512",
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SHA-2 variant {0:?}, expected one of 256, 384, 512")]
pub struct UnknownVariant(pub String);

impl FromStr for VariantKind {
	type Err = UnknownVariant;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.to_ascii_lowercase().replace(['-', '_'], "");
		match normalized.trim_start_matches("sha") {
			"256" => Ok(Self::Sha256),
			"384" => Ok(Self::Sha384),
			"512" => Ok(Self::Sha512),
			_ => Err(UnknownVariant(s.to_string())),
		}
	}
}
