// Copyright 2025 Irreducible Inc.

//! Serialization of the final accumulator.

use std::fmt::Write;

use crate::{
	variant::{State, Variant},
	word::Word,
};

/// Formats the first [`Variant::OUTPUT_WORDS`] accumulator words as zero-padded lowercase hex.
pub fn assemble<V: Variant>(accumulator: &State<V::Word>) -> String {
	let width = 2 * <V::Word as Word>::BYTES;
	let mut out = String::with_capacity(V::OUTPUT_WORDS * width);
	for word in &accumulator[..V::OUTPUT_WORDS] {
		write!(out, "{word:0width$x}").expect("writing to a String cannot fail");
	}
	out
}

/// Serializes the first [`Variant::OUTPUT_WORDS`] accumulator words big-endian.
pub fn assemble_bytes<V: Variant>(accumulator: &State<V::Word>) -> Vec<u8> {
	let mut out = vec![0u8; V::DIGEST_BYTES];
	for (chunk, word) in out
		.chunks_exact_mut(<V::Word as Word>::BYTES)
		.zip(&accumulator[..V::OUTPUT_WORDS])
	{
		word.write_be_slice(chunk);
	}
	out
}
