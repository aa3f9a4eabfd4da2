// Copyright 2025 Irreducible Inc.

//! Message padding and block parsing.

use sha2_utils::{checked_arithmetics::checked_round_up, ensure_invariant};

use crate::{
	error::{Error, Result},
	variant::{Block, Variant, BLOCK_WORDS},
	word::Word,
};

/// First byte of the padding: the single appended 1-bit followed by seven 0-bits.
const PADDING_MARKER: u8 = 0x80;

/// Returns the bit length of a message of `len` bytes, checking that it can be written into
/// a length field of `field_bits` bits.
pub fn message_bit_length(len: usize, field_bits: u32) -> Result<u128> {
	let bits = len as u128 * 8;
	let fits = field_bits >= u128::BITS || bits >> field_bits == 0;
	if !fits {
		return Err(Error::InputTooLarge {
			bytes: len,
			field_bits,
		});
	}
	Ok(bits)
}

/// Number of bytes in the padded form of a message of `len` bytes.
fn padded_len<V: Variant>(len: usize) -> Result<usize> {
	message_bit_length(len, 8 * V::LENGTH_FIELD_BYTES as u32)?;
	len.checked_add(1 + V::LENGTH_FIELD_BYTES)
		.and_then(|min_len| checked_round_up(min_len, V::BLOCK_BYTES))
		.ok_or(Error::InputTooLarge {
			bytes: len,
			field_bits: 8 * V::LENGTH_FIELD_BYTES as u32,
		})
}

/// Number of blocks a message of `len` bytes occupies once padded.
pub fn padded_block_count<V: Variant>(len: usize) -> Result<usize> {
	Ok(padded_len::<V>(len)? / V::BLOCK_BYTES)
}

/// Pads `message` and parses it into blocks of 16 big-endian words.
///
/// The padding is a single 1-bit, the minimal run of 0-bits, and the bit length of the
/// message as a big-endian integer filling the last [`Variant::LENGTH_FIELD_BYTES`] bytes of
/// the final block.
pub fn preprocess<V: Variant>(message: &[u8]) -> Result<Vec<Block<V::Word>>> {
	let bit_len = message_bit_length(message.len(), 8 * V::LENGTH_FIELD_BYTES as u32)?;
	let padded_len = padded_len::<V>(message.len())?;

	let mut padded = vec![0u8; padded_len];
	padded[..message.len()].copy_from_slice(message);
	padded[message.len()] = PADDING_MARKER;
	let length_field = &bit_len.to_be_bytes()[16 - V::LENGTH_FIELD_BYTES..];
	padded[padded_len - V::LENGTH_FIELD_BYTES..].copy_from_slice(length_field);

	let blocks = padded
		.chunks_exact(V::BLOCK_BYTES)
		.map(parse_block::<V::Word>)
		.collect::<Result<Vec<_>>>()?;

	tracing::debug!(
		variant = %V::KIND,
		message_len = message.len(),
		blocks = blocks.len(),
		"message padded"
	);

	Ok(blocks)
}

/// Splits one padded block into its big-endian words.
fn parse_block<W: Word>(bytes: &[u8]) -> Result<Block<W>> {
	ensure_invariant!(
		bytes.len() == BLOCK_WORDS * W::BYTES,
		Error::InternalInvariantViolation("block does not hold exactly 16 words")
	);

	let mut block = [W::default(); BLOCK_WORDS];
	for (word, chunk) in block.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
		*word = W::from_be_slice(chunk);
	}
	Ok(block)
}
