// Copyright 2025 Irreducible Inc.

use std::io::Read;

use tracing::instrument;

use crate::{
	compression::compress,
	digest::{assemble, assemble_bytes},
	error::Result,
	preprocess::preprocess,
	schedule::expand,
	variant::{State, Variant},
};

/// Pads `message` and folds all of its blocks into a fresh accumulator.
fn accumulate<V: Variant>(message: &[u8]) -> Result<State<V::Word>> {
	let blocks = preprocess::<V>(message)?;

	let mut accumulator = V::IV;
	for (index, block) in blocks.iter().enumerate() {
		let schedule = expand(block);
		compress(&mut accumulator, &schedule)?;
		tracing::trace!(block = index, "block compressed");
	}
	Ok(accumulator)
}

/// Hashes `message` with the variant `V` and returns the lowercase hex digest.
///
/// Each call is independent: the blocks, schedule and accumulator it allocates are owned by
/// the call and dropped on every return path.
#[instrument(skip_all, level = "debug", fields(variant = %V::KIND, len = message.len()))]
pub fn hash<V: Variant>(message: &[u8]) -> Result<String> {
	accumulate::<V>(message).map(|accumulator| assemble::<V>(&accumulator))
}

/// Hashes `message` with the variant `V` and returns the raw big-endian digest.
#[instrument(skip_all, level = "debug", fields(variant = %V::KIND, len = message.len()))]
pub fn hash_bytes<V: Variant>(message: &[u8]) -> Result<Vec<u8>> {
	accumulate::<V>(message).map(|accumulator| assemble_bytes::<V>(&accumulator))
}

/// Reads `reader` to the end and hashes everything it produced as one message.
pub fn hash_reader<V: Variant>(mut reader: impl Read) -> Result<String> {
	let mut message = Vec::new();
	reader.read_to_end(&mut message)?;
	hash::<V>(&message)
}
