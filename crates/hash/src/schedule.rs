// Copyright 2025 Irreducible Inc.

use crate::{
	variant::{Block, BLOCK_WORDS},
	word::{small_sigma0, small_sigma1, Word},
};

/// Expands a block into the message schedule consumed by the compression rounds.
pub fn expand<W: Word>(block: &Block<W>) -> W::Schedule {
	let mut schedule = W::EMPTY_SCHEDULE;
	let w = schedule.as_mut();
	w[..BLOCK_WORDS].copy_from_slice(block);
	for i in BLOCK_WORDS..w.len() {
		w[i] = w[i - 16]
			.wrapping_add(small_sigma0(w[i - 15]))
			.wrapping_add(w[i - 7])
			.wrapping_add(small_sigma1(w[i - 2]));
	}
	schedule
}
