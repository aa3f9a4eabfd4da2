// Copyright 2025 Irreducible Inc.

use sha2_utils::ensure_invariant;

use crate::{
	error::{Error, Result},
	variant::State,
	word::{big_sigma0, big_sigma1, ch, maj, Word},
};

/// Runs all rounds over one expanded block and adds the result into `accumulator`.
pub fn compress<W: Word>(accumulator: &mut State<W>, schedule: &W::Schedule) -> Result<()> {
	let schedule = schedule.as_ref();
	ensure_invariant!(
		schedule.len() == W::ROUNDS && W::ROUND_CONSTANTS.len() == W::ROUNDS,
		Error::InternalInvariantViolation("schedule length does not match the round count")
	);

	let mut state = *accumulator;
	for (&k, &w) in W::ROUND_CONSTANTS.iter().zip(schedule) {
		round(&mut state, k, w);
	}

	for (acc, s) in accumulator.iter_mut().zip(state) {
		*acc = acc.wrapping_add(s);
	}
	Ok(())
}

#[inline]
fn round<W: Word>(state: &mut State<W>, k: W, w: W) {
	let [a, b, c, d, e, f, g, h] = *state;
	let t1 = h
		.wrapping_add(big_sigma1(e))
		.wrapping_add(ch(e, f, g))
		.wrapping_add(k)
		.wrapping_add(w);
	let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
	*state = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
}
