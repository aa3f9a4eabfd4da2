// Copyright 2025 Irreducible Inc.

/// Division implementation that fails in case when `a` isn't divisible by `b`
pub const fn checked_int_div(a: usize, b: usize) -> usize {
	let result = a / b;
	assert!(b * result == a);

	result
}

/// Rounds `value` up to the next multiple of `multiple`.
///
/// Returns `None` if the result does not fit in a `usize`.
pub const fn checked_round_up(value: usize, multiple: usize) -> Option<usize> {
	let remainder = value % multiple;
	if remainder == 0 {
		Some(value)
	} else {
		value.checked_add(multiple - remainder)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_checked_int_div_success() {
		assert_eq!(checked_int_div(64, 4), 16);
		assert_eq!(checked_int_div(128, 8), 16);
		assert_eq!(checked_int_div(6, 6), 1);
	}

	#[test]
	#[should_panic]
	fn test_checked_int_div_fail() {
		_ = checked_int_div(65, 4);
	}

	#[test]
	fn test_checked_round_up() {
		assert_eq!(checked_round_up(0, 64), Some(0));
		assert_eq!(checked_round_up(1, 64), Some(64));
		assert_eq!(checked_round_up(64, 64), Some(64));
		assert_eq!(checked_round_up(65, 64), Some(128));
		assert_eq!(checked_round_up(129, 128), Some(256));
	}

	#[test]
	fn test_checked_round_up_overflow() {
		assert_eq!(checked_round_up(usize::MAX, 64), None);
		assert_eq!(checked_round_up(usize::MAX - 63, 64), Some(usize::MAX - 63));
	}
}
