// Copyright 2025 Irreducible Inc.

/// Reports a broken internal invariant.
///
/// The error is logged and then returned from the enclosing function. With the
/// `abort_on_violation` feature the process panics instead, since such a failure can only be
/// caused by a defect and must never be recovered from.
#[cfg(feature = "abort_on_violation")]
#[macro_export]
macro_rules! invariant_violation {
	($err:expr) => {{
		let err = $err;
		$crate::__tracing::error!(%err, "internal invariant violated");
		panic!("{}", err);
	}};
}

#[cfg(not(feature = "abort_on_violation"))]
#[macro_export]
macro_rules! invariant_violation {
	($err:expr) => {{
		let err = $err;
		$crate::__tracing::error!(%err, "internal invariant violated");
		return Err(err.into());
	}};
}

/// Checks an internal invariant, see [`invariant_violation!`].
#[macro_export]
macro_rules! ensure_invariant {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::invariant_violation!($err);
		}
	};
}
