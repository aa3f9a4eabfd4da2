// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("message cannot be read: {0}")]
	InvalidInput(#[from] std::io::Error),
	/// The bit length of the message does not fit in the length field appended by the padding.
	#[error("message of {bytes} bytes is too large for a {field_bits}-bit length field")]
	InputTooLarge { bytes: usize, field_bits: u32 },
	/// Raised when a block or schedule does not have the size the variant prescribes. This
	/// can only be caused by a defect in this crate.
	#[error("internal invariant violated: {0}")]
	InternalInvariantViolation(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
