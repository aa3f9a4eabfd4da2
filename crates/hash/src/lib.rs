// Copyright 2025 Irreducible Inc.

//! A single generic engine for SHA-256, SHA-384 and SHA-512.
//!
//! A message is padded and parsed into blocks ([`preprocess`]), every block is expanded into a
//! message schedule ([`schedule`]) and folded into the accumulator ([`compression`]), and the
//! final accumulator is serialized ([`digest`]). The members of the family only differ in the
//! parameters carried by their [`Variant`] descriptor.

pub mod compression;
pub mod constants;
pub mod digest;
mod error;
pub mod hasher;
pub mod preprocess;
pub mod schedule;
pub mod variant;
pub mod word;

pub use error::*;
pub use hasher::*;
pub use variant::*;
pub use word::Word;
