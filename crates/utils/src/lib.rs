// Copyright 2025 Irreducible Inc.

pub mod checked_arithmetics;
pub mod error_utils;
pub mod tracing;

#[doc(hidden)]
pub use ::tracing as __tracing;
