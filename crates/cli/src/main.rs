// Copyright 2025 Irreducible Inc.

use std::{ffi::OsString, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sha2_hash::VariantKind;
use sha2_utils::tracing::init_tracing;

/// Prints the SHA-2 digests of a message.
#[derive(Debug, Parser)]
#[command(name = "sha2")]
struct Args {
	/// The message to hash, taken byte for byte.
	#[arg(required_unless_present = "file", conflicts_with = "file")]
	message: Option<OsString>,
	/// Hash the contents of this file instead of a command-line message.
	#[arg(short, long)]
	file: Option<PathBuf>,
	/// Only print the digest of this variant (256, 384 or 512).
	#[arg(short, long)]
	variant: Option<VariantKind>,
}

impl Args {
	fn message(&self) -> Result<Vec<u8>> {
		match (&self.message, &self.file) {
			(Some(message), _) => Ok(message.clone().into_encoded_bytes()),
			(None, Some(path)) => fs::read(path)
				.map_err(sha2_hash::Error::from)
				.with_context(|| format!("failed to read {}", path.display())),
			(None, None) => anyhow::bail!("no message given"),
		}
	}
}

/// Renders one output line per requested variant.
///
/// With a single variant only the bare digest is printed, otherwise every line is labelled.
fn render(message: &[u8], variant: Option<VariantKind>) -> Result<Vec<String>> {
	match variant {
		Some(kind) => Ok(vec![kind.hash(message)?]),
		None => VariantKind::ALL
			.into_iter()
			.map(|kind| -> Result<String> { Ok(format!("{kind}:{}", kind.hash(message)?)) })
			.collect(),
	}
}

fn main() -> Result<()> {
	init_tracing();

	let args = Args::parse();
	let message = args.message()?;
	tracing::debug!(len = message.len(), variant = ?args.variant, "hashing message");

	for line in render(&message, args.variant)? {
		println!("{line}");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::ffi::OsStr;

	use assert_matches::assert_matches;

	use super::*;

	#[test]
	fn test_all_variants_are_labelled() {
		let lines = render(b"abc", None).unwrap();
		assert_eq!(lines.len(), 3);
		assert_eq!(
			lines[0],
			"SHA256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
		);
		assert!(lines[1].starts_with("SHA384:cb00753f45a35e8b"));
		assert!(lines[2].starts_with("SHA512:ddaf35a193617aba"));
	}

	#[test]
	fn test_single_variant_is_bare() {
		let lines = render(b"", Some(VariantKind::Sha256)).unwrap();
		assert_eq!(
			lines,
			["e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"]
		);
	}

	#[test]
	fn test_parse_arguments() {
		let args = Args::try_parse_from(["sha2", "hello", "--variant", "384"]).unwrap();
		assert_eq!(args.message.as_deref(), Some(OsStr::new("hello")));
		assert_eq!(args.variant, Some(VariantKind::Sha384));
		assert_eq!(args.message().unwrap(), b"hello");
	}

	#[test]
	fn test_message_or_file_required() {
		assert!(Args::try_parse_from(["sha2"]).is_err());
		assert!(Args::try_parse_from(["sha2", "abc", "--file", "input.bin"]).is_err());
		assert!(Args::try_parse_from(["sha2", "--variant", "224", "abc"]).is_err());
	}

	#[test]
	fn test_missing_file() {
		let args = Args::try_parse_from(["sha2", "--file", "/nonexistent/sha2-input"]).unwrap();
		let err = args.message().unwrap_err();
		assert_matches!(
			err.downcast_ref::<sha2_hash::Error>(),
			Some(sha2_hash::Error::InvalidInput(_))
		);
	}
}
