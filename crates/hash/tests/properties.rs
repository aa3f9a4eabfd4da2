// Copyright 2025 Irreducible Inc.

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use sha2::Digest;
use sha2_hash::{hash, hash_bytes, Sha256, Sha384, Sha512, Variant};

fn differing_bits(a: &[u8], b: &[u8]) -> u32 {
	a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

fn check_avalanche<V: Variant>() {
	let mut rng = StdRng::seed_from_u64(0);
	let output_bits = 8 * V::DIGEST_BYTES as u32;
	let trials = 64;

	let mut total = 0;
	for _ in 0..trials {
		let mut message = vec![0u8; rng.gen_range(1..300)];
		rng.fill_bytes(&mut message);
		let original = hash_bytes::<V>(&message).unwrap();

		let bit = rng.gen_range(0..message.len() * 8);
		message[bit / 8] ^= 1 << (bit % 8);
		let flipped = hash_bytes::<V>(&message).unwrap();

		let changed = differing_bits(&original, &flipped);
		assert!(changed > output_bits / 4, "only {changed} of {output_bits} bits changed");
		total += changed;
	}

	let mean = total as f64 / (trials as f64 * output_bits as f64);
	assert!((0.45..0.55).contains(&mean), "mean fraction of changed bits is {mean}");
}

#[test]
fn test_single_bit_flip_sha256() {
	check_avalanche::<Sha256>();
}

#[test]
fn test_single_bit_flip_sha384() {
	check_avalanche::<Sha384>();
}

#[test]
fn test_single_bit_flip_sha512() {
	check_avalanche::<Sha512>();
}

proptest! {
	#[test]
	fn test_sha256_vs_reference(input in prop::collection::vec(any::<u8>(), 0..=1024)) {
		prop_assert_eq!(hash_bytes::<Sha256>(&input).unwrap(), sha2::Sha256::digest(&input).to_vec());
	}

	#[test]
	fn test_sha384_vs_reference(input in prop::collection::vec(any::<u8>(), 0..=1024)) {
		prop_assert_eq!(hash_bytes::<Sha384>(&input).unwrap(), sha2::Sha384::digest(&input).to_vec());
	}

	#[test]
	fn test_sha512_vs_reference(input in prop::collection::vec(any::<u8>(), 0..=1024)) {
		prop_assert_eq!(
			hash::<Sha512>(&input).unwrap(),
			format!("{:x}", sha2::Sha512::digest(&input))
		);
	}

	#[test]
	fn test_deterministic(input in prop::collection::vec(any::<u8>(), 0..=512)) {
		prop_assert_eq!(Sha256::hash(&input).unwrap(), Sha256::hash(&input).unwrap());
		prop_assert_eq!(Sha384::hash(&input).unwrap(), Sha384::hash(&input).unwrap());
		prop_assert_eq!(Sha512::hash(&input).unwrap(), Sha512::hash(&input).unwrap());
	}
}
