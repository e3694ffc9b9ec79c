//! Property-based tests for the Reed-Solomon codec
//!
//! These tests use proptest to validate encoding and decoding with randomly
//! generated parameters, messages and corruption patterns, ensuring
//! correctness across a wide range of scenarios.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rsfec::{Decoded, ReedSolomon};

proptest! {
    /// Property: decode(encode(m)) is the intact message for any message
    /// and any valid (k, n) pair.
    #[test]
    fn prop_round_trip_is_intact(
        data_len in 0usize..=64,
        parity_len in 1usize..=16,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let message: Vec<u8> = (0..data_len).map(|_| rng.random()).collect();

        let rs = ReedSolomon::new(data_len, parity_len).unwrap();
        let codeword = rs.encode(&message).unwrap();

        prop_assert_eq!(codeword.len(), data_len + parity_len);
        prop_assert_eq!(&codeword[..data_len], &message[..]);
        prop_assert_eq!(rs.decode(&codeword).unwrap(), Decoded::Intact(message));
    }

    /// Property: any corruption of up to t = n/2 positions (non-zero XOR
    /// deltas at distinct offsets) is corrected exactly.
    #[test]
    fn prop_corruption_within_capacity_is_corrected(
        data_len in 1usize..=48,
        parity_len in 2usize..=16,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let message: Vec<u8> = (0..data_len).map(|_| rng.random()).collect();

        let rs = ReedSolomon::new(data_len, parity_len).unwrap();
        let clean = rs.encode(&message).unwrap();

        let error_count = rng.random_range(1..=rs.capacity());
        let mut offsets: Vec<usize> = (0..rs.codeword_len()).collect();
        offsets.shuffle(&mut rng);

        let mut corrupted = clean.clone();
        for &offset in &offsets[..error_count] {
            corrupted[offset] ^= rng.random_range(1..=255u8);
        }

        match rs.decode(&corrupted).unwrap() {
            Decoded::Corrected { message: recovered, positions } => {
                prop_assert_eq!(recovered, message);
                let mut expected: Vec<usize> = offsets[..error_count].to_vec();
                expected.sort_unstable();
                let mut located = positions;
                located.sort_unstable();
                prop_assert_eq!(located, expected);
            }
            other => prop_assert!(false, "expected correction, got {:?}", other),
        }
    }

    /// Property: decode is total. Arbitrary byte soup yields intact,
    /// corrected (possibly toward some other codeword) or a terminal
    /// failure, never a panic.
    #[test]
    fn prop_decode_never_panics_on_arbitrary_words(
        data_len in 1usize..=32,
        parity_len in 1usize..=12,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let rs = ReedSolomon::new(data_len, parity_len).unwrap();

        // Arbitrary byte soup, not necessarily near any codeword.
        let word: Vec<u8> = (0..rs.codeword_len()).map(|_| rng.random()).collect();
        let _ = rs.decode(&word);
    }
}

#[cfg(test)]
mod standard_tests {
    use super::*;

    /// Verify the strategy bounds keep every generated pair inside the
    /// field limit (64 + 16 and 48 + 16 are both well under 255).
    #[test]
    fn test_generated_parameters_always_valid() {
        for data_len in [0usize, 48, 64] {
            for parity_len in [1usize, 12, 16] {
                assert!(ReedSolomon::new(data_len, parity_len).is_ok());
            }
        }
    }
}
